//! Wordle solving
//!
//! Constraint matching, reachable-outcome enumeration, entropy ranking and the
//! solve loop that ties them to an [`Oracle`].

pub mod combinations;
pub mod constraint;
mod engine;
pub mod entropy;
mod error;
pub mod oracle;

pub use crate::core::GuessRecord;
pub use engine::{Session, SolveState, Solver, SolverConfig};
pub use error::SolveError;
pub use oracle::{Oracle, OracleError, SimulatedGame, StdinOracle};
