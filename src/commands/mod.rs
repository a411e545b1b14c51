//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::play_interactive;
pub use simulate::{OpenerReport, SimulationConfig, draw_games, simulate};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use stats::load_statistics;
