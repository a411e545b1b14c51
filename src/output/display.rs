//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, OpenerReport, SolveResult};
use crate::record::Statistics;
use crate::solver::Session;
use colored::Colorize;

/// Pool sizes at or below this are listed in full
const LIST_LIMIT: usize = 10;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_tiles(&step.guess),
            step.guess.verdicts.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining() {
                    println!("  Expected:   {expected:.1} candidates");
                }
                if let Some(gained) = step.information_gained() {
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        gained,
                        step.candidates_before as f64 / step.candidates_after as f64
                    );
                }
            }
        }
    }

    println!();
    if result.record.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.record.turns)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.record.turns)
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(metrics.entropy, 30).green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);
    println!("   Outcomes:    {} distinct verdict rows", metrics.buckets);
    println!(
        "   Answer:      {}",
        if result.is_answer { "possible" } else { "never" }
    );

    if !result.alternatives.is_empty() {
        println!("\n🏆 {}", "Top openings:".bright_cyan().bold());
        for (rank, ranked) in result.alternatives.iter().enumerate() {
            let marker = if ranked.in_pool { "*" } else { " " };
            println!(
                "   {:>2}. {}{} {:.3} bits",
                rank + 1,
                ranked.word.text().to_uppercase(),
                marker,
                ranked.entropy
            );
        }
        println!("   {}", "* possible answer".bright_black());
    }
}

/// Print per-opener simulation results
pub fn print_simulation_report(reports: &[OpenerReport]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for report in reports {
        let stats = &report.statistics;
        println!(
            "\n🎯 {}",
            report.opener.text().to_uppercase().bright_yellow().bold()
        );
        println!("   Games:            {}", stats.games_played);
        println!(
            "   Win rate:         {}",
            format!("{:.1}%", stats.win_rate).green().bold()
        );
        println!(
            "   Average guesses:  {}",
            format!("{:.3}", stats.average_guesses).bright_yellow()
        );
        println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
        if report.errors > 0 {
            println!("   Errors:           {}", report.errors.to_string().red());
        }
        print_distribution(stats);
        print_losses(stats);
    }
}

/// Print statistics from a result store
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!("   Win %:           {:.0}", stats.win_rate);
    println!("   Average guesses: {:.2}", stats.average_guesses);
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    print_distribution(stats);
    print_losses(stats);
}

/// Print the board and remaining candidates after an interactive turn
pub fn print_turn(session: &Session) {
    if let Some(last) = session.history().last() {
        println!("   {}", colored_tiles(last));
    }

    let pool = session.pool();
    if session.state().is_terminal() {
        return;
    }
    if pool.len() <= LIST_LIMIT {
        let words: Vec<String> = pool.iter().map(|w| w.text().to_uppercase()).collect();
        println!("   {} left: {}", pool.len(), words.join(" ").bright_black());
    } else {
        println!("   {} candidates left", pool.len());
    }
}

fn print_distribution(stats: &Statistics) {
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.distribution.values().copied().max().unwrap_or(0);
    for (&turns, &count) in &stats.distribution {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {turns}: {} {count:4}", bar.green());
    }
}

fn print_losses(stats: &Statistics) {
    if stats.lost_on.is_empty() {
        return;
    }
    let words: Vec<String> = stats
        .lost_on
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect();
    println!("\n   Lost on: {}", words.join(", ").red());
}
