//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, SimulationStatistics};
use colored::Colorize;

/// Print the result of attribute analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ATTRIBUTE ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} characters:", result.total_candidates);
    for score in &result.scores {
        println!(
            "   {:<20} [{}] {}  ({}/{})",
            score.attribute,
            entropy_bar(score.entropy, 20).green(),
            format!("{:.3} bits", score.entropy).bright_yellow(),
            score.count,
            score.total
        );
    }

    match result.best() {
        Some(best) => println!(
            "\nFirst question: {}",
            best.attribute.bright_green().bold()
        ),
        None => println!("\n{}", "No attributes to ask about.".red()),
    }
}

/// Print statistics from a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:           {}", stats.strategy);
    println!("   Characters tested:  {}", stats.total);
    println!(
        "   Identified:         {}",
        format!("{}", stats.solved).green()
    );
    println!(
        "   Not identified:     {}",
        if stats.failed == 0 {
            format!("{}", stats.failed).green()
        } else {
            format!("{}", stats.failed).red()
        }
    );
    println!(
        "   Average questions:  {}",
        format!("{:.2}", stats.average_questions)
            .bright_yellow()
            .bold()
    );
    println!("   Most questions:     {}", stats.max_questions);
    println!("   Time taken:         {:.3}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Per character:".bright_cyan().bold());
    for result in &stats.results {
        let status = if result.success {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "   {status} {:<20} {} question(s): {}",
            result.target,
            result.questions.len(),
            result.questions.join(" → ").bright_black()
        );
    }
}
