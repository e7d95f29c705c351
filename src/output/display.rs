//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, round_cell};
use crate::commands::{AnalysisResult, SimulateResult, SolveResult, TestAllStatistics};
use crate::simulation::ROUND_COLUMNS;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let code_length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.code,
            feedback_pegs(step.feedback, code_length),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            if let (Some(before), Some(after)) = (step.consistent_before, step.consistent_after) {
                println!("  Consistent: {before} → {after}");
                if after > 0 {
                    let reduction = before as f64 / after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
            println!("  Travel:     {:.1} mm", step.distance);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses, {:.1} mm travelled",
                result.steps.len(),
                result.total_distance()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of code analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_candidates as f64).log2();
    let bar = create_progress_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against all {} codes:", result.total_candidates);
    println!(
        "   Entropy:        [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected size:  {:.1} codes remain",
        result.expected_size
    );
    println!("   Minimax:        {} (smallest part)", result.minimax);
    println!("   Largest part:   {}", result.largest_part);
    println!(
        "   Parts:          {} distinct of {} non-empty",
        result.most_parts, result.non_empty_parts
    );
    println!(
        "   Travel:         {:.1} mm from the center",
        result.distance_from_center
    );
}

/// Print the aggregated result of a batch of simulations
pub fn print_simulation_report(result: &SimulateResult) {
    let title = format!("Testing '{}'", result.strategy);
    println!("\n{}", title.bright_cyan().bold());
    println!("{}", "=".repeat(title.chars().count()).cyan());

    let sim = &result.config.simulation;
    println!("\nTime Limit:   {} [s]", sim.time_limit_secs);
    println!("Robot Speed:  {} [mm/s]", sim.robot_speed);
    println!("Code Length:  {}", sim.code_length);
    println!("CPU Slowness: {}", sim.cpu_slowness);
    println!("Simulations:  {}", result.config.simulations);
    println!("Tie-break:    {}", result.config.strategy.tie_break);

    let report = &result.report;
    println!("\n📊 {}", "Results".bright_cyan().bold());
    println!(
        "  Successes: {}",
        format!("{:.5}", report.mean_successes).bright_yellow().bold()
    );
    match report.expected_guesses {
        Some(expected) => println!("  Expected:  {expected:.5} [Guesses/Success]"),
        None => println!("  Expected:  {} [Guesses/Success]", "-".red()),
    }
    println!();
    println!("  Driving Time:  {:.2} [%]", report.driving_percent);
    println!("  Thinking Time: {:.2} [%]", report.thinking_percent);

    println!();
    println!("|   1   |   2   |   3   |   4   |   5   |   6   |   7   |  >=8  | [Round]");
    println!("|===============================================================|");
    let cells: Vec<String> = (0..ROUND_COLUMNS)
        .map(|column| round_cell(report.round_percentages.map(|row| row[column])))
        .collect();
    println!("| {} | [%]", cells.join(" | "));

    println!(
        "\n  Wall time: {:.2}s",
        result.duration.as_secs_f64()
    );
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results: {} ", stats.strategy);
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Average travel:      {:.1} mm", stats.average_distance);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", code.to_string().yellow());
        }
    }
}
