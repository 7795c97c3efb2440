//! Display functions for command results

use super::formatters::{create_progress_bar, format_money};
use crate::commands::SimulationResult;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Players per game: {}", result.players);
    println!("   Rounds per game:  {}", result.rounds);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n💰 {}", "Money:".bright_cyan().bold());
    // Cast is safe: averages of u32 totals fit in u32
    println!(
        "   Average winner:   {}",
        format_money(result.average_winning_total.round() as u32)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best winner:      {}",
        format_money(result.max_winning_total).green()
    );

    println!("\n🎡 {}", "Wheel:".bright_cyan().bold());
    println!(
        "   Turns per round:  {:.2}",
        result.average_turns_per_round
    );
    println!(
        "   Bankruptcies:     {:.2} per game",
        result.bankruptcies_per_game
    );

    println!("\n🏆 {}", "Wins by seat:".bright_cyan().bold());
    for seat in 0..result.players {
        let wins = result.seat_wins.get(&seat).copied().unwrap_or(0);
        let rate = result.win_rate(seat);
        println!(
            "   Seat {}: {} {:>6} ({:>5.1}%)",
            seat + 1,
            create_progress_bar(rate, 1.0, 30).green(),
            wins,
            rate * 100.0
        );
    }
    println!();
}
