//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::Feedback;
use crate::interactive::{Outcome, PlaySession};
use crate::output::formatters::feedback_pegs;
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Undo,
    /// The suggested code was right
    Win,
    Answer(Feedback),
}

/// Parse one input line; `None` if it is neither a command nor feedback
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "new" | "n" => Some(Command::NewGame),
        "undo" | "u" => Some(Command::Undo),
        "win" | "correct" | "yes" | "solved" => Some(Command::Win),
        other => Feedback::from_str(other).map(Command::Answer),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Strategy + Clone>(strategy: S) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Robot Mastermind - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret code. After each suggestion, enter the feedback:\n");
    println!("  - Two numbers: buttons in the right place, then right button wrong place");
    println!("  - For example '2 1', '2,1', 'b2w1' or '21'");
    println!("  - Or type 'win' if the code was right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last answer\n");

    let mut session = PlaySession::new(strategy);

    loop {
        let guess = session.current_guess();
        let code_length = guess.len();

        println!("────────────────────────────────────────────────────────────");
        match session.consistent_count() {
            Some(count) => println!("Turn {}: {count} consistent codes", session.turn()),
            None => println!("Turn {}", session.turn()),
        }
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n🤖 Suggested code: {}\n",
            guess.to_string().bright_yellow().bold()
        );

        let feedback = loop {
            let input = get_user_input("Enter feedback (exact wrong, 'win', or command)")?;

            match parse_command(&input) {
                Some(Command::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Some(Command::NewGame) => {
                    session.new_game();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                Some(Command::Undo) => {
                    if session.undo() {
                        println!("✓ Undone! Back to turn {}\n", session.turn());
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                Some(Command::Win) => break Some(Feedback::new(code_length as u8, 0)),
                Some(Command::Answer(feedback)) => break Some(feedback),
                None => println!("❌ Invalid feedback! Use two numbers such as '2 1'\n"),
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        match session.submit(feedback) {
            Ok(Outcome::Next(_)) => {}
            Ok(Outcome::Solved { guesses }) => {
                print_celebration(&session, guesses);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        session.new_game();
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Err(err) => println!("\n❌ {err}. Check the feedback, or 'undo' the last answer.\n"),
        }
    }
}

fn print_celebration<S: Strategy + Clone>(session: &PlaySession<S>, guesses: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉  C O D E   C R A C K E D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );

    let distance: f64 = session.history().iter().map(|entry| entry.distance).sum();
    println!("  Robot travelled {distance:.1} mm");

    println!("\n  Guess history:");
    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {} {}",
            (i + 1).to_string().bright_black(),
            entry.guess.to_string().bright_white().bold(),
            feedback_pegs(entry.feedback, entry.guess.len()),
            entry.feedback
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("Q"), Some(Command::Quit));
        assert_eq!(parse_command(" new "), Some(Command::NewGame));
        assert_eq!(parse_command("u"), Some(Command::Undo));
        assert_eq!(parse_command("win"), Some(Command::Win));
    }

    #[test]
    fn parses_feedback() {
        let expected = Some(Command::Answer(Feedback::new(2, 1)));
        assert_eq!(parse_command("2 1"), expected);
        assert_eq!(parse_command("2,1"), expected);
        assert_eq!(parse_command("B2W1"), expected);
        assert_eq!(parse_command("21"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("1 2 3"), None);
    }
}
