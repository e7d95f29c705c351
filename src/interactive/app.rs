//! TUI application state and logic

use super::session::{Outcome, PlaySession};
use crate::core::Feedback;
use crate::solver::StrategyType;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a> {
    pub session: PlaySession<StrategyType<'a>>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(strategy: StrategyType<'a>) -> Self {
        let session = PlaySession::new(strategy);
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Feedback,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Welcome! Think of a code, the robot plays '{}'.",
                app.session.strategy_name()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback as two numbers: exact, then wrong place (e.g. '2 1')",
            MessageStyle::Info,
        );
        app
    }

    /// Length of the codes being played
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.session.current_guess().len()
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Some(feedback) = Feedback::from_str(input) else {
            self.add_message("Invalid feedback! Use two numbers such as '2 1'", MessageStyle::Error);
            return;
        };

        let guess = self.session.current_guess();
        match self.session.submit(feedback) {
            Ok(Outcome::Next(next)) => {
                debug!(%guess, %feedback, %next, "answered");
                let remaining = self
                    .session
                    .consistent_count()
                    .map_or_else(String::new, |count| format!(" ({count} consistent codes)"));
                self.add_message(&format!("Next: {next}{remaining}"), MessageStyle::Info);
            }
            Ok(Outcome::Solved { guesses }) => {
                info!(%guess, guesses, "code cracked");
                self.input_mode = InputMode::WinCelebration;

                let celebration = match guesses {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 CRACKED in {guesses} guesses! 🔥"),
                    _ => format!("🎊 SOLVED in {guesses} guesses! 🎊"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("{err}. Press 'u' to undo."), MessageStyle::Error);
            }
        }
        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! The robot starts where it stands.",
            MessageStyle::Info,
        );
    }

    pub fn undo_last(&mut self) {
        if self.session.undo() {
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Answer with a perfect match
    pub fn declare_win(&mut self) {
        let perfect = format!("{} 0", self.code_length());
        self.handle_feedback(&perfect);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Char('q') | KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Char('n')) => app.new_game(),
                (InputMode::WinCelebration, _) => {}
                (InputMode::Feedback, KeyCode::Char('u')) => app.undo_last(),
                (InputMode::Feedback, KeyCode::Char('w')) => app.declare_win(),
                (InputMode::Feedback, KeyCode::Char(c)) => {
                    if c.is_ascii_digit() || c == ' ' || c == ',' {
                        app.input_buffer.push(c);
                    }
                }
                (InputMode::Feedback, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Feedback, KeyCode::Enter) => {
                    let input = app.input_buffer.clone();
                    app.handle_feedback(&input);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;
    use crate::solver::{StrategyConfig, StrategyKind};

    fn app(universe: &Universe) -> App<'_> {
        let config = StrategyConfig::new(universe.code_length(), StrategyKind::Minimax).unwrap();
        App::new(StrategyType::build(&config, universe).unwrap())
    }

    #[test]
    fn feedback_advances_the_game() {
        let universe = Universe::new(2).unwrap();
        let mut app = app(&universe);
        app.input_buffer.push_str("0 0");

        let input = app.input_buffer.clone();
        app.handle_feedback(&input);

        assert_eq!(app.session.history().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn invalid_feedback_keeps_the_buffer() {
        let universe = Universe::new(2).unwrap();
        let mut app = app(&universe);
        app.input_buffer.push_str("7");

        let input = app.input_buffer.clone();
        app.handle_feedback(&input);

        assert!(app.session.history().is_empty());
        assert_eq!(app.input_buffer, "7");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_and_new_game() {
        let universe = Universe::new(2).unwrap();
        let mut app = app(&universe);

        app.declare_win();
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.session.stats().games_won, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let universe = Universe::new(2).unwrap();
        let mut app = app(&universe);
        for _ in 0..10 {
            app.undo_last();
        }
        assert_eq!(app.messages.len(), 5);
    }
}
