//! Interactive play
//!
//! The user keeps the secret; the robot suggests codes. `PlaySession` holds the
//! game logic for both the terminal UI and the plain stdin mode.

mod app;
mod rendering;
mod session;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use session::{HistoryEntry, Outcome, PlaySession, SessionStats};
