//! Core domain types for the robot Mastermind game
//!
//! Buttons, codes, feedback and the enumerated code universe. Everything here is
//! pure and deterministic; the only randomness is `Code::random`, which takes the
//! generator from the caller.

mod button;
mod code;
mod feedback;
mod travel;
mod universe;

pub use button::{BUTTON_COUNT, Button, CENTER_DISTANCE};
pub use code::{Code, CodeError, MAX_CODE_LENGTH};
pub use feedback::{Feedback, FeedbackError};
pub use travel::travel_distance;
pub use universe::{ConfigError, Universe};
pub(crate) use universe::validate_code_length;
