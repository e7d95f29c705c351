//! Robot travel distance for entering a code

use super::button::{Button, CENTER_DISTANCE};
use super::code::Code;

/// Distance the robot drives to enter `code`, starting at `last`
///
/// `last` is the button the robot stands at, or `None` when it starts from the
/// arena center. The total is the approach to the first button plus every
/// button-to-button segment of the code.
///
/// # Examples
/// ```
/// use robot_mastermind::core::{Button, CENTER_DISTANCE, Code, travel_distance};
///
/// let code = Code::new(&[Button::T0, Button::T1]).unwrap();
/// let distance = travel_distance(None, &code);
/// assert!((distance - (CENTER_DISTANCE + 920.0)).abs() < 1e-9);
/// ```
#[must_use]
pub fn travel_distance(last: Option<Button>, code: &Code) -> f64 {
    let approach = last.map_or(CENTER_DISTANCE, |button| button.distance(code.first()));

    approach
        + code
            .buttons()
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum::<f64>()
}
