//! Buttons of the arena
//!
//! The robot enters a code by driving to and pushing buttons placed on a ring
//! around the arena center. Each button has a fixed position in millimetres.

use std::fmt;

/// Number of distinct buttons (the alphabet size)
pub const BUTTON_COUNT: usize = 8;

/// Distance from the arena center to every button, in millimetres
pub const CENTER_DISTANCE: f64 = 1084.4;

/// One of the eight arena buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
}

impl Button {
    /// All buttons in canonical order
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::T0,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
    ];

    /// Index of this button in `Button::ALL`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Button for an index, or `None` if `index >= BUTTON_COUNT`
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BUTTON_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Position of the button in the arena as `(x, y)` millimetres
    #[must_use]
    pub const fn position(self) -> (i32, i32) {
        match self {
            Self::T0 => (-460, 982),
            Self::T1 => (460, 982),
            Self::T2 => (982, 460),
            Self::T3 => (982, -460),
            Self::T4 => (460, -982),
            Self::T5 => (-460, -982),
            Self::T6 => (-982, -460),
            Self::T7 => (-982, 460),
        }
    }

    /// Euclidean distance to another button
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::Button;
    ///
    /// assert!((Button::T0.distance(Button::T1) - 920.0).abs() < 1e-9);
    /// assert_eq!(Button::T5.distance(Button::T5), 0.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let (x1, y1) = self.position();
        let (x2, y2) = other.position();
        f64::from(x1 - x2).hypot(f64::from(y1 - y2))
    }

    /// Parse a single button token: `"3"`, `"T3"` or `"t3"`
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        let digits = token
            .strip_prefix('T')
            .or_else(|| token.strip_prefix('t'))
            .unwrap_or(token);
        digits.parse::<usize>().ok().and_then(Self::from_index)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_all() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
            assert_eq!(Button::from_index(i), Some(*button));
        }
        assert_eq!(Button::from_index(BUTTON_COUNT), None);
    }

    #[test]
    fn distance_is_symmetric() {
        for a in Button::ALL {
            for b in Button::ALL {
                assert!((a.distance(b) - b.distance(a)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn neighbours_on_the_same_side() {
        // T0 and T1 share y = 982
        assert!((Button::T0.distance(Button::T1) - 920.0).abs() < 1e-9);
        // T2 and T3 share x = 982
        assert!((Button::T2.distance(Button::T3) - 920.0).abs() < 1e-9);
    }

    #[test]
    fn buttons_sit_on_the_center_ring() {
        for button in Button::ALL {
            let (x, y) = button.position();
            let radius = f64::from(x).hypot(f64::from(y));
            assert!((radius - CENTER_DISTANCE).abs() < 0.1, "{button}: {radius}");
        }
    }

    #[test]
    fn parse_token_accepts_prefixes() {
        assert_eq!(Button::parse_token("3"), Some(Button::T3));
        assert_eq!(Button::parse_token("T7"), Some(Button::T7));
        assert_eq!(Button::parse_token("t0"), Some(Button::T0));
        assert_eq!(Button::parse_token("8"), None);
        assert_eq!(Button::parse_token("x1"), None);
        assert_eq!(Button::parse_token(""), None);
    }

    #[test]
    fn display_uses_t_prefix() {
        assert_eq!(Button::T4.to_string(), "T4");
    }
}
