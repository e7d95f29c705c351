//! Code representation
//!
//! A Code is an ordered sequence of buttons, used both as a guess and as the
//! secret. Buttons may repeat across positions.

use super::button::{BUTTON_COUNT, Button};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Longest supported code. The universe holds `8^length` codes and scoring is
/// quadratic in it, so longer codes are refused at construction.
pub const MAX_CODE_LENGTH: usize = 6;

/// An ordered sequence of 1 to `MAX_CODE_LENGTH` buttons
///
/// Stored inline so codes are `Copy`. Slots past `len` always hold `Button::T0`,
/// which keeps the derived equality and hashing element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    buttons: [Button; MAX_CODE_LENGTH],
    len: u8,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    TooLong(usize),
    InvalidButton(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one button"),
            Self::TooLong(len) => {
                write!(f, "Code may have at most {MAX_CODE_LENGTH} buttons, got {len}")
            }
            Self::InvalidButton(token) => {
                write!(f, "'{token}' is not a button (expected 0-7 or T0-T7)")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a slice of buttons
    ///
    /// # Errors
    /// Returns `CodeError` if the slice is empty or longer than `MAX_CODE_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::{Button, Code};
    ///
    /// let code = Code::new(&[Button::T0, Button::T3]).unwrap();
    /// assert_eq!(code.len(), 2);
    /// assert_eq!(code.to_string(), "T0-T3");
    /// ```
    pub fn new(buttons: &[Button]) -> Result<Self, CodeError> {
        if buttons.is_empty() {
            return Err(CodeError::Empty);
        }
        if buttons.len() > MAX_CODE_LENGTH {
            return Err(CodeError::TooLong(buttons.len()));
        }

        let mut slots = [Button::T0; MAX_CODE_LENGTH];
        slots[..buttons.len()].copy_from_slice(buttons);

        Ok(Self {
            buttons: slots,
            // Bounded by MAX_CODE_LENGTH
            len: buttons.len() as u8,
        })
    }

    /// Create a code from button indices
    ///
    /// # Errors
    /// Returns `CodeError` if an index is not a button or the length is invalid.
    pub fn from_indices(indices: &[usize]) -> Result<Self, CodeError> {
        let buttons = indices
            .iter()
            .map(|&i| {
                Button::from_index(i).ok_or_else(|| CodeError::InvalidButton(i.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&buttons)
    }

    /// Code at `index` of the canonical enumeration for `length`
    ///
    /// Position 0 is the most significant base-8 digit.
    pub(crate) fn from_canonical_index(index: usize, length: usize) -> Self {
        debug_assert!((1..=MAX_CODE_LENGTH).contains(&length));
        let mut slots = [Button::T0; MAX_CODE_LENGTH];
        let mut rest = index;
        for slot in slots[..length].iter_mut().rev() {
            *slot = Button::ALL[rest % BUTTON_COUNT];
            rest /= BUTTON_COUNT;
        }
        Self {
            buttons: slots,
            len: length as u8,
        }
    }

    /// Draw a uniformly random code of the given length
    ///
    /// # Panics
    /// Panics if `length` is 0 or greater than `MAX_CODE_LENGTH`.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        assert!(
            (1..=MAX_CODE_LENGTH).contains(&length),
            "code length {length} out of range"
        );
        let mut slots = [Button::T0; MAX_CODE_LENGTH];
        for slot in &mut slots[..length] {
            *slot = Button::ALL[rng.random_range(0..BUTTON_COUNT)];
        }
        Self {
            buttons: slots,
            len: length as u8,
        }
    }

    /// Number of buttons in the code
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; codes hold at least one button
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buttons of the code in order
    #[inline]
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons[..self.len()]
    }

    /// Button at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn button_at(&self, position: usize) -> Button {
        self.buttons()[position]
    }

    /// First button pushed when entering this code
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Button {
        self.buttons[0]
    }

    /// Last button pushed; where the robot stands afterwards
    #[inline]
    #[must_use]
    pub fn last(&self) -> Button {
        self.buttons[self.len() - 1]
    }

    /// Occurrences of each button, indexed by `Button::index`
    #[inline]
    pub(crate) fn button_counts(&self) -> [u8; BUTTON_COUNT] {
        let mut counts = [0u8; BUTTON_COUNT];
        for button in self.buttons() {
            counts[button.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, button) in self.buttons().iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{button}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse `"0,1,2"`, `"T0 T1 T2"`, `"T0-T1-T2"` or concatenated digits `"012"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let buttons = match tokens.as_slice() {
            [] => return Err(CodeError::Empty),
            [single] if single.len() > 1 && single.chars().all(|c| c.is_ascii_digit()) => single
                .chars()
                .map(|c| {
                    Button::parse_token(&c.to_string())
                        .ok_or_else(|| CodeError::InvalidButton(c.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            many => many
                .iter()
                .map(|t| {
                    Button::parse_token(t).ok_or_else(|| CodeError::InvalidButton((*t).to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        Self::new(&buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[Button::T2, Button::T2, Button::T7]).unwrap();
        assert_eq!(code.len(), 3);
        assert!(!code.is_empty());
        assert_eq!(code.buttons(), &[Button::T2, Button::T2, Button::T7]);
        assert_eq!(code.first(), Button::T2);
        assert_eq!(code.last(), Button::T7);
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(&[]), Err(CodeError::Empty));
        assert_eq!(
            Code::new(&[Button::T0; MAX_CODE_LENGTH + 1]),
            Err(CodeError::TooLong(MAX_CODE_LENGTH + 1))
        );
    }

    #[test]
    fn from_indices_rejects_unknown_button() {
        assert!(Code::from_indices(&[0, 8]).is_err());
        assert_eq!(
            Code::from_indices(&[1, 2]).unwrap().buttons(),
            &[Button::T1, Button::T2]
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn button_at_out_of_range_panics() {
        let code = Code::from_indices(&[0, 1]).unwrap();
        let _ = code.button_at(2);
    }

    #[test]
    fn equality_is_element_wise() {
        let a = Code::from_indices(&[0, 1, 2]).unwrap();
        let b: Code = "T0 T1 T2".parse().unwrap();
        let c = Code::from_indices(&[0, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn parse_accepts_several_notations() {
        let expected = Code::from_indices(&[3, 0, 5]).unwrap();
        for text in ["3,0,5", "305", "T3 T0 T5", "T3-T0-T5", "t3, t0, t5"] {
            assert_eq!(text.parse::<Code>().unwrap(), expected, "{text}");
        }
        // A lone digit is a one-button code
        assert_eq!("4".parse::<Code>().unwrap().buttons(), &[Button::T4]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Code>(), Err(CodeError::Empty));
        assert!("0,9".parse::<Code>().is_err());
        assert!("abc".parse::<Code>().is_err());
        assert!("0123456".parse::<Code>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let code = Code::from_indices(&[7, 1, 1, 4]).unwrap();
        assert_eq!(code.to_string(), "T7-T1-T1-T4");
        assert_eq!(code.to_string().parse::<Code>().unwrap(), code);
    }

    #[test]
    fn button_counts_track_repeats() {
        let code = Code::from_indices(&[5, 5, 2]).unwrap();
        let counts = code.button_counts();
        assert_eq!(counts[5], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 3);
    }

    #[test]
    fn random_codes_have_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in 1..=MAX_CODE_LENGTH {
            let code = Code::random(&mut rng, length);
            assert_eq!(code.len(), length);
            // Unused slots stay canonical so equality is unaffected
            assert_eq!(Code::new(code.buttons()).unwrap(), code);
        }
    }
}
