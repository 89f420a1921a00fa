// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for npalpha

use std::fmt;

/// Casing applied to an emitted phonetic word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatPolicy {
    #[default]
    Lower,
    Upper,
    FirstCapital,
    /// Mirror the source character: uppercase sources get the secondary
    /// casing, lowercase sources stay lowercase.
    FollowInputCase(FollowCase),
}

/// Casing used by [`FormatPolicy::FollowInputCase`] for uppercase sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FollowCase {
    Upper,
    #[default]
    FirstCapital,
}

impl FollowCase {
    pub fn as_policy(self) -> FormatPolicy {
        match self {
            FollowCase::Upper => FormatPolicy::Upper,
            FollowCase::FirstCapital => FormatPolicy::FirstCapital,
        }
    }
}

impl FormatPolicy {
    /// The policy digits take when no number policy was given.
    ///
    /// Digits have no case, so a follow policy collapses to its secondary.
    pub fn number_default(self) -> FormatPolicy {
        match self {
            FormatPolicy::FollowInputCase(secondary) => secondary.as_policy(),
            other => other,
        }
    }
}

impl fmt::Display for FormatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatPolicy::Lower => write!(f, "all-lowercase"),
            FormatPolicy::Upper => write!(f, "all-uppercase"),
            FormatPolicy::FirstCapital => write!(f, "first-capital"),
            FormatPolicy::FollowInputCase(secondary) => {
                write!(f, "follow-input ({})", secondary.as_policy())
            }
        }
    }
}

/// Resolved, read-only casing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub letter_policy: FormatPolicy,
    pub number_policy: FormatPolicy,
    /// True when `number_policy` was derived from `letter_policy`
    pub number_inherited: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(FormatPolicy::Lower)
    }
}

impl Configuration {
    pub fn new(letter_policy: FormatPolicy) -> Self {
        Self {
            letter_policy,
            number_policy: letter_policy.number_default(),
            number_inherited: true,
        }
    }

    pub fn with_number_policy(mut self, number_policy: FormatPolicy) -> Self {
        self.number_policy = number_policy;
        self.number_inherited = false;
        self
    }
}

/// Classification of a single input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Decimal digit; carries its table index (26..=35)
    Digit(usize),
    /// ASCII letter; carries its table index (0..=25) and whether it was uppercase
    Letter { index: usize, upper: bool },
    Other,
}

impl CharClass {
    pub fn of(byte: u8) -> Self {
        if byte.is_ascii_digit() {
            CharClass::Digit(crate::alphabet::DIGIT_OFFSET + usize::from(byte - b'0'))
        } else if byte.is_ascii_uppercase() {
            CharClass::Letter {
                index: usize::from(byte - b'A'),
                upper: true,
            }
        } else if byte.is_ascii_lowercase() {
            CharClass::Letter {
                index: usize::from(byte - b'a'),
                upper: false,
            }
        } else {
            CharClass::Other
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            CharClass::Digit(index) | CharClass::Letter { index, .. } => Some(*index),
            CharClass::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_after_letters() {
        for (offset, byte) in (b'0'..=b'9').enumerate() {
            assert_eq!(CharClass::of(byte), CharClass::Digit(26 + offset));
        }
    }

    #[test]
    fn letters_map_case_insensitively() {
        for (offset, (lower, upper)) in (b'a'..=b'z').zip(b'A'..=b'Z').enumerate() {
            assert_eq!(CharClass::of(lower).index(), Some(offset));
            assert_eq!(CharClass::of(upper).index(), Some(offset));
        }
        assert_eq!(
            CharClass::of(b'Q'),
            CharClass::Letter {
                index: 16,
                upper: true
            }
        );
    }

    #[test]
    fn every_byte_classifies_in_range() {
        for byte in 0..=u8::MAX {
            if let Some(index) = CharClass::of(byte).index() {
                assert!(index < 36, "byte {byte:#x} mapped to {index}");
            } else {
                assert!(!byte.is_ascii_alphanumeric());
            }
        }
    }

    #[test]
    fn follow_number_default_uses_secondary() {
        assert_eq!(
            FormatPolicy::FollowInputCase(FollowCase::Upper).number_default(),
            FormatPolicy::Upper
        );
        assert_eq!(
            FormatPolicy::FollowInputCase(FollowCase::FirstCapital).number_default(),
            FormatPolicy::FirstCapital
        );
        assert_eq!(FormatPolicy::Upper.number_default(), FormatPolicy::Upper);
    }

    #[test]
    fn configuration_defaults_to_lower() {
        let config = Configuration::default();
        assert_eq!(config.letter_policy, FormatPolicy::Lower);
        assert_eq!(config.number_policy, FormatPolicy::Lower);
        assert!(config.number_inherited);
    }
}
