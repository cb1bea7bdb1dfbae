//! # Password generation — uniform draws from an assembled character set
//!
//! The charset is the union of the character classes selected in
//! [`PasswordRules`], assembled lowercase → uppercase → digits → symbols.
//! Each output character is drawn independently and uniformly from that
//! charset using the operating system's CSPRNG, so every generated password
//! is as strong as the selected classes allow. Length bounds come from
//! [`crate::settings`].

use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

use crate::settings::PasswordLimits;

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Reasons a generation request is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Select at least one character type")]
    NoCharacterSets,
    #[error("Length must be between {min} and {max}")]
    LengthOutOfRange { min: u32, max: u32 },
}

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub length: u32,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl PasswordRules {
    /// The union of the selected character classes: lowercase first, then
    /// uppercase, digits, and symbols.
    pub fn charset(&self) -> Vec<char> {
        let mut chars = Vec::new();
        if self.lowercase {
            chars.extend(LOWERCASE.chars());
        }
        if self.uppercase {
            chars.extend(UPPERCASE.chars());
        }
        if self.numbers {
            chars.extend(DIGITS.chars());
        }
        if self.symbols {
            chars.extend(SYMBOLS.chars());
        }
        chars
    }
}

/// Generate one password according to `rules`.
pub fn generate(rules: &PasswordRules, limits: &PasswordLimits) -> Result<String, PasswordError> {
    let charset = rules.charset();
    if charset.is_empty() {
        return Err(PasswordError::NoCharacterSets);
    }
    if rules.length < limits.min || rules.length > limits.max {
        return Err(PasswordError::LengthOutOfRange {
            min: limits.min,
            max: limits.max,
        });
    }

    let mut rng = OsRng;
    let mut password = String::with_capacity(rules.length as usize);
    for _ in 0..rules.length {
        password.push(charset[rng.gen_range(0..charset.len())]);
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> PasswordLimits {
        PasswordLimits { min: 1, max: 128 }
    }

    fn rules(length: u32) -> PasswordRules {
        PasswordRules {
            length,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    #[test]
    fn charset_is_the_union_of_selected_classes() {
        let only_lower = PasswordRules {
            uppercase: false,
            numbers: false,
            symbols: false,
            ..rules(16)
        };
        let charset = only_lower.charset();
        assert_eq!(charset.len(), 26);
        assert!(charset.iter().all(|c| c.is_ascii_lowercase()));

        assert_eq!(rules(16).charset().len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn charset_keeps_class_order() {
        let lower_and_digits = PasswordRules {
            uppercase: false,
            symbols: false,
            ..rules(16)
        };
        let charset = lower_and_digits.charset();
        assert_eq!(charset[0], 'a');
        assert_eq!(charset[26], '0');
    }

    #[test]
    fn no_classes_is_rejected_before_length() {
        let none = PasswordRules {
            length: 0,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(generate(&none, &limits()), Err(PasswordError::NoCharacterSets));
    }

    #[test]
    fn length_bounds_are_enforced() {
        let out_of_range = PasswordError::LengthOutOfRange { min: 1, max: 128 };
        assert_eq!(generate(&rules(0), &limits()), Err(out_of_range.clone()));
        assert_eq!(generate(&rules(129), &limits()), Err(out_of_range));

        assert_eq!(generate(&rules(1), &limits()).unwrap().chars().count(), 1);
        assert_eq!(generate(&rules(128), &limits()).unwrap().chars().count(), 128);
    }

    #[test]
    fn output_draws_only_from_the_charset() {
        let digits_and_symbols = PasswordRules {
            uppercase: false,
            lowercase: false,
            ..rules(64)
        };
        let password = generate(&digits_and_symbols, &limits()).unwrap();
        assert!(password
            .chars()
            .all(|c| DIGITS.contains(c) || SYMBOLS.contains(c)));
    }

    #[test]
    fn output_is_not_constant() {
        let a = generate(&rules(32), &limits()).unwrap();
        let b = generate(&rules(32), &limits()).unwrap();
        assert_ne!(a, b);
    }
}
