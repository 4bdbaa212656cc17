//! Random secret generation
//!
//! Secrets are used as dynamic-DNS usernames and passwords. Every character
//! is an independent, uniform draw (with replacement) from an [`Alphabet`].
//!
//! - [`Alphabet`]: characters eligible for selection
//! - [`Secret`]: generated value, redacted in `Debug`
//! - [`SecretProfile`]: named alphabet/length pairs used by the admin pages

pub mod alphabet;

pub use alphabet::Alphabet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated secret
///
/// Never stored by this crate; the caller writes it into a form field or
/// prints it. `Debug` does not expose the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Borrow the secret as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the secret, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of characters in the secret
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Secrets are never empty, see [`generate`]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"<REDACTED>").finish()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a secret with the thread-local RNG
///
/// # Panics
///
/// Panics if `length` is 0. An empty alphabet cannot be constructed.
pub fn generate(alphabet: &Alphabet, length: usize) -> Secret {
    generate_with(&mut rand::rng(), alphabet, length)
}

/// Generate a secret with a caller-supplied RNG
///
/// # Panics
///
/// Panics if `length` is 0.
pub fn generate_with<R: Rng>(rng: &mut R, alphabet: &Alphabet, length: usize) -> Secret {
    assert!(length >= 1, "secret length must be at least 1");

    let chars = alphabet.chars();
    let secret = (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();

    Secret(secret)
}

/// Named secret configurations
///
/// The admin pages have shipped two generators: a 16-character alphanumeric
/// one and a 32-character one that mixes in symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecretProfile {
    /// 16 characters from [`Alphabet::alphanumeric`]
    Alphanumeric16,

    /// 32 characters from [`Alphabet::alphanumeric_symbols`]
    #[default]
    Symbols32,

    /// Any alphabet and length
    Custom {
        /// Characters eligible for selection
        alphabet: String,
        /// Number of characters to draw
        length: usize,
    },
}

impl SecretProfile {
    /// Resolve the alphabet for this profile
    ///
    /// # Panics
    ///
    /// Panics on a `Custom` profile with an empty alphabet. Run
    /// [`SecretProfile::validate`] on untrusted configuration first.
    pub fn alphabet(&self) -> Alphabet {
        match self {
            SecretProfile::Alphanumeric16 => Alphabet::alphanumeric(),
            SecretProfile::Symbols32 => Alphabet::alphanumeric_symbols(),
            SecretProfile::Custom { alphabet, .. } => Alphabet::new(alphabet),
        }
    }

    /// Number of characters produced by this profile
    pub fn length(&self) -> usize {
        match self {
            SecretProfile::Alphanumeric16 => 16,
            SecretProfile::Symbols32 => 32,
            SecretProfile::Custom { length, .. } => *length,
        }
    }

    /// Generate a secret with this profile
    pub fn generate(&self) -> Secret {
        generate(&self.alphabet(), self.length())
    }

    /// Generate a secret with this profile and a caller-supplied RNG
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Secret {
        generate_with(rng, &self.alphabet(), self.length())
    }

    /// Validate a profile loaded from configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if let SecretProfile::Custom { alphabet, length } = self {
            if alphabet.is_empty() {
                return Err(crate::Error::config("Secret alphabet cannot be empty"));
            }
            if *length == 0 {
                return Err(crate::Error::config("Secret length must be > 0"));
            }
        }
        Ok(())
    }

    /// Parse a profile name (`alphanumeric16`, `symbols32`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "alphanumeric16" | "alphanumeric_16" => Some(SecretProfile::Alphanumeric16),
            "symbols32" | "symbols_32" => Some(SecretProfile::Symbols32),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_length_and_membership() {
        let alphabet = Alphabet::alphanumeric();
        let secret = generate(&alphabet, 16);

        assert_eq!(secret.len(), 16);
        assert!(secret.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_single_character() {
        let alphabet = Alphabet::new("xyz");
        let secret = generate(&alphabet, 1);

        assert_eq!(secret.len(), 1);
        assert!(alphabet.contains(secret.as_str().chars().next().unwrap()));
    }

    #[test]
    #[should_panic(expected = "secret length must be at least 1")]
    fn test_zero_length_panics() {
        generate(&Alphabet::alphanumeric(), 0);
    }

    #[test]
    fn test_single_symbol_alphabet_repeats() {
        let secret = generate(&Alphabet::new("a"), 5);
        assert_eq!(secret.as_str(), "aaaaa");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let alphabet = Alphabet::alphanumeric_symbols();
        let a = generate_with(&mut StdRng::seed_from_u64(7), &alphabet, 32);
        let b = generate_with(&mut StdRng::seed_from_u64(7), &alphabet, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(SecretProfile::Alphanumeric16.generate().len(), 16);
        assert_eq!(SecretProfile::Symbols32.generate().len(), 32);

        let custom = SecretProfile::Custom {
            alphabet: "01".to_string(),
            length: 8,
        };
        let secret = custom.generate();
        assert_eq!(secret.len(), 8);
        assert!(secret.as_str().chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_profile_validation() {
        assert!(SecretProfile::Symbols32.validate().is_ok());
        assert!(
            SecretProfile::Custom {
                alphabet: String::new(),
                length: 4
            }
            .validate()
            .is_err()
        );
        assert!(
            SecretProfile::Custom {
                alphabet: "ab".to_string(),
                length: 0
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_profile_from_name() {
        assert_eq!(
            SecretProfile::from_name("Alphanumeric16"),
            Some(SecretProfile::Alphanumeric16)
        );
        assert_eq!(
            SecretProfile::from_name("symbols32"),
            Some(SecretProfile::Symbols32)
        );
        assert_eq!(SecretProfile::from_name("hex"), None);
    }

    #[test]
    fn test_secret_not_exposed_in_debug() {
        let secret = generate(&Alphabet::new("q"), 12);
        let debug_str = format!("{:?}", secret);
        assert!(!debug_str.contains("qqqq"));
        assert!(debug_str.contains("REDACTED"));
    }
}
