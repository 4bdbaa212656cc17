use std::fmt;

const ALPHANUMERIC: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Deployed verbatim; the uppercase run stops at P.
const ALPHANUMERIC_SYMBOLS: &str =
    "abcdefghijklmnopqrstuvwxyz!@#$%^&*()-+<>ABCDEFGHIJKLMNOP1234567890";

/// Ordered, non-empty set of characters eligible for secret generation
///
/// Duplicates are kept: a character listed twice is drawn twice as often.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `chars`
    ///
    /// # Panics
    ///
    /// Panics if `chars` is empty.
    pub fn new(chars: &str) -> Self {
        assert!(!chars.is_empty(), "alphabet must not be empty");
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// `0-9`, `a-z` and `A-Z` (62 characters)
    pub fn alphanumeric() -> Self {
        Self::new(ALPHANUMERIC)
    }

    /// Lowercase letters, `!@#$%^&*()-+<>`, `A-P` and digits
    pub fn alphanumeric_symbols() -> Self {
        Self::new(ALPHANUMERIC_SYMBOLS)
    }

    /// Characters in draw order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (duplicates included)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` can be drawn from this alphabet
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("len", &self.chars.len())
            .finish()
    }
}
