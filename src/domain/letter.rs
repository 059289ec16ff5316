use serde::{Deserialize, Serialize};

use crate::alphabet::{ALPHABET_LEN, index_of, letter_at};

/// A single lowercase Latin letter.
///
/// Stored as its position in the alphabet, so a `Letter` can never hold an
/// empty, multi-character or out-of-alphabet value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    #[error("expected a letter, found empty text")]
    Empty,
    #[error("expected a single letter, found {0:?}")]
    MultiCharacter(String),
    #[error("{0:?} is not a lowercase letter a-z")]
    OutOfAlphabet(char),
}

impl Letter {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(ALPHABET_LEN as u8 - 1);

    pub fn new(c: char) -> Result<Self, LetterError> {
        index_of(c)
            .map(|i| Self(i as u8))
            .ok_or(LetterError::OutOfAlphabet(c))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        letter_at(self.index())
    }

    /// The following letter, wrapping from `z` to `a`.
    pub fn successor(self) -> Self {
        self.advance(1)
    }

    /// The letter reached after `steps` successors.
    pub fn advance(self, steps: usize) -> Self {
        let offset = steps % ALPHABET_LEN;
        Self(((self.index() + offset) % ALPHABET_LEN) as u8)
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl std::str::FromStr for Letter {
    type Err = LetterError;

    /// Parses display text, which must be exactly one letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(LetterError::MultiCharacter(s.to_string())),
        }
    }
}

impl TryFrom<String> for Letter {
    type Error = LetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.as_char().to_string()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

/// Returns the letter after `letter` in the cycle `a, b, ..., z, a, ...`.
///
/// Inputs outside `a..=z` are an error rather than silently mapping to `a`;
/// use [`next_letter_or_reset`] for that behavior.
pub fn next_letter(letter: char) -> Result<char, LetterError> {
    Letter::new(letter).map(|l| l.successor().as_char())
}

/// Like [`next_letter`], but any out-of-alphabet input yields `'a'`.
pub fn next_letter_or_reset(letter: char) -> char {
    next_letter(letter).unwrap_or_else(|_| Letter::FIRST.as_char())
}
