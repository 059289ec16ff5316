//! The fixed, ordered alphabet the cycler walks through.

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

pub const ALPHABET_LEN: usize = 26;

/// Position of `c` in [`ALPHABET`], or `None` for anything outside `a..=z`.
pub fn index_of(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

/// Letter at `index`, wrapping past the end of the alphabet.
pub fn letter_at(index: usize) -> char {
    char::from(ALPHABET.as_bytes()[index % ALPHABET_LEN])
}
