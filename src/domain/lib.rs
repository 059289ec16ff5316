mod alphabet;
mod invalid_policy;
mod letter;
mod surface_id;

pub use alphabet::{ALPHABET, ALPHABET_LEN, index_of, letter_at};
pub use invalid_policy::InvalidLetterPolicy;
pub use letter::{Letter, LetterError, next_letter, next_letter_or_reset};
pub use surface_id::{SurfaceId, SurfaceIdError};
