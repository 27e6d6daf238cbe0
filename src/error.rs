use thiserror::Error;

use crate::Diacritic;

/// Failure to apply a diacritic to a character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The character argument wasn't exactly one code point.
    #[error("can only apply a diacritic to a single character, got {len} characters")]
    InvalidInput { len: usize },
    /// No letter in the table takes this diacritic or combination.
    #[error("invalid diacritic or combination of diacritics: {0}")]
    UnknownDescriptor(Diacritic),
    /// The diacritic exists, but not on this letter.
    #[error("character {character:?} is not applicable for the {diacritic} diacritic")]
    IncompatibleLetter { character: char, diacritic: Diacritic },
}
