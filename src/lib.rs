//! Diacritics on precomposed Latin letters.
//!
//! A curated table maps a base letter and a [`Diacritic`] (a single mark or a
//! combination of marks) to the precomposed accented letter, e.g.
//! `A + ACUTE | CIRCUMFLEX -> Ấ`. The same table is used in reverse to
//! identify or strip diacritics from text. No Unicode normalization is
//! involved; characters outside the table pass through untouched.
//!
//! ```
//! use diacritic_utils::{apply_char, normalize, Diacritic};
//!
//! assert_eq!(apply_char('e', Diacritic::GRAVE), Ok('è'));
//! assert_eq!(normalize("Ærøskøbing"), "Æroskobing");
//! ```

use std::borrow::Cow;

mod diacritic;
mod error;
mod ops;
pub mod table;

pub use diacritic::{Diacritic, ParseDiacriticError};
pub use error::Error;
pub use ops::{
    applicable, apply, apply_char, contains, count, count_all, decompose, find, identify,
    identify_all, normalise, normalize, remove, replace, substitute, Applicable, IdentifyAll,
};

/// The string operations of this crate as methods.
///
/// Methods that transform the string avoid allocating when no character
/// changes, returning the original slice instead.
///
/// For now only implemented for [`&str`](str) and returns
/// [`Cow<str>`](std::borrow::Cow), but in the future might be extended
/// to other types.
pub trait DiacriticUtils<'s> {
    type Output;

    /// Applies a diacritic to a one-character string.
    fn apply_diacritic(self, diacritic: Diacritic) -> Result<char, Error>;
    /// Identifies the diacritic of each character.
    fn identify_diacritics(self) -> IdentifyAll<'s>;
    /// Checks for a particular diacritic, or any diacritic when `None`.
    fn contains_diacritic(self, diacritic: Option<Diacritic>) -> bool;
    /// Character indices where a diacritic occurs.
    fn find_diacritic(self, diacritic: Diacritic) -> Vec<usize>;
    /// Number of characters carrying a diacritic.
    fn count_diacritic(self, diacritic: Diacritic) -> usize;
    /// Strips a given diacritic, leaving every other character as is.
    fn remove_diacritic(self, diacritic: Diacritic) -> Self::Output;
    /// Strips all diacritics.
    fn normalize_diacritics(self) -> Self::Output;
    /// Swaps one diacritic for another, or strips it when `new` is `None`.
    fn substitute_diacritic(
        self,
        old: Diacritic,
        new: Option<Diacritic>,
    ) -> Result<Self::Output, Error>;
    /// Puts a diacritic on every literal occurrence of a character.
    fn replace_with_diacritic(
        self,
        character: char,
        diacritic: Diacritic,
    ) -> Result<Self::Output, Error>;
}

impl<'s> DiacriticUtils<'s> for &'s str {
    type Output = Cow<'s, str>;

    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// assert_eq!("o".apply_diacritic(Diacritic::HORN | Diacritic::TILDE), Ok('ỡ'));
    /// assert!("oo".apply_diacritic(Diacritic::HORN).is_err());
    /// ```
    fn apply_diacritic(self, diacritic: Diacritic) -> Result<char, Error> {
        apply(self, diacritic)
    }

    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// let marks: Vec<_> = "ŝi".identify_diacritics().map(|(_, d)| d).collect();
    /// assert_eq!(marks, [Some(Diacritic::CIRCUMFLEX), None]);
    /// ```
    fn identify_diacritics(self) -> IdentifyAll<'s> {
        identify_all(self)
    }

    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// assert!("Şişli".contains_diacritic(Some(Diacritic::CEDILLA)));
    /// assert!(!"Sisli".contains_diacritic(None));
    /// ```
    fn contains_diacritic(self, diacritic: Option<Diacritic>) -> bool {
        contains(self, diacritic)
    }

    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// assert_eq!("Dvořák".find_diacritic(Diacritic::CARON), [3]);
    /// ```
    fn find_diacritic(self, diacritic: Diacritic) -> Vec<usize> {
        find(self, diacritic)
    }

    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// assert_eq!("čeština".count_diacritic(Diacritic::CARON), 2);
    /// ```
    fn count_diacritic(self, diacritic: Diacritic) -> usize {
        count(self, diacritic)
    }

    /// This is similar to [`remove`], but as a method:
    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// # use assert_matches::assert_matches;
    /// # use std::borrow::Cow;
    /// assert_matches!("Dvořák".remove_diacritic(Diacritic::CARON), Cow::Owned(s) if s == "Dvorák");
    /// assert_matches!("Dvorak".remove_diacritic(Diacritic::CARON), Cow::Borrowed("Dvorak"));
    /// ```
    fn remove_diacritic(self, diacritic: Diacritic) -> Self::Output {
        remove(self, diacritic)
    }

    /// This is similar to [`normalize`], but as a method:
    /// ```
    /// # use diacritic_utils::DiacriticUtils;
    /// # use assert_matches::assert_matches;
    /// # use std::borrow::Cow;
    /// assert_matches!("Dvořák".normalize_diacritics(), Cow::Owned(s) if s == "Dvorak");
    /// assert_matches!("Dvorak".normalize_diacritics(), Cow::Borrowed("Dvorak"));
    /// ```
    fn normalize_diacritics(self) -> Self::Output {
        normalize(self)
    }

    /// This is similar to [`substitute`], but as a method:
    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// # use assert_matches::assert_matches;
    /// # use std::borrow::Cow;
    /// assert_matches!(
    ///     "Mötley".substitute_diacritic(Diacritic::DIAERESIS, Some(Diacritic::STROKE)),
    ///     Ok(Cow::Owned(s)) if s == "Møtley"
    /// );
    /// assert_matches!(
    ///     "Motley".substitute_diacritic(Diacritic::DIAERESIS, None),
    ///     Ok(Cow::Borrowed("Motley"))
    /// );
    /// ```
    fn substitute_diacritic(
        self,
        old: Diacritic,
        new: Option<Diacritic>,
    ) -> Result<Self::Output, Error> {
        substitute(self, old, new)
    }

    /// This is similar to [`replace`], but as a method:
    /// ```
    /// # use diacritic_utils::{Diacritic, DiacriticUtils};
    /// # use assert_matches::assert_matches;
    /// # use std::borrow::Cow;
    /// assert_matches!(
    ///     "Malmo".replace_with_diacritic('o', Diacritic::UMLAUT),
    ///     Ok(Cow::Owned(s)) if s == "Malmö"
    /// );
    /// ```
    fn replace_with_diacritic(
        self,
        character: char,
        diacritic: Diacritic,
    ) -> Result<Self::Output, Error> {
        replace(self, character, diacritic)
    }
}
