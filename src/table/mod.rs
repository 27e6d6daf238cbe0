//! The forward table maps a diacritic to the letters that take it, the
//! reverse table maps every accented letter (in both cases) back to its
//! base letter and diacritic.
//!
//! Both are built once from the curated data in [`data`] and shared
//! read-only for the rest of the process.

mod data;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::{Diacritic, Error};

/// The origin of an accented character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    /// Base letter, always lowercase.
    pub base: char,
    pub diacritic: Diacritic,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Tables {
    // Uppercase base letter -> uppercase accented letter.
    forward: HashMap<Diacritic, BTreeMap<char, char>>,
    reverse: HashMap<char, Decomposition>,
}

/// Returns the process-wide tables, building them on first use.
pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

/// Builds a fresh copy of the tables from the curated data.
///
/// The result is deterministic, so it always equals [`tables()`].
pub fn build_tables() -> Tables {
    let mut forward: HashMap<Diacritic, BTreeMap<char, char>> =
        HashMap::with_capacity(data::FORWARD.len());
    let mut reverse = HashMap::new();

    for &(diacritic, letters) in data::FORWARD {
        let entries = forward.entry(diacritic).or_default();
        for &(base, accented) in letters {
            entries.insert(base, accented);

            let decomposition = Decomposition {
                base: base.to_ascii_lowercase(),
                diacritic,
            };
            let previous = reverse.insert(accented, decomposition);
            debug_assert!(previous.is_none(), "{:?} is listed twice", accented);

            if let Some(lower) = single_lowercase(accented).filter(|&c| c != accented) {
                let previous = reverse.insert(lower, decomposition);
                debug_assert!(previous.is_none(), "{:?} is listed twice", lower);
            }
        }
    }

    log::debug!(
        "built diacritic tables: {} diacritics, {} reverse entries",
        forward.len(),
        reverse.len()
    );

    Tables { forward, reverse }
}

impl Tables {
    /// Letters taking exactly this diacritic, as uppercase
    /// `base -> accented` pairs.
    pub fn lookup(&self, diacritic: Diacritic) -> Result<&BTreeMap<char, char>, Error> {
        self.forward
            .get(&diacritic)
            .ok_or(Error::UnknownDescriptor(diacritic))
    }

    /// Finds which base letter and diacritic produce `c`, in either case.
    pub fn reverse_lookup(&self, c: char) -> Option<Decomposition> {
        self.reverse.get(&c).copied()
    }

    /// Every diacritic with at least one letter, in bit order.
    pub fn descriptors(&self) -> Vec<Diacritic> {
        let mut descriptors: Vec<_> = self.forward.keys().copied().collect();
        descriptors.sort_unstable();
        descriptors
    }

    /// Every `(diacritic, base, accented)` entry, uppercase only.
    pub fn entries(&self) -> impl Iterator<Item = (Diacritic, char, char)> + '_ {
        self.forward.iter().flat_map(|(&diacritic, letters)| {
            letters
                .iter()
                .map(move |(&base, &accented)| (diacritic, base, accented))
        })
    }

    /// Number of forward entries.
    pub fn len(&self) -> usize {
        self.forward.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

// `char::to_lowercase` and friends may expand to several code points
// (U+0130 lowercases to "i\u{307}"); those have no precomposed counterpart.
#[inline]
pub(crate) fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

#[inline]
pub(crate) fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
