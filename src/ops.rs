//! Applying, identifying and stripping diacritics.
//!
//! Every string operation is defined in terms of [`identify`] applied to
//! each character in turn. Indices are character indices, not byte offsets.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::iter::Enumerate;
use std::str::Chars;

use crate::table::{single_lowercase, single_uppercase, tables};
use crate::{Diacritic, Error};

/// Applies a diacritic to a one-character string.
///
/// The result has the same case as the input:
/// ```
/// # use diacritic_utils::{apply, Diacritic, Error};
/// # use assert_matches::assert_matches;
/// assert_eq!(apply("a", Diacritic::ACUTE), Ok('á'));
/// assert_eq!(apply("A", Diacritic::ACUTE), Ok('Á'));
/// assert_matches!(apply("ab", Diacritic::ACUTE), Err(Error::InvalidInput { len: 2 }));
/// ```
pub fn apply(character: &str, diacritic: Diacritic) -> Result<char, Error> {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => apply_char(c, diacritic),
        _ => Err(Error::InvalidInput {
            len: character.chars().count(),
        }),
    }
}

/// Applies a diacritic to a single character.
/// ```
/// # use diacritic_utils::{apply_char, Diacritic, Error};
/// # use assert_matches::assert_matches;
/// assert_eq!(apply_char('a', Diacritic::ACUTE | Diacritic::CIRCUMFLEX), Ok('ấ'));
/// assert_matches!(
///     apply_char('a', Diacritic::ACUTE | Diacritic::OGONEK),
///     Err(Error::UnknownDescriptor(_))
/// );
/// assert_matches!(
///     apply_char('a', Diacritic::CEDILLA),
///     Err(Error::IncompatibleLetter { character: 'a', .. })
/// );
/// ```
pub fn apply_char(c: char, diacritic: Diacritic) -> Result<char, Error> {
    let result = lookup_accented(c, diacritic);
    if let Err(err) = &result {
        log::trace!("can't apply {} to {:?}: {}", diacritic, c, err);
    }
    result
}

fn lookup_accented(c: char, diacritic: Diacritic) -> Result<char, Error> {
    let letters = tables().lookup(diacritic)?;
    let incompatible = || Error::IncompatibleLetter {
        character: c,
        diacritic,
    };
    let upper = single_uppercase(c).ok_or_else(incompatible)?;
    let accented = *letters.get(&upper).ok_or_else(incompatible)?;
    if c.is_lowercase() {
        single_lowercase(accented).ok_or_else(incompatible)
    } else {
        Ok(accented)
    }
}

/// Returns the diacritic carried by `c`, if any.
/// ```
/// # use diacritic_utils::{identify, Diacritic};
/// assert_eq!(identify('ǘ'), Some(Diacritic::ACUTE | Diacritic::DIAERESIS));
/// assert_eq!(identify('u'), None);
/// ```
#[inline]
pub fn identify(c: char) -> Option<Diacritic> {
    tables().reverse_lookup(c).map(|d| d.diacritic)
}

/// Splits `c` into its base letter and diacritic. The base letter keeps
/// the case of `c`.
/// ```
/// # use diacritic_utils::{decompose, Diacritic};
/// assert_eq!(decompose('Ø'), Some(('O', Diacritic::STROKE)));
/// assert_eq!(decompose('ø'), Some(('o', Diacritic::STROKE)));
/// assert_eq!(decompose('?'), None);
/// ```
pub fn decompose(c: char) -> Option<(char, Diacritic)> {
    let decomposition = tables().reverse_lookup(c)?;
    let base = if c.is_lowercase() {
        decomposition.base
    } else {
        decomposition.base.to_ascii_uppercase()
    };
    Some((base, decomposition.diacritic))
}

/// Iterator returned by [`identify_all`].
#[derive(Debug, Clone)]
pub struct IdentifyAll<'s> {
    chars: Enumerate<Chars<'s>>,
}

impl Iterator for IdentifyAll<'_> {
    type Item = (usize, Option<Diacritic>);

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next().map(|(i, c)| (i, identify(c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// Identifies the diacritic of every character in `s`, in order.
/// ```
/// # use diacritic_utils::{identify_all, Diacritic};
/// let found: Vec<_> = identify_all("añ").collect();
/// assert_eq!(found, [(0, None), (1, Some(Diacritic::TILDE))]);
/// ```
pub fn identify_all(s: &str) -> IdentifyAll<'_> {
    IdentifyAll {
        chars: s.chars().enumerate(),
    }
}

/// Checks whether `s` has a particular diacritic, or any diacritic when
/// `diacritic` is `None`.
/// ```
/// # use diacritic_utils::{contains, Diacritic};
/// assert!(contains("naïve", None));
/// assert!(contains("naïve", Some(Diacritic::UMLAUT)));
/// assert!(!contains("naïve", Some(Diacritic::ACUTE)));
/// assert!(!contains("naive", None));
/// ```
pub fn contains(s: &str, diacritic: Option<Diacritic>) -> bool {
    identify_all(s).any(|(_, found)| match diacritic {
        Some(diacritic) => found == Some(diacritic),
        None => found.is_some(),
    })
}

/// Character indices of every occurrence of `diacritic`, ascending.
/// ```
/// # use diacritic_utils::{find, Diacritic};
/// assert_eq!(find("Ångström", Diacritic::DIAERESIS), [6]);
/// ```
pub fn find(s: &str, diacritic: Diacritic) -> Vec<usize> {
    identify_all(s)
        .filter(|&(_, found)| found == Some(diacritic))
        .map(|(i, _)| i)
        .collect()
}

/// Number of characters in `s` carrying `diacritic`.
pub fn count(s: &str, diacritic: Diacritic) -> usize {
    identify_all(s)
        .filter(|&(_, found)| found == Some(diacritic))
        .count()
}

/// Number of characters in `s` carrying any diacritic.
/// ```
/// # use diacritic_utils::count_all;
/// assert_eq!(count_all("Crème brûlée"), 3);
/// ```
pub fn count_all(s: &str) -> usize {
    identify_all(s).filter(|(_, found)| found.is_some()).count()
}

/// Strips `diacritic` from every character carrying exactly it. Other
/// characters, including ones with a different diacritic, are kept.
/// ```
/// # use diacritic_utils::{remove, Diacritic};
/// # use assert_matches::assert_matches;
/// # use std::borrow::Cow;
/// assert_matches!(remove("Noël à Zoë", Diacritic::DIAERESIS), Cow::Owned(s) if s == "Noel à Zoe");
/// assert_matches!(remove("ấ", Diacritic::CIRCUMFLEX), Cow::Borrowed("ấ"));
/// ```
pub fn remove(s: &str, diacritic: Diacritic) -> Cow<'_, str> {
    map_chars(s, |c| {
        decompose(c)
            .filter(|&(_, found)| found == diacritic)
            .map(|(base, _)| base)
    })
}

/// Strips every known diacritic from `s`.
/// ```
/// # use diacritic_utils::normalize;
/// # use assert_matches::assert_matches;
/// # use std::borrow::Cow;
/// assert_matches!(normalize("Łódź"), Cow::Owned(s) if s == "Lodz");
/// assert_matches!(normalize("Lodz"), Cow::Borrowed("Lodz"));
/// ```
pub fn normalize(s: &str) -> Cow<'_, str> {
    map_chars(s, |c| decompose(c).map(|(base, _)| base))
}

/// Alias of [`normalize`].
#[inline]
pub fn normalise(s: &str) -> Cow<'_, str> {
    normalize(s)
}

/// Replaces the `old` diacritic with `new` wherever it occurs, or strips it
/// when `new` is `None`.
///
/// Fails if a letter carrying `old` can't take `new`:
/// ```
/// # use diacritic_utils::{substitute, Diacritic, Error};
/// # use assert_matches::assert_matches;
/// # use std::borrow::Cow;
/// assert_matches!(
///     substitute("crème", Diacritic::GRAVE, Some(Diacritic::ACUTE)),
///     Ok(Cow::Owned(s)) if s == "créme"
/// );
/// assert_matches!(
///     substitute("ç", Diacritic::CEDILLA, Some(Diacritic::OGONEK)),
///     Err(Error::IncompatibleLetter { character: 'c', .. })
/// );
/// ```
pub fn substitute(
    s: &str,
    old: Diacritic,
    new: Option<Diacritic>,
) -> Result<Cow<'_, str>, Error> {
    try_map_chars(s, |c| match decompose(c) {
        Some((base, found)) if found == old => match new {
            Some(new) => apply_char(base, new).map(Some),
            None => Ok(Some(base)),
        },
        _ => Ok(None),
    })
}

/// Replaces every literal occurrence of `character` with `character`
/// carrying `diacritic`. Matching is case-sensitive.
/// ```
/// # use diacritic_utils::{replace, Diacritic};
/// # use assert_matches::assert_matches;
/// # use std::borrow::Cow;
/// assert_matches!(replace("Mull", 'u', Diacritic::UMLAUT), Ok(Cow::Owned(s)) if s == "Müll");
/// assert_matches!(replace("MULL", 'u', Diacritic::UMLAUT), Ok(Cow::Borrowed("MULL")));
/// ```
pub fn replace(s: &str, character: char, diacritic: Diacritic) -> Result<Cow<'_, str>, Error> {
    let mut replacement = None;
    try_map_chars(s, |c| {
        if c != character {
            return Ok(None);
        }
        let accented = match replacement {
            Some(accented) => accented,
            None => *replacement.insert(apply_char(character, diacritic)?),
        };
        Ok(Some(accented))
    })
}

/// Diacritics a letter can take, or letters a diacritic can go on.
pub trait Applicable {
    type Output;

    fn applicable(self) -> Self::Output;
}

impl Applicable for char {
    type Output = BTreeSet<Diacritic>;

    /// Every diacritic this letter can take, in either case.
    fn applicable(self) -> Self::Output {
        let Some(upper) = single_uppercase(self) else {
            return BTreeSet::new();
        };
        tables()
            .entries()
            .filter(|&(_, base, _)| base == upper)
            .map(|(diacritic, _, _)| diacritic)
            .collect()
    }
}

impl Applicable for Diacritic {
    type Output = BTreeSet<char>;

    /// Every letter, in both cases, this diacritic can go on.
    fn applicable(self) -> Self::Output {
        let Ok(letters) = tables().lookup(self) else {
            return BTreeSet::new();
        };
        let mut applicable = BTreeSet::new();
        for (&base, &accented) in letters {
            applicable.insert(base);
            if single_lowercase(accented).is_some() {
                applicable.insert(base.to_ascii_lowercase());
            }
        }
        applicable
    }
}

/// Looks up applicable diacritics for a letter, or letters for a diacritic.
/// ```
/// # use diacritic_utils::{applicable, Diacritic};
/// assert!(applicable('s').contains(&(Diacritic::CARON | Diacritic::DOTABOVE)));
/// assert_eq!(
///     applicable(Diacritic::HORN).into_iter().collect::<String>(),
///     "OUou"
/// );
/// ```
#[inline]
pub fn applicable<T: Applicable>(item: T) -> T::Output {
    item.applicable()
}

/// Maps each character through `f`, borrowing `s` back when nothing changed.
fn try_map_chars<E>(
    s: &str,
    mut f: impl FnMut(char) -> Result<Option<char>, E>,
) -> Result<Cow<'_, str>, E> {
    let mut output: Option<String> = None;
    for (pos, c) in s.char_indices() {
        let mapped = f(c)?.filter(|&mapped| mapped != c);
        if let Some(output) = &mut output {
            output.push(mapped.unwrap_or(c));
        } else if let Some(mapped) = mapped {
            // Everything before the first change is copied as-is.
            let mut owned = String::with_capacity(s.len());
            owned.push_str(&s[..pos]);
            owned.push(mapped);
            output = Some(owned);
        }
    }
    Ok(output.map_or(Cow::Borrowed(s), Cow::Owned))
}

fn map_chars(s: &str, mut f: impl FnMut(char) -> Option<char>) -> Cow<'_, str> {
    match try_map_chars(s, |c| Ok::<_, Infallible>(f(c))) {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn apply_mirrors_case() {
        assert_eq!(apply("a", Diacritic::ACUTE), Ok('\u{e1}'));
        assert_eq!(apply("A", Diacritic::ACUTE), Ok('\u{c1}'));
        assert_eq!(apply("s", Diacritic::OVERDOT), Ok('\u{1e61}'));
        assert_eq!(apply("S", Diacritic::UNDERDOT), Ok('\u{1e62}'));
    }

    #[test]
    fn apply_error_kinds() {
        assert_eq!(
            apply("ab", Diacritic::ACUTE),
            Err(Error::InvalidInput { len: 2 })
        );
        assert_eq!(
            apply("", Diacritic::ACUTE),
            Err(Error::InvalidInput { len: 0 })
        );
        assert_eq!(
            apply("a", Diacritic::ACUTE | Diacritic::TOPBAR),
            Err(Error::UnknownDescriptor(Diacritic::ACUTE | Diacritic::TOPBAR))
        );
        assert_eq!(
            apply("a", Diacritic::CEDILLA),
            Err(Error::IncompatibleLetter {
                character: 'a',
                diacritic: Diacritic::CEDILLA
            })
        );
        assert_matches!(
            apply_char('\u{df}', Diacritic::ACUTE),
            Err(Error::IncompatibleLetter { .. })
        );
    }

    #[test]
    fn apply_without_lowercase_form() {
        assert_eq!(apply_char('I', Diacritic::DOTABOVE), Ok('\u{130}'));
        assert_matches!(
            apply_char('i', Diacritic::DOTABOVE),
            Err(Error::IncompatibleLetter { character: 'i', .. })
        );
        assert!(!applicable(Diacritic::DOTABOVE).contains(&'i'));
        assert!(applicable(Diacritic::DOTABOVE).contains(&'I'));
    }

    #[test]
    fn titlecase_digraph() {
        assert_eq!(apply_char('D', Diacritic::CARON), Ok('\u{1c5}'));
        assert_eq!(apply_char('d', Diacritic::CARON), Ok('\u{1c6}'));
        assert_eq!(decompose('\u{1c5}'), Some(('D', Diacritic::CARON)));
        assert_eq!(decompose('\u{1c6}'), Some(('d', Diacritic::CARON)));
    }

    #[test]
    fn combination_distinctness() {
        let both = Diacritic::ACUTE | Diacritic::CIRCUMFLEX;
        assert_eq!(apply_char('a', both), Ok('\u{1ea5}'));
        assert_ne!(apply_char('a', Diacritic::ACUTE), apply_char('a', both));
        assert_eq!(remove("\u{1ea5}", Diacritic::CIRCUMFLEX), "\u{1ea5}");
        assert_eq!(remove("\u{1ea5}", Diacritic::ACUTE), "\u{1ea5}");
        assert_eq!(remove("\u{1ea5}", both), "a");
    }

    #[test]
    fn identify_is_case_insensitive() {
        assert_eq!(identify('\u{d1}'), Some(Diacritic::TILDE));
        assert_eq!(identify('\u{f1}'), Some(Diacritic::TILDE));
        assert_eq!(identify('n'), None);
        assert_eq!(identify('\u{436}'), None);
        assert_eq!(identify(' '), None);
    }

    #[test]
    fn identify_all_keeps_positions() {
        let found: Vec<_> = identify_all("D\u{e9}j\u{e0}").collect();
        assert_eq!(
            found,
            [
                (0, None),
                (1, Some(Diacritic::ACUTE)),
                (2, None),
                (3, Some(Diacritic::GRAVE)),
            ]
        );
        assert_eq!(identify_all("").count(), 0);
    }

    #[test]
    fn find_and_count() {
        let s = "S\u{ed} s\u{e9}\u{f1}or, \u{e1}\u{e9}\u{ed}";
        assert_eq!(find(s, Diacritic::ACUTE), [1, 4, 10, 11, 12]);
        assert_eq!(count(s, Diacritic::ACUTE), 5);
        assert_eq!(find(s, Diacritic::TILDE), [5]);
        assert_eq!(count(s, Diacritic::GRAVE), 0);
        assert_eq!(count_all(s), 6);
        assert!(find("", Diacritic::ACUTE).is_empty());
    }

    #[test]
    fn remove_only_matching() {
        // GRAVE stays, DIAERESIS goes.
        assert_eq!(remove("\u{e0} No\u{eb}l", Diacritic::DIAERESIS), "\u{e0} Noel");
        assert_eq!(remove("D\u{e9}j\u{e0}", Diacritic::DIAERESIS), "D\u{e9}j\u{e0}");
        assert_eq!(remove("\u{dc}BER", Diacritic::UMLAUT), "UBER");
        assert_matches!(remove("plain", Diacritic::ACUTE), Cow::Borrowed("plain"));
    }

    #[test]
    fn normalize_everything() {
        assert_eq!(
            normalize("Ti\u{1ebf}ng Vi\u{1ec7}t \u{110}\u{1ea1}i"),
            "Tieng Viet Dai"
        );
        assert_eq!(normalise("\u{1e9e}\u{c6}\u{153}"), "\u{1e9e}\u{c6}\u{153}");
        assert_matches!(normalize(""), Cow::Borrowed(""));
    }

    #[test]
    fn normalize_is_idempotent() {
        let s = "\u{17b}\u{f3}\u{142}w \u{1e05} \u{2c68} \u{a7a9}";
        let once = normalize(s).into_owned();
        assert_matches!(normalize(&once), Cow::Borrowed(_));
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn substitute_diacritics() {
        assert_eq!(
            substitute("\u{e0} la \u{e8}re", Diacritic::GRAVE, Some(Diacritic::CIRCUMFLEX)).unwrap(),
            "\u{e2} la \u{ea}re"
        );
        assert_eq!(
            substitute("\u{c0}\u{e9}", Diacritic::GRAVE, None).unwrap(),
            "A\u{e9}"
        );
        assert_matches!(
            substitute("abc", Diacritic::GRAVE, None),
            Ok(Cow::Borrowed("abc"))
        );
        assert_eq!(
            substitute("\u{f1}", Diacritic::TILDE, Some(Diacritic::OGONEK)),
            Err(Error::IncompatibleLetter {
                character: 'n',
                diacritic: Diacritic::OGONEK
            })
        );
    }

    #[test]
    fn replace_literal_characters() {
        assert_eq!(
            replace("banana", 'a', Diacritic::MACRON).unwrap(),
            "b\u{101}n\u{101}n\u{101}"
        );
        // Already accented characters aren't literal matches.
        assert_eq!(
            replace("\u{e1}a", 'a', Diacritic::GRAVE).unwrap(),
            "\u{e1}\u{e0}"
        );
        // Incompatible pairs only fail when the target is present.
        assert_matches!(
            replace("xyz", 'a', Diacritic::CEDILLA),
            Ok(Cow::Borrowed("xyz"))
        );
        assert_matches!(
            replace("abc", 'a', Diacritic::CEDILLA),
            Err(Error::IncompatibleLetter { .. })
        );
    }

    #[test]
    fn applicable_both_ways() {
        let for_y = applicable('y');
        assert!(for_y.contains(&Diacritic::ACUTE));
        assert!(for_y.contains(&Diacritic::LOOP));
        assert!(!for_y.contains(&Diacritic::CEDILLA));
        assert_eq!(for_y, applicable('Y'));
        assert!(applicable('1').is_empty());

        let cedilla: String = applicable(Diacritic::CEDILLA).into_iter().collect();
        assert_eq!(cedilla, "CDEGHKLNRSTcdeghklnrst");
        assert!(applicable(Diacritic::ACUTE | Diacritic::OGONEK).is_empty());
    }
}
