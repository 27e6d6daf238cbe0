use std::fmt;
use std::str::FromStr;

use thiserror::Error;

bitflags::bitflags! {
    /// A named diacritical mark, or an unordered combination of them.
    ///
    /// Marks combine with `|` and compare as sets, so
    /// `ACUTE | CIRCUMFLEX == CIRCUMFLEX | ACUTE`. A combination is its own
    /// lookup key: `ACUTE | CIRCUMFLEX` is unrelated to `ACUTE` or
    /// `CIRCUMFLEX` alone.
    ///
    /// `OVERDOT`, `UNDERDOT` and `UMLAUT` are aliases carrying the same bits
    /// as `DOTABOVE`, `DOTBELOW` and `DIAERESIS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Diacritic: u64 {
        const ACUTE = 1 << 0;
        const BAR = 1 << 1;
        const BELT = 1 << 2;
        const BREVE = 1 << 3;
        const BREVEBELOW = 1 << 4;
        const CARON = 1 << 5;
        const CEDILLA = 1 << 6;
        const CIRCUMFLEX = 1 << 7;
        const CIRCUMFLEXBELOW = 1 << 8;
        const COMMABELOW = 1 << 9;
        const CROSSEDTAIL = 1 << 10;
        const DESCENDER = 1 << 11;
        const DIAERESIS = 1 << 12;
        const DIAERESISBELOW = 1 << 13;
        const DIAGONALSTROKE = 1 << 14;
        const DOT = 1 << 15;
        const DOTABOVE = 1 << 16;
        const DOTBELOW = 1 << 17;
        const DOUBLEACUTE = 1 << 18;
        const DOUBLEBAR = 1 << 19;
        const DOUBLEGRAVE = 1 << 20;
        const FLOURISH = 1 << 21;
        const GRAVE = 1 << 22;
        const HIGHSTROKE = 1 << 23;
        const HOOK = 1 << 24;
        const HOOKABOVE = 1 << 25;
        const HOOKTAIL = 1 << 26;
        const HORN = 1 << 27;
        const INVERTEDBREVE = 1 << 28;
        const LEFTHOOK = 1 << 29;
        const LINEBELOW = 1 << 30;
        const LONGRIGHTLEG = 1 << 31;
        const LONGSTROKEOVERLAY = 1 << 32;
        const LOOP = 1 << 33;
        const MACRON = 1 << 34;
        const MIDDLEDOT = 1 << 35;
        const MIDDLETILDE = 1 << 36;
        const OBLIQUESTROKE = 1 << 37;
        const OGONEK = 1 << 38;
        const PALATALHOOK = 1 << 39;
        const RETROFLEXHOOK = 1 << 40;
        const RINGABOVE = 1 << 41;
        const RINGBELOW = 1 << 42;
        const SHORTSTROKEOVERLAY = 1 << 43;
        const SQUIRRELTAIL = 1 << 44;
        const STROKE = 1 << 45;
        const STROKETHROUGHDESCENDER = 1 << 46;
        const SWASHTAIL = 1 << 47;
        const TAIL = 1 << 48;
        const TILDE = 1 << 49;
        const TILDEBELOW = 1 << 50;
        const TOPBAR = 1 << 51;

        // Aliases must stay after the canonical names so that formatting
        // always picks the canonical one.
        const OVERDOT = Self::DOTABOVE.bits();
        const UNDERDOT = Self::DOTBELOW.bits();
        const UMLAUT = Self::DIAERESIS.bits();
    }
}

/// Error returned when a string doesn't name a known diacritic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDiacriticError {
    #[error("empty diacritic name")]
    Empty,
    #[error("unknown diacritic name {0:?}")]
    UnknownName(String),
}

impl Diacritic {
    /// Looks up a single mark by name, ignoring case as well as any
    /// `_`, `-` or whitespace inside it, so `"dot_above"`, `"Dot Above"`
    /// and `"OVERDOT"` all resolve to [`Diacritic::DOTABOVE`].
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        let name: String = ident
            .chars()
            .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::from_name(&name)
    }
}

/// Parses a mark or a combination of marks joined by `|` or `+`:
/// ```
/// # use diacritic_utils::Diacritic;
/// assert_eq!("umlaut".parse::<Diacritic>(), Ok(Diacritic::DIAERESIS));
/// assert_eq!(
///     "circumflex + acute".parse::<Diacritic>(),
///     Ok(Diacritic::ACUTE | Diacritic::CIRCUMFLEX)
/// );
/// assert!("squiggle".parse::<Diacritic>().is_err());
/// ```
impl FromStr for Diacritic {
    type Err = ParseDiacriticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut diacritic = Self::empty();
        for token in s.split(|c: char| c == '|' || c == '+') {
            let token = token.trim();
            if token.is_empty() {
                return Err(ParseDiacriticError::Empty);
            }
            diacritic |= Self::from_ident(token)
                .ok_or_else(|| ParseDiacriticError::UnknownName(token.to_owned()))?;
        }
        Ok(diacritic)
    }
}

impl fmt::Display for Diacritic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i != 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
