use assert_matches::assert_matches;
use diacritic_utils::table::tables;
use diacritic_utils::{
    applicable, apply, apply_char, count, find, identify, normalize, remove, substitute,
    Diacritic, Error,
};
use std::borrow::Cow;

fn sample_text() -> String {
    let mut text = String::from("Déjà vu, Ångström — naïve Škoda; ");
    for (_, _, accented) in tables().entries() {
        text.push(accented);
        text.extend(accented.to_lowercase());
        text.push(' ');
    }
    text
}

#[test]
fn round_trip_every_entry() {
    for (diacritic, base, accented) in tables().entries() {
        assert_eq!(apply_char(base, diacritic), Ok(accented));
        assert_eq!(identify(accented), Some(diacritic), "{:?}", accented);
        assert_eq!(normalize(&accented.to_string()), base.to_string());

        let lower = base.to_ascii_lowercase();
        match apply_char(lower, diacritic) {
            Ok(lower_accented) => {
                assert!(lower_accented.is_lowercase(), "{:?}", lower_accented);
                assert_eq!(identify(lower_accented), Some(diacritic));
                assert_eq!(normalize(&lower_accented.to_string()), lower.to_string());
            }
            // Only U+0130 lacks a single code point lowercase.
            Err(err) => {
                assert_eq!(accented, '\u{130}');
                assert_eq!(
                    err,
                    Error::IncompatibleLetter {
                        character: 'i',
                        diacritic: Diacritic::DOTABOVE
                    }
                );
            }
        }
    }
}

#[test]
fn applicable_agrees_with_apply() {
    for diacritic in tables().descriptors() {
        let letters = applicable(diacritic);
        assert!(!letters.is_empty());
        for letter in letters {
            assert!(applicable(letter).contains(&diacritic));
            assert!(apply(&letter.to_string(), diacritic).is_ok());
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    let text = sample_text();
    let once = normalize(&text).into_owned();
    assert_matches!(normalize(&once), Cow::Borrowed(twice) if twice == once);
    assert_eq!(once.chars().count(), text.chars().count());
}

#[test]
fn find_and_count_agree() {
    let text = sample_text();
    let chars: Vec<char> = text.chars().collect();
    for diacritic in tables().descriptors() {
        let found = find(&text, diacritic);
        assert_eq!(count(&text, diacritic), found.len());
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        for index in found {
            assert_eq!(identify(chars[index]), Some(diacritic));
        }
    }
}

#[test]
fn remove_leaves_other_diacritics() {
    assert_eq!(remove("Déjà Noël", Diacritic::DIAERESIS), "Déjà Noel");
    assert_eq!(remove("Déjà Noël", Diacritic::GRAVE), "Déja Noël");
    let text = sample_text();
    for diacritic in tables().descriptors() {
        let removed = remove(&text, diacritic);
        assert_eq!(count(&removed, diacritic), 0);
        assert_eq!(removed.chars().count(), text.chars().count());
    }
}

#[test]
fn error_kinds_are_distinct() {
    assert_eq!(
        apply("ab", Diacritic::ACUTE),
        Err(Error::InvalidInput { len: 2 })
    );
    assert_matches!(
        apply("a", Diacritic::ACUTE | Diacritic::CEDILLA | Diacritic::TILDE),
        Err(Error::UnknownDescriptor(_))
    );
    assert_matches!(
        apply("a", Diacritic::CEDILLA),
        Err(Error::IncompatibleLetter { character: 'a', diacritic })
            if diacritic == Diacritic::CEDILLA
    );
    assert_eq!(
        Error::IncompatibleLetter {
            character: 'a',
            diacritic: Diacritic::CEDILLA
        }
        .to_string(),
        "character 'a' is not applicable for the CEDILLA diacritic"
    );
}

#[test]
fn substitute_then_identify() {
    let swapped = substitute(
        "Tiếng Việt",
        Diacritic::ACUTE | Diacritic::CIRCUMFLEX,
        Some(Diacritic::GRAVE | Diacritic::CIRCUMFLEX),
    )
    .unwrap();
    assert_eq!(swapped, "Tiềng Việt");
    assert_eq!(identify('ề'), Some(Diacritic::CIRCUMFLEX | Diacritic::GRAVE));
}
