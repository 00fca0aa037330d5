//! String orderings used for display.
//!
//! [`locale_cmp`] approximates the default-locale collation of a browser's
//! `localeCompare`: base letters first, then accents, then case (lower before
//! upper). Letters that Unicode does not decompose but that collate as a Latin
//! base letter (`Ø`, `Œ`, `Ł`, `Đ`, `ß`, ...) are folded explicitly. Scripts
//! beyond Latin fall back to code point order. [`code_unit_cmp`] is the plain ordering of a default string sort,
//! which compares UTF-16 code units.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Locale-aware comparison of two display names.
///
/// ```
/// use countries_rs::collation::locale_cmp;
/// use std::cmp::Ordering;
/// assert_eq!(locale_cmp("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(locale_cmp("el salvador", "Ecuador"), Ordering::Greater);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Ordering of a default (non-locale) sort: UTF-16 code unit by code unit.
pub fn code_unit_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Sort `names` in place with [`code_unit_cmp`].
pub fn sort_default(names: &mut [String]) {
    names.sort_by(|a, b| code_unit_cmp(a, b));
}

// Lowercased, decomposed, with combining marks removed and stroked letters folded.
fn base_letters(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase) {
        match fold_letter(c) {
            Some(folded) => key.push_str(folded),
            None => key.push(c),
        }
    }
    key
}

// Lowercase letters with no canonical decomposition.
fn fold_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' => "o",
        'œ' => "oe",
        'æ' => "ae",
        'ł' => "l",
        'đ' => "d",
        'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ß' => "ss",
        'þ' => "th",
        _ => return None,
    })
}

// Lowercased and decomposed; unaccented letters sort before accented ones.
fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
