//! Canonicalization of Japanese place-name strings.
//!
//! A deterministic pipeline applied symmetrically wherever two names must
//! compare equal: full-width digits fold to ASCII, kanji numerals before
//! 丁目 rewrite to arabic, and generic administrative suffixes strip off.
//! All functions are pure and total; input outside the expected shapes
//! comes back unchanged apart from width folding and whitespace removal.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a kanji-numeral run immediately preceding 丁目.
static CHOME_KANJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([一二三四五六七八九十]+)丁目").expect("valid regex"));

/// Offset between the Unicode full-width digit block and ASCII digits.
const FULLWIDTH_DIGIT_OFFSET: u32 = 0xFEE0;

/// Folds full-width digits (０-９) to their ASCII equivalents.
#[must_use]
pub fn fold_fullwidth_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if ('０'..='９').contains(&c) {
                char::from_u32(c as u32 - FULLWIDTH_DIGIT_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Parses a restricted kanji numeral (1-99) to its arabic value.
///
/// Recognizes the bare digits 一-九, the literal 十, and compounds of the
/// form `[一-九]?十[一-九]?` (e.g. 二十三 → 23). Block numbers never go
/// beyond two digits, so hundreds and thousands are out of grammar and
/// return `None`.
#[must_use]
pub fn kanji_to_number(token: &str) -> Option<u32> {
    let chars: Vec<char> = token.chars().collect();

    match chars.as_slice() {
        [single] => {
            if *single == '十' {
                Some(10)
            } else {
                kanji_digit(*single)
            }
        }
        [tens, '十'] => Some(kanji_digit(*tens)? * 10),
        ['十', ones] => Some(10 + kanji_digit(*ones)?),
        [tens, '十', ones] => Some(kanji_digit(*tens)? * 10 + kanji_digit(*ones)?),
        _ => None,
    }
}

const fn kanji_digit(c: char) -> Option<u32> {
    match c {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Normalizes a town/block string to its matchable 丁目 key.
///
/// Folds digit width, strips all whitespace, rewrites a kanji numeral run
/// immediately before 丁目 to arabic, then truncates at (and including)
/// the first 丁目. The trailing block/lot number (番/号) is dropped: it is
/// finer than the town-level key this pipeline resolves to.
#[must_use]
pub fn normalize_chome(input: &str) -> String {
    let folded: String = fold_fullwidth_digits(input)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let rewritten = CHOME_KANJI_RE.replace(&folded, |caps: &regex::Captures<'_>| {
        kanji_to_number(&caps[1]).map_or_else(|| caps[0].to_string(), |n| format!("{n}丁目"))
    });

    match rewritten.find("丁目") {
        Some(idx) => rewritten[..idx + "丁目".len()].to_string(),
        None => rewritten.into_owned(),
    }
}

/// Strips exactly one trailing prefecture suffix (都, 道, 府, 県).
#[must_use]
pub fn normalize_prefecture(input: &str) -> String {
    strip_one_suffix(input.trim(), &['都', '道', '府', '県'])
}

/// Strips exactly one trailing municipality suffix (市, 区, 町, 村, 郡).
#[must_use]
pub fn normalize_city(input: &str) -> String {
    strip_one_suffix(input.trim(), &['市', '区', '町', '村', '郡'])
}

fn strip_one_suffix(input: &str, suffixes: &[char]) -> String {
    let mut chars = input.chars();
    match chars.next_back() {
        Some(last) if suffixes.contains(&last) && !chars.as_str().is_empty() => {
            chars.as_str().to_string()
        }
        _ => input.to_string(),
    }
}
