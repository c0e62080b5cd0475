use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::NormalizedName;

/// LaTeX accent escapes as they appear after lower-casing and brace removal
/// (`\"{o}` has become `\"o` by then). Applied top to bottom.
///
/// Most rules drop the escape marker and keep the accented letter; `\l`
/// and `\o` stand for the letters themselves.
const LATEX_ESCAPES: &[(&str, &str)] = &[
    ("\\c ", ""),
    ("\\c", ""),
    ("\\~", ""),
    ("\\`", ""),
    ("\\'", ""),
    ("\\^", ""),
    ("\\\"", ""),
    ("\\h ", ""),
    ("\\h", ""),
    ("\\k ", ""),
    ("\\k", ""),
    ("\\l", "l"),
    ("\\=", ""),
    ("\\b ", ""),
    ("\\b", ""),
    ("\\.", ""),
    ("\\d ", ""),
    ("\\d", ""),
    ("\\r ", ""),
    ("\\r", ""),
    ("\\u ", ""),
    ("\\u", ""),
    ("\\v ", ""),
    ("\\v", ""),
    ("\\t ", ""),
    ("\\t", ""),
    ("\\o", "o"),
];

/// A colon or hyphen, with any whitespace and further separators around it.
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[:\-][\s:\-]*").expect("separator pattern"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Normalize a raw journal name into its comparison keys.
///
/// Steps (order matters):
/// 1. Transliterate to ASCII
/// 2. Lower-case
/// 3. Drop commas, braces and LaTeX accent escapes; collapse whitespace
/// 4. Strip a leading "the "
/// 5. `&` → `and`
/// 6. Collapse colon/hyphen runs to a single `-` (→ `full_key`)
/// 7. First separator-delimited segment of step 5 (→ `first_segment_key`)
pub fn normalize(raw: &str) -> NormalizedName {
    let cleaned = clean(raw);

    let full_key = collapse_whitespace(&SEPARATOR_RUN.replace_all(&cleaned, "-"));

    let first_segment = SEPARATOR_RUN.split(&cleaned).next().unwrap_or("");
    let first_segment_key = collapse_whitespace(first_segment)
        .trim_end_matches([',', ' '])
        .to_string();

    NormalizedName {
        full_key,
        first_segment_key,
    }
}

/// Key used for the literal preprint/predatory comparison: the raw name
/// transliterated and lower-cased, with line wrapping undone.
pub fn literal_key(raw: &str) -> String {
    collapse_whitespace(&transliterate(raw).to_lowercase())
}

/// Journal name as shown to the user.
pub fn display_name(raw: &str) -> String {
    collapse_whitespace(&raw.replace(['{', '}'], ""))
}

/// Map a string onto ASCII: NFKD decomposition with combining marks dropped,
/// plus a fallback table for letters that do not decompose.
pub fn transliterate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.nfkd() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(ascii) = ascii_fallback(c) {
            out.push_str(ascii);
        }
    }
    out
}

fn ascii_fallback(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        '\u{2010}'..='\u{2015}' => "-",
        '\u{2018}' | '\u{2019}' => "'",
        '\u{201c}' | '\u{201d}' => "\"",
        _ => return None,
    };
    Some(ascii)
}

/// Steps 1–5 of [`normalize`].
///
/// Punctuation, escapes and line wrapping are cleared before the article
/// and `&` rules run, so both see the same text whether the name came from
/// a wrapped BibTeX field or a one-line list entry. A single leading "the"
/// is stripped: "The The Lancet" keeps its second "the".
fn clean(raw: &str) -> String {
    let mut cleaned = transliterate(raw)
        .to_lowercase()
        .replace("\\&", "&")
        .replace([',', '{', '}'], "");

    for (pattern, replacement) in LATEX_ESCAPES {
        cleaned = cleaned.replace(pattern, replacement);
    }

    let cleaned = collapse_whitespace(&cleaned);
    let without_article = match cleaned.strip_prefix("the ") {
        Some(rest) => rest,
        None => &cleaned,
    };

    without_article.replace(" & ", " and ")
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}
