use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::BibEntry;

static ARTICLE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@article\{").expect("article marker pattern"));

/// Start of any entry (`@article{`, `@book{`, ...). Bounds the search for a
/// journal field so one entry can never borrow the next entry's journal.
static ENTRY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@[a-z]+\{").expect("entry marker pattern"));

static JOURNAL_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bjournal\s*=\s*\{").expect("journal field pattern"));

/// Lazily yield the `(key, journal)` pair of every `@article` entry in
/// `text`, in document order.
///
/// Entries without a well-formed `journal = {...}` field before the next
/// entry marker are skipped.
pub fn extract(text: &str) -> Entries<'_> {
    Entries { text, pos: 0 }
}

pub struct Entries<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Entries<'_> {
    type Item = BibEntry;

    fn next(&mut self) -> Option<BibEntry> {
        loop {
            let marker = ARTICLE_MARKER.find(&self.text[self.pos..])?;
            let key_start = self.pos + marker.end();

            let Some(comma) = self.text[key_start..].find(',') else {
                self.pos = self.text.len();
                return None;
            };
            let key_end = key_start + comma;
            let key = self.text[key_start..key_end].trim();

            // Key ran into the next entry: resume the search from there.
            if key.contains('@') {
                self.pos = key_start;
                continue;
            }
            self.pos = key_end + 1;

            if key.is_empty() {
                debug!("skipping @article entry without a citation key");
                continue;
            }

            match journal_field(&self.text[self.pos..]) {
                Some(journal) => {
                    return Some(BibEntry {
                        key: key.to_string(),
                        journal: journal.to_string(),
                    })
                }
                None => debug!("skipping {key}: no journal field before the next entry"),
            }
        }
    }
}

/// Value of the first `journal = {...}` field in `body`, minus a leading
/// "the ", provided it closes before the next entry starts.
fn journal_field(body: &str) -> Option<&str> {
    let scope_end = ENTRY_MARKER.find(body).map_or(body.len(), |m| m.start());
    let scope = &body[..scope_end];

    let field = JOURNAL_FIELD.find(scope)?;
    let mut value = &scope[field.end()..];
    if value
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("the "))
    {
        value = &value[4..];
    }

    let journal = &value[..closing_brace(value)?];
    (!journal.trim().is_empty()).then_some(journal)
}

/// Offset of the brace closing the field: the first `}` outside any inner
/// group, which must be followed by `,` or by the `}` ending the entry.
fn closing_brace(value: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            '}' => {
                let after = value[i + 1..].trim_start();
                return (after.starts_with(',') || after.starts_with('}')).then_some(i);
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        extract(text).map(|e| (e.key, e.journal)).collect()
    }

    #[test]
    fn test_single_entry() {
        let bib = "@article{key1, journal = {Nature}},";
        assert_eq!(pairs(bib), vec![("key1".into(), "Nature".into())]);
    }

    #[test]
    fn test_trailing_field_comma() {
        let bib = "@article{key2, journal = {arXiv}, }";
        assert_eq!(pairs(bib), vec![("key2".into(), "arXiv".into())]);
    }

    #[test]
    fn test_realistic_entries() {
        let bib = r#"
@article{smith2020,
  author  = {Smith, John and Doe, Jane},
  title   = {On the {Origin} of Things},
  journal = {The Journal of
             Applied Physics},
  year    = {2020},
}

@Article{Lee2019,
  Journal = {{IEEE} Transactions on Computers},
  Year = {2019}
}
"#;
        assert_eq!(
            pairs(bib),
            vec![
                (
                    "smith2020".into(),
                    "Journal of\n             Applied Physics".into()
                ),
                ("Lee2019".into(), "{IEEE} Transactions on Computers".into()),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_markers() {
        let bib = "@ARTICLE{K, JOURNAL = {THE LANCET},\n}";
        assert_eq!(pairs(bib), vec![("K".into(), "LANCET".into())]);
    }

    #[test]
    fn test_compact_field() {
        let bib = "@article{k,journal={Science},year={2001}}";
        assert_eq!(pairs(bib), vec![("k".into(), "Science".into())]);
    }

    #[test]
    fn test_last_field_without_comma() {
        let bib = "@article{k,\n  journal = {Science}\n}\n";
        assert_eq!(pairs(bib), vec![("k".into(), "Science".into())]);
    }

    #[test]
    fn test_missing_journal_does_not_steal_next_entry() {
        let bib = r#"
@article{first, title = {No journal here}, year = {2001}}
@article{second, journal = {Science},}
"#;
        assert_eq!(pairs(bib), vec![("second".into(), "Science".into())]);
    }

    #[test]
    fn test_journal_never_spans_past_next_marker() {
        let bib = r#"
@article{first, title = {Nothing}}
@book{second, journal = {Borrowed},}
@article{third, journal = {Unterminated
@misc{fourth, note = {x}}, }
"#;
        assert!(pairs(bib).is_empty());
    }

    #[test]
    fn test_other_entry_types_ignored() {
        let bib = "@inproceedings{c1, journal = {Proceedings of X},}\n@book{b1, journal = {Y},}";
        assert!(pairs(bib).is_empty());
    }

    #[test]
    fn test_field_name_must_be_journal() {
        let bib = "@article{k, journaltitle = {Science}, myjournal = {Nature},}";
        assert!(pairs(bib).is_empty());
    }

    #[test]
    fn test_empty_journal_skipped() {
        let bib = "@article{a, journal = {},}\n@article{b, journal = {  }, }";
        assert!(pairs(bib).is_empty());
    }

    #[test]
    fn test_unterminated_key() {
        assert!(pairs("@article{dangling").is_empty());
    }

    #[test]
    fn test_restartable_and_ordered() {
        let bib = "@article{a, journal = {One},}\n@article{b, journal = {Two},}\n@article{c, journal = {One},}";
        let first: Vec<_> = extract(bib).map(|e| e.key).collect();
        let second: Vec<_> = extract(bib).map(|e| e.key).collect();
        assert_eq!(first, vec!["a", "b", "c"]);
        assert_eq!(first, second);
    }
}
