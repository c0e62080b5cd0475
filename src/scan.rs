use tracing::debug;

use crate::bib::extractor::extract;
use crate::journal::classifier::classify;
use crate::journal::normalize::{display_name, normalize};
use crate::models::{BibEntry, ClassificationResult, Report};
use crate::reference::ReferenceSets;

/// Scan a whole bibliography buffer.
pub fn scan(text: &str, sets: &ReferenceSets) -> Report {
    aggregate(extract(text), sets)
}

/// Classify every entry and collect the non-trusted ones in encounter order.
/// Repeated journals produce one result each.
pub fn aggregate<I>(entries: I, sets: &ReferenceSets) -> Report
where
    I: IntoIterator<Item = BibEntry>,
{
    let mut report = Report::default();

    for entry in entries {
        report.total_entries += 1;

        let name = normalize(&entry.journal);
        let category = classify(&name, &entry.journal, sets);
        debug!(key = %entry.key, %category, full_key = %name.full_key, "classified entry");

        if category.is_problem() {
            report.problem_count += 1;
            let display_name = display_name(&entry.journal);
            report.results.push(ClassificationResult {
                entry,
                category,
                display_name,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reference::{ListKind, ReferenceSet};

    fn sets(trusted: &[&str], preprint: &[&str]) -> ReferenceSets {
        ReferenceSets {
            trusted: ReferenceSet::new(ListKind::Trusted, trusted.iter().copied()),
            preprint: ReferenceSet::new(ListKind::Preprint, preprint.iter().copied()),
            predatory: ReferenceSet::new(
                ListKind::Predatory,
                ["International Journal of Everything"],
            ),
        }
    }

    #[test]
    fn test_trusted_entry_is_not_a_problem() {
        let report = scan("@article{key1, journal = {Nature}},", &sets(&["nature"], &[]));
        assert_eq!(report.total_entries, 1);
        assert_eq!(report.problem_count, 0);
        assert!(report.results.is_empty());
        assert!(!report.has_problems());
    }

    #[test]
    fn test_preprint_entry() {
        let report = scan("@article{key2, journal = {arXiv}, }", &sets(&[], &["arxiv"]));
        assert_eq!(report.total_entries, 1);
        assert_eq!(report.problem_count, 1);
        assert_eq!(report.results[0].entry.key, "key2");
        assert_eq!(report.results[0].category, Category::Preprint);
        assert_eq!(report.results[0].display_name, "arXiv");
    }

    #[test]
    fn test_entry_without_journal_not_counted() {
        let bib = "@article{a, title = {T}}\n@article{b, journal = {Science},}";
        let report = scan(bib, &sets(&[], &[]));
        assert_eq!(report.total_entries, 1);
        assert_eq!(report.results[0].entry.key, "b");
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let bib = r#"
@article{a, journal = {Unknown Letters},}
@article{b, journal = {Nature},}
@article{c, journal = {International Journal of Everything},}
@article{d, journal = {Unknown Letters},}
@article{e, journal = {bioRxiv},}
"#;
        let report = scan(bib, &sets(&["Nature"], &["biorxiv"]));
        assert_eq!(report.total_entries, 5);
        assert_eq!(report.problem_count, 4);

        let rows: Vec<_> = report
            .results
            .iter()
            .map(|r| (r.entry.key.as_str(), r.category))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("a", Category::Unlisted),
                ("c", Category::Predatory),
                ("d", Category::Unlisted),
                ("e", Category::Preprint),
            ]
        );
        assert_eq!(report.count(Category::Unlisted), 2);
        assert_eq!(report.count(Category::Predatory), 1);
        assert_eq!(report.count(Category::Preprint), 1);
    }

    #[test]
    fn test_aggregate_accepts_any_entries() {
        let entries = vec![
            BibEntry {
                key: "x".into(),
                journal: "Journal of Chemistry: Part B".into(),
            },
            BibEntry {
                key: "y".into(),
                journal: "Journal of Chemistry".into(),
            },
        ];
        let report = aggregate(entries, &sets(&["The Journal of Chemistry"], &[]));
        assert_eq!(report.total_entries, 2);
        assert_eq!(report.problem_count, 0);
    }

    #[test]
    fn test_empty_input() {
        let report = scan("", &sets(&["Nature"], &[]));
        assert_eq!(report.total_entries, 0);
        assert_eq!(report.problem_count, 0);
    }
}
