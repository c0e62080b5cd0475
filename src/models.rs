use serde::{Deserialize, Serialize};

/// A `(citation key, journal name)` pair pulled out of one `@article` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibEntry {
    pub key: String,
    /// Journal field exactly as written, minus a leading "the ".
    pub journal: String,
}

/// Comparison keys derived from a raw journal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// The whole name, normalized.
    pub full_key: String,
    /// Normalized text before the first colon/hyphen; tolerates subtitles
    /// that the reference list omits.
    pub first_segment_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trusted,
    Preprint,
    Predatory,
    Unlisted,
}

impl Category {
    /// Anything outside the trusted list is reported.
    pub fn is_problem(self) -> bool {
        self != Category::Trusted
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Trusted => write!(f, "trusted"),
            Category::Preprint => write!(f, "preprint"),
            Category::Predatory => write!(f, "predatory"),
            Category::Unlisted => write!(f, "unlisted"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub entry: BibEntry,
    pub category: Category,
    pub display_name: String,
}

/// Outcome of one scan pass. `results` holds only the problem entries, in
/// document order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub total_entries: usize,
    pub problem_count: usize,
    pub results: Vec<ClassificationResult>,
}

impl Report {
    pub fn count(&self, category: Category) -> usize {
        self.results
            .iter()
            .filter(|r| r.category == category)
            .count()
    }

    pub fn has_problems(&self) -> bool {
        self.problem_count > 0
    }
}
