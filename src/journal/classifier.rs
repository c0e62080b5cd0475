use crate::journal::normalize::literal_key;
use crate::models::{Category, NormalizedName};
use crate::reference::ReferenceSets;

/// Classify a journal against the reference sets. First match wins:
///
/// 1. Either normalized key in the trusted set → [`Category::Trusted`]
/// 2. Literal name in the preprint set → [`Category::Preprint`]
/// 3. Literal name in the predatory set → [`Category::Predatory`]
/// 4. Otherwise [`Category::Unlisted`]
///
/// The trusted check uses both keys so that a cited subtitle the list
/// omits still matches; the short curated lists are matched literally.
pub fn classify(name: &NormalizedName, raw: &str, sets: &ReferenceSets) -> Category {
    if is_trusted(name, sets) {
        return Category::Trusted;
    }

    let literal = literal_key(raw);
    if sets.preprint.contains(&literal) {
        return Category::Preprint;
    }
    if sets.predatory.contains(&literal) {
        return Category::Predatory;
    }

    Category::Unlisted
}

fn is_trusted(name: &NormalizedName, sets: &ReferenceSets) -> bool {
    if sets.trusted.contains(&name.full_key) {
        return true;
    }
    !name.first_segment_key.is_empty() && sets.trusted.contains(&name.first_segment_key)
}
