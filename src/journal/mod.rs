//! Journal name normalization and classification.
//!
//! - [`normalize`] — turns raw journal names (LaTeX escapes, accents, subtitles)
//!   into comparable keys.
//! - [`classifier`] — checks those keys against the trusted, preprint and
//!   predatory reference sets.

pub mod classifier;
pub mod normalize;
