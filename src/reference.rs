//! Reference lists: the trusted, preprint-server and predatory journal names
//! every entry is checked against.
//!
//! Lists are plain text, one name per line, and are normalized once at load
//! time with the same rules applied to bibliography entries.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::config::ListsConfig;
use crate::error::CheckError;
use crate::journal::normalize::{literal_key, normalize};

/// Preprint servers recognised when no preprint list is configured.
pub const DEFAULT_PREPRINTS: &[&str] = &[
    "arxiv",
    "biorxiv",
    "engrxiv",
    "chemrxiv",
    "socarxiv",
    "psyarxiv",
    "agrxiv",
    "paleorxiv",
    "sportrxiv",
    "lawarxiv",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Trusted,
    Preprint,
    Predatory,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Trusted => write!(f, "trusted"),
            ListKind::Preprint => write!(f, "preprint"),
            ListKind::Predatory => write!(f, "predatory"),
        }
    }
}

/// An immutable set of pre-normalized journal names.
///
/// Trusted names are stored as their normalized `full_key`; preprint and
/// predatory names as their [`literal_key`], since those lists are matched
/// literally.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    names: HashSet<String>,
}

impl ReferenceSet {
    pub fn new<'a>(kind: ListKind, names: impl IntoIterator<Item = &'a str>) -> Self {
        let names = names
            .into_iter()
            .map(|n| n.trim_start_matches('\u{feff}').trim())
            .filter(|n| !n.is_empty())
            .map(|n| match kind {
                ListKind::Trusted => normalize(n).full_key,
                ListKind::Preprint | ListKind::Predatory => literal_key(n),
            })
            .filter(|key| !key.is_empty())
            .collect();
        Self { names }
    }

    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Parse a newline-separated list.
    pub fn from_text(kind: ListKind, text: &str) -> Self {
        Self::new(kind, text.lines())
    }

    pub fn load(kind: ListKind, path: &Path) -> Result<Self, CheckError> {
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::ReferenceList {
            kind,
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_text(kind, &text);
        if set.is_empty() {
            warn!("{} list {} contains no names", kind, path.display());
        } else {
            info!("loaded {} {} names from {}", set.len(), kind, path.display());
        }
        Ok(set)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(key)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The three sets a scan classifies against.
#[derive(Debug, Clone)]
pub struct ReferenceSets {
    pub trusted: ReferenceSet,
    pub preprint: ReferenceSet,
    pub predatory: ReferenceSet,
}

impl ReferenceSets {
    /// Load every configured list. A missing trusted list or any unreadable
    /// file is fatal; unset preprint/predatory lists fall back to the
    /// built-in preprint servers and an empty predatory set.
    pub fn load(lists: &ListsConfig) -> Result<Self, CheckError> {
        let trusted = match &lists.trusted {
            Some(path) => ReferenceSet::load(ListKind::Trusted, path)?,
            None => return Err(CheckError::MissingTrustedList),
        };

        let preprint = match &lists.preprints {
            Some(path) => ReferenceSet::load(ListKind::Preprint, path)?,
            None => ReferenceSet::new(ListKind::Preprint, DEFAULT_PREPRINTS.iter().copied()),
        };

        let predatory = match &lists.predatory {
            Some(path) => ReferenceSet::load(ListKind::Predatory, path)?,
            None => ReferenceSet::empty(),
        };

        Ok(Self {
            trusted,
            preprint,
            predatory,
        })
    }
}
