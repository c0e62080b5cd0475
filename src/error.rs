use std::path::PathBuf;

use thiserror::Error;

use crate::reference::ListKind;

/// Fatal conditions that stop a run before any entry is scanned.
///
/// Malformed `@article` entries are not represented here: the extractor
/// skips them and the scan carries on.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{} does not exist or file type is invalid (must be a .bib)", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {kind} list {}: {source}", .path.display())]
    ReferenceList {
        kind: ListKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no trusted journal list configured; pass --trusted <FILE> or set `lists.trusted` in config.toml"
    )]
    MissingTrustedList,
}
