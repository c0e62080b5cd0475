use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::error::CheckError;

/// Ask for a `.bib` file on the terminal. An empty answer (or closed stdin)
/// returns `None`.
pub fn prompt_for_path() -> Result<Option<PathBuf>> {
    eprint!("Please select a .bib file to analyze: ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().trim_matches(|c| c == '"' || c == '\'');
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(answer)))
}

/// The input must be an existing file with a `.bib` extension.
pub fn validate_bib_path(path: &Path) -> Result<(), CheckError> {
    let is_bib = path.extension().is_some_and(|ext| ext == "bib");
    if !is_bib || !path.is_file() {
        return Err(CheckError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Read the bibliography, replacing invalid UTF-8 rather than failing.
pub fn read_bib(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8; undecodable bytes were replaced",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_valid_bib() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("refs.bib");
        fs::write(&path, "").unwrap();
        assert!(validate_bib_path(&path).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = validate_bib_path(Path::new("/nonexistent/refs.bib")).unwrap_err();
        assert!(matches!(err, CheckError::InputNotFound(_)));
        assert!(err.to_string().contains("must be a .bib"));
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("refs.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            validate_bib_path(&path),
            Err(CheckError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folder.bib");
        fs::create_dir(&path).unwrap();
        assert!(validate_bib_path(&path).is_err());
    }

    #[test]
    fn test_read_latin1_lossily() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.bib");
        fs::write(&path, b"@article{k, journal = {Espa\xf1a},}").unwrap();
        let text = read_bib(&path).unwrap();
        assert!(text.starts_with("@article{k, journal = {Espa"));
        assert!(text.contains('\u{fffd}'));
    }
}
