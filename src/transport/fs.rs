//! Whole-file text read/write with path-carrying errors and an optional
//! write-back verification pass.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::GeneratorError;

/// Read a whole text file.
pub fn load_text(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|source| GeneratorError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, fully replacing any prior content.
pub fn save_text(path: &Path, content: &str) -> Result<(), GeneratorError> {
    fs::write(path, content).map_err(|source| GeneratorError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "saved text file");
    Ok(())
}

/// Write `content` to `path`, then re-read and byte-compare.
///
/// The comparison guards against partial writes and concurrent external
/// modification of the destination; a mismatch is reported as a
/// verification failure with the path attached.
pub fn save_text_verified(path: &Path, content: &str) -> Result<(), GeneratorError> {
    save_text(path, content)?;
    let written = load_text(path)?;
    if written != content {
        return Err(GeneratorError::SaveVerification {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("page.html");

        save_text(&path, "<html></html>").unwrap();
        assert_eq!(load_text(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn verified_save_accepts_its_own_write() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("page.html");
        save_text_verified(&path, "<html>ok</html>").unwrap();
    }

    #[test]
    fn verified_save_overwrites_prior_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("page.html");

        save_text(&path, "old content that is longer").unwrap();
        save_text_verified(&path, "new").unwrap();
        assert_eq!(load_text(&path).unwrap(), "new");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent.html");

        let err = load_text(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::FileRead { .. }));
        assert!(err.to_string().contains("absent.html"));
    }
}
