//! Path classification.
//!
//! Decides what the pipeline does with a filesystem path: descend
//! into it, queue it, or skip it. No side effects beyond stat calls.

use std::path::Path;

/// File extensions accepted into the index, matched against the
/// lower-cased file name.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["htm", "html", "xml", "txt"];

/// Classification of a filesystem path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Container of further paths
    Directory,

    /// Regular file with an accepted extension
    AcceptedFile,

    /// Regular file outside the whitelist
    RejectedFile,

    /// Path does not exist
    Missing,
}

/// Classify a path for the pipeline
pub fn classify(path: &Path) -> PathKind {
    if !path.exists() {
        return PathKind::Missing;
    }

    if path.is_dir() {
        return PathKind::Directory;
    }

    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_lowercase(),
        None => return PathKind::RejectedFile,
    };

    if ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
    {
        PathKind::AcceptedFile
    } else {
        PathKind::RejectedFile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(classify(temp_dir.path()), PathKind::Directory);
    }

    #[test]
    fn test_classify_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.txt");
        assert_eq!(classify(&path), PathKind::Missing);
    }

    #[test]
    fn test_classify_accepted_extensions() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["a.htm", "b.html", "c.xml", "d.txt"] {
            let path = temp_dir.path().join(name);
            fs::write(&path, "content").unwrap();
            assert_eq!(classify(&path), PathKind::AcceptedFile, "{name}");
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.TXT");
        fs::write(&path, "content").unwrap();

        assert_eq!(classify(&path), PathKind::AcceptedFile);
    }

    #[test]
    fn test_classify_rejected_file() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["photo.jpg", "archive.zip", "noext"] {
            let path = temp_dir.path().join(name);
            fs::write(&path, "content").unwrap();
            assert_eq!(classify(&path), PathKind::RejectedFile, "{name}");
        }
    }

    #[test]
    fn test_extension_must_be_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt.bak");
        fs::write(&path, "content").unwrap();

        assert_eq!(classify(&path), PathKind::RejectedFile);
    }
}
