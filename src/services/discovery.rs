//! Receipt discovery
//!
//! Walks the input directory and returns the filename stems of every receipt
//! PDF found, in a stable order.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TallyError, TallyResult};

/// Extension a file must carry to count as a receipt (case-sensitive)
pub const RECEIPT_EXTENSION: &str = ".pdf";

/// Find every receipt under `dir`, recursively.
///
/// The walk is depth-first with the entries of each directory sorted by
/// file name, so `a/z.pdf` comes before `a.pdf`. Returns the filename stems
/// with the `.pdf` extension stripped. The directory must exist and be a
/// directory.
pub fn find_receipts(dir: &Path) -> TallyResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(TallyError::directory(dir));
    }

    let mut stems = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name();
        if !name
            .as_encoded_bytes()
            .ends_with(RECEIPT_EXTENSION.as_bytes())
        {
            continue;
        }

        // Only receipts need a readable name; other files are never parsed
        let Some(stem) = name
            .to_str()
            .and_then(|n| n.strip_suffix(RECEIPT_EXTENSION))
        else {
            return Err(TallyError::format(name.to_string_lossy()));
        };

        debug!("Found receipt {}", entry.path().display());
        stems.push(stem.to_string());
    }

    debug!("Found {} receipts in {}", stems.len(), dir.display());
    Ok(stems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_finds_only_pdfs() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "010125-a-10.00-x-food-store1.pdf");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), "010125-a-10.00-x-food-store1.PDF");

        let stems = find_receipts(temp_dir.path()).unwrap();
        assert_eq!(stems, vec!["010125-a-10.00-x-food-store1"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_non_receipt_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "010125-a-1-x-food-s.pdf");
        fs::write(temp_dir.path().join(OsStr::from_bytes(b"notes\xff.txt")), b"").unwrap();

        let stems = find_receipts(temp_dir.path()).unwrap();
        assert_eq!(stems, vec!["010125-a-1-x-food-s"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_receipt_is_a_format_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(OsStr::from_bytes(b"bad\xff.pdf")), b"").unwrap();

        let err = find_receipts(temp_dir.path()).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_directory_contents_come_before_later_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a");
        fs::create_dir(&nested).unwrap();

        touch(temp_dir.path(), "a.pdf");
        touch(&nested, "z.pdf");

        let stems = find_receipts(temp_dir.path()).unwrap();
        assert_eq!(stems, vec!["z", "a"]);
    }

    #[test]
    fn test_sorted_and_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("march");
        fs::create_dir(&nested).unwrap();

        touch(temp_dir.path(), "b.pdf");
        touch(temp_dir.path(), "a.pdf");
        touch(&nested, "c.pdf");

        let stems = find_receipts(temp_dir.path()).unwrap();
        assert_eq!(stems, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_receipts(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = find_receipts(&missing).unwrap_err();
        assert!(matches!(err, TallyError::Directory { .. }));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.pdf");

        let err = find_receipts(&temp_dir.path().join("a.pdf")).unwrap_err();
        assert!(matches!(err, TallyError::Directory { .. }));
    }
}
