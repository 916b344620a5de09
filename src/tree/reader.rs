//! Directory listing for tree traversal

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Read the immediate child names of a directory, sorted byte-wise.
///
/// `read_dir` already excludes the synthetic `.` and `..` entries. Any
/// failure opening or reading the directory is returned verbatim; the
/// directory handle is released when the listing scope ends either way.
pub fn read_dir_names(path: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        names.push(entry?.file_name());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_names_are_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let names = read_dir_names(dir.path()).unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt", "c"]);
    }

    #[test]
    fn test_byte_wise_ordering() {
        // Uppercase and dotfiles sort before lowercase in byte order.
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("banana"), "").unwrap();
        fs::write(dir.path().join("Apple"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();

        let names = read_dir_names(dir.path()).unwrap();
        assert_eq!(names, vec![".hidden", "Apple", "banana"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let names = read_dir_names(dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = read_dir_names(&dir.path().join("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();
        assert!(read_dir_names(&file).is_err());
    }
}
