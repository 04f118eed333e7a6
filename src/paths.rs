//! Device-relative path handling
//!
//! Host libraries record book paths with their own root prefix and OS
//! separators; the device catalog stores forward-slash folder names. These
//! helpers bring a host path into the catalog's shape before matching.

use std::path::Path;

/// A device-relative path split into folder and filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitPath {
    pub folder: String,
    pub name: String,
}

/// Normalize path separators to forward slash
pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip the device root prefix (if present) and normalize separators
pub(crate) fn strip_device_root(path: &str, device_root: &Path) -> String {
    let normalized = normalize_separators(path);
    let root = normalize_separators(&device_root.to_string_lossy());
    let rel = normalized.strip_prefix(&root).unwrap_or(&normalized);
    rel.trim_start_matches('/').to_string()
}

/// Split a device-relative path into folder and filename components
pub(crate) fn split_folder_name(rel: &str) -> SplitPath {
    match rel.rsplit_once('/') {
        Some((folder, name)) => SplitPath {
            folder: folder.to_string(),
            name: name.to_string(),
        },
        None => SplitPath {
            folder: String::new(),
            name: rel.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_strip_device_root() {
        let root = PathBuf::from("/mnt/ext1");
        assert_eq!(
            strip_device_root("/mnt/ext1/Books/Fiction/book.epub", &root),
            "Books/Fiction/book.epub"
        );
    }

    #[test]
    fn test_strip_device_root_already_relative() {
        let root = PathBuf::from("/mnt/ext1");
        assert_eq!(
            strip_device_root("Books/book.epub", &root),
            "Books/book.epub"
        );
    }

    #[test]
    fn test_strip_device_root_windows_separators() {
        let root = PathBuf::from("E:/");
        assert_eq!(
            strip_device_root("E:\\Books\\book.epub", &root),
            "Books/book.epub"
        );
    }

    #[test]
    fn test_split_folder_name() {
        let split = split_folder_name("Books/Fiction/book.epub");
        assert_eq!(split.folder, "Books/Fiction");
        assert_eq!(split.name, "book.epub");
    }

    #[test]
    fn test_split_folder_name_at_root() {
        let split = split_folder_name("book.epub");
        assert_eq!(split.folder, "");
        assert_eq!(split.name, "book.epub");
    }
}
