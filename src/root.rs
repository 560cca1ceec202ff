//! Serving root resolution

use std::path::{Path, PathBuf};

/// Pick the directory to serve
///
/// Returns `base/candidate` when anything by that name exists, otherwise
/// `base` itself. Only existence is checked: a plain file named like the
/// candidate is still selected.
pub fn resolve_root(base: &Path, candidate: &str) -> PathBuf {
    let preferred = base.join(candidate);
    if preferred.exists() {
        preferred
    } else {
        base.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prefers_out_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        assert_eq!(resolve_root(dir.path(), "out"), dir.path().join("out"));
    }

    #[test]
    fn test_falls_back_to_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();
        assert_eq!(resolve_root(dir.path(), "out"), dir.path());
    }

    #[test]
    fn test_plain_file_is_selected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("out"), b"not a directory").unwrap();
        assert_eq!(resolve_root(dir.path(), "out"), dir.path().join("out"));
    }
}
