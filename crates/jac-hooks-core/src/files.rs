// Rust guideline compliant 2026-10-12

//! Selection of the files a hook forwards to the external tool.

use std::path::{Path, PathBuf};

/// Paths passed to a hook, split into the ones forwarded to the tool and the
/// ones skipped because of their extension.
///
/// Both lists keep the caller's order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    selected: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl FileSet {
    /// Splits `paths` by extension.
    ///
    /// # Arguments
    ///
    /// * `paths` - Paths as received from the caller
    /// * `extensions` - Accepted extensions, without the leading dot
    pub fn select<I, P>(paths: I, extensions: &[String]) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut set = Self::default();
        for path in paths {
            let path = path.into();
            if has_extension(&path, extensions) {
                set.selected.push(path);
            } else {
                tracing::debug!(path = %path.display(), "skipping file with unsupported extension");
                set.skipped.push(path);
            }
        }
        set
    }

    /// Paths that will be forwarded.
    pub fn selected(&self) -> &[PathBuf] {
        &self.selected
    }

    /// Paths that were filtered out.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Number of forwarded paths.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing will be forwarded.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Returns whether the file name of `path` ends in `.<ext>` for one of `extensions`.
///
/// Matching is done on the raw bytes of the whole file name, so multi-part
/// extensions such as `impl.jac` work and names that are not valid UTF-8 are
/// still recognised.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    extensions.iter().any(|ext| {
        let ext = ext.as_bytes();
        name.len() > ext.len()
            && name.ends_with(ext)
            && name[name.len() - ext.len() - 1] == b'.'
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jac() -> Vec<String> {
        vec!["jac".to_string()]
    }

    #[test]
    fn test_has_extension_matches_suffix() {
        assert!(has_extension(Path::new("src/main.jac"), &jac()));
        assert!(has_extension(Path::new("walker.impl.jac"), &jac()));
        assert!(!has_extension(Path::new("main.py"), &jac()));
        assert!(!has_extension(Path::new("main.jacx"), &jac()));
        assert!(!has_extension(Path::new("notjac"), &jac()));
    }

    #[test]
    fn test_has_extension_hidden_file() {
        assert!(has_extension(Path::new(".jac"), &jac()));
        assert!(!has_extension(Path::new("jac"), &jac()));
    }

    #[test]
    fn test_has_extension_multi_part() {
        let exts = vec!["impl.jac".to_string()];
        assert!(has_extension(Path::new("a/walker.impl.jac"), &exts));
        assert!(!has_extension(Path::new("a/walker.jac"), &exts));
        assert!(!has_extension(Path::new("a/walkerimpl.jac"), &exts));
    }

    #[test]
    fn test_select_keeps_order() {
        let set = FileSet::select(["b.jac", "notes.md", "a.jac", "b.jac"], &jac());
        assert_eq!(
            set.selected(),
            &[
                PathBuf::from("b.jac"),
                PathBuf::from("a.jac"),
                PathBuf::from("b.jac")
            ]
        );
        assert_eq!(set.skipped(), &[PathBuf::from("notes.md")]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_select_empty() {
        let set = FileSet::select(Vec::<PathBuf>::new(), &jac());
        assert!(set.is_empty());
        assert!(set.skipped().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_has_extension_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"src/caf\xe9.jac"));
        assert!(has_extension(path, &jac()));
        let path = Path::new(OsStr::from_bytes(b"caf\xe9.py"));
        assert!(!has_extension(path, &jac()));

        let set = FileSet::select([PathBuf::from(OsStr::from_bytes(b"caf\xe9.jac"))], &jac());
        assert_eq!(set.len(), 1);
        assert!(set.skipped().is_empty());
    }
}
