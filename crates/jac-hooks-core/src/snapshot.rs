// Rust guideline compliant 2026-10-13

//! Content digests used to tell which files the formatter rewrote.

use crate::Result;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// SHA-256 digests of a set of files at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    order: Vec<PathBuf>,
    digests: HashMap<PathBuf, Vec<u8>>,
}

impl Snapshot {
    /// Hashes every regular file in `paths`.
    ///
    /// Paths that do not exist or are not regular files are left out, and a
    /// path listed twice is hashed once.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub fn capture(paths: &[PathBuf]) -> Result<Self> {
        let mut snapshot = Self::default();
        for path in paths {
            if !path.is_file() || snapshot.digests.contains_key(path) {
                continue;
            }
            snapshot.digests.insert(path.clone(), digest_file(path)?);
            snapshot.order.push(path.clone());
        }
        Ok(snapshot)
    }

    /// Returns the files of this snapshot whose content differs in `later`,
    /// in capture order.
    ///
    /// A file that disappeared counts as changed. Files only present in
    /// `later` are ignored.
    pub fn changed_since(&self, later: &Snapshot) -> Vec<PathBuf> {
        self.order
            .iter()
            .filter(|path| later.digest(path) != self.digest(path))
            .cloned()
            .collect()
    }

    /// Returns the recorded digest of `path`, if any.
    pub fn digest(&self, path: &Path) -> Option<&[u8]> {
        self.digests.get(path).map(Vec::as_slice)
    }
}

fn digest_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    Ok(Sha256::digest(&bytes).to_vec())
}
