//! Install tree layout
//!
//! ```text
//! <home>/jil/
//! <home>/jil/lib/
//! <home>/jil/lib/std/<module>.class
//! <home>/jil/lib/std/<module>.jil
//! ```

use std::path::{Path, PathBuf};

/// The three directories that make up the install tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    root: PathBuf,
}

impl InstallRoot {
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            root: home.as_ref().join("jil"),
        }
    }

    /// `<home>/jil`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<home>/jil/lib`
    pub fn lib(&self) -> PathBuf {
        self.root.join("lib")
    }

    /// `<home>/jil/lib/std`
    pub fn std(&self) -> PathBuf {
        self.lib().join("std")
    }

    /// Every level, shallowest first.
    pub fn levels(&self) -> [PathBuf; 3] {
        [self.root.clone(), self.lib(), self.std()]
    }

    /// Where a module named `file_name` is installed.
    pub fn module_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.std().join(file_name)
    }
}
