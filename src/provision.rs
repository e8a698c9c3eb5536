//! Directory provisioning for the install tree

use crate::error::ProvisionError;
use crate::output;
use crate::paths::InstallRoot;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Make sure `path` exists and is a directory.
///
/// A missing path is created. Anything else sitting at `path` (a regular
/// file, a dangling symlink) is removed and replaced by an empty directory.
/// An existing directory is left alone. The parent must already exist.
pub fn ensure_dir(path: &Path) -> Result<(), ProvisionError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => remove_entry(path)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // metadata() follows links; a dangling one still occupies the name
            if fs::symlink_metadata(path).is_ok() {
                remove_entry(path)?;
            }
        }
        Err(source) => {
            return Err(ProvisionError::Create {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    output::detail(&format!("mkdir {}", path.display()));
    fs::create_dir(path).map_err(|source| ProvisionError::Create {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_entry(path: &Path) -> Result<(), ProvisionError> {
    output::warning(&format!("{} is not a directory, replacing it", path.display()));
    fs::remove_file(path).map_err(|source| ProvisionError::Remove {
        path: path.to_path_buf(),
        source,
    })
}

impl InstallRoot {
    /// Provision every level of the tree, parent before child.
    pub fn provision(&self) -> Result<(), ProvisionError> {
        for level in self.levels() {
            ensure_dir(&level)?;
        }
        Ok(())
    }
}
