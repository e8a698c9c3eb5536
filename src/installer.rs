//! Module installation
//!
//! Per file the flow is:
//! 1. classify by extension
//! 2. source modules: compile, copy the artifact into `lib/std`, delete the local artifact
//! 3. precompiled modules: copy into `lib/std` unchanged
//!
//! In a bulk run, anything that goes wrong between compiling a source module
//! and removing its artifact ends that file only. Provisioning, directory
//! listing, and precompiled copy failures end the run. Nothing already copied
//! is rolled back.

use crate::compiler::{Artifact, Compiler};
use crate::config::InstallConfig;
use crate::error::InstallError;
use crate::kind::{FileKind, classify};
use crate::output;
use crate::paths::InstallRoot;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Terminal state of one file in a bulk run.
#[derive(Debug)]
pub enum FileOutcome {
    /// Compiled, copied into the tree, local artifact removed.
    Installed { artifact: Artifact, dest: PathBuf },
    /// Precompiled module copied unchanged.
    Copied { dest: PathBuf },
    /// Compiling or installing the artifact failed.
    Failed(InstallError),
}

/// Result of building a single module.
#[derive(Debug)]
pub enum BuildOutcome {
    /// The artifact stays next to the source.
    Compiled { artifact: Artifact },
    /// Copied into the tree and removed locally.
    Installed { artifact: Artifact, dest: PathBuf },
}

/// What a bulk run did, in processing order.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub entries: Vec<(String, FileOutcome)>,
}

impl InstallReport {
    pub fn installed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Installed { .. }))
    }

    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Copied { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &InstallError)> {
        self.entries.iter().filter_map(|(name, outcome)| match outcome {
            FileOutcome::Failed(e) => Some((name.as_str(), e)),
            _ => None,
        })
    }

    pub fn outcome(&self, name: &str) -> Option<&FileOutcome> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, o)| o)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Installs stdlib modules into an [`InstallRoot`].
pub struct Installer<C> {
    config: InstallConfig,
    root: InstallRoot,
    compiler: C,
}

impl<C: Compiler> Installer<C> {
    pub fn new(config: InstallConfig, compiler: C) -> Self {
        let root = config.install_root();
        Self {
            config,
            root,
            compiler,
        }
    }

    pub fn root(&self) -> &InstallRoot {
        &self.root
    }

    /// Compile one source module, and install it if `install` is set.
    ///
    /// Unlike [`Installer::install_all`], a compiler failure is returned as an error.
    pub fn build_module(&self, source: &Path, install: bool) -> Result<BuildOutcome, InstallError> {
        output::sub_action("compile");
        let artifact = self.compiler.compile(source)?;

        if !install {
            return Ok(BuildOutcome::Compiled { artifact });
        }

        self.root.provision()?;
        output::sub_action("install");
        let dest = self.install_artifact(&artifact)?;
        Ok(BuildOutcome::Installed { artifact, dest })
    }

    /// Handle a single file according to its kind. `None` means ignored.
    pub fn install_file(&self, path: &Path) -> Result<Option<FileOutcome>, InstallError> {
        self.install_kind(path, classify(path, &self.config))
    }

    fn install_kind(&self, path: &Path, kind: FileKind) -> Result<Option<FileOutcome>, InstallError> {
        match kind {
            FileKind::CompiledSource => {
                let outcome = self
                    .compiler
                    .compile(path)
                    .map_err(InstallError::from)
                    .and_then(|artifact| {
                        let dest = self.install_artifact(&artifact)?;
                        Ok(FileOutcome::Installed { artifact, dest })
                    })
                    .unwrap_or_else(FileOutcome::Failed);
                Ok(Some(outcome))
            }
            FileKind::PrecompiledModule => {
                let dest = self.copy_module(path)?;
                Ok(Some(FileOutcome::Copied { dest }))
            }
            FileKind::Ignored => Ok(None),
        }
    }

    /// Provision the tree, then process every regular file directly inside `dir`.
    pub fn install_all(&self, dir: &Path) -> Result<InstallReport, InstallError> {
        self.root.provision()?;

        let files = list_files(dir)?;
        let total = files.len();
        let mut report = InstallReport::default();

        for (i, path) in files.into_iter().enumerate() {
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            let kind = classify(&path, &self.config);
            if kind != FileKind::Ignored {
                output::action_numbered(i + 1, total, &name);
            }

            if let Some(outcome) = self.install_kind(&path, kind)? {
                if let FileOutcome::Failed(e) = &outcome {
                    output::error(&e.to_string());
                }
                report.entries.push((name, outcome));
            }
        }

        Ok(report)
    }

    /// Move a compiled artifact into the tree: read, write, then delete the local copy.
    fn install_artifact(&self, artifact: &Artifact) -> Result<PathBuf, InstallError> {
        let dest = self.copy_module(&artifact.path)?;
        fs::remove_file(&artifact.path).map_err(InstallError::io("remove", &artifact.path))?;
        Ok(dest)
    }

    /// Copy a module's bytes verbatim to `lib/std/<file name>`.
    fn copy_module(&self, src: &Path) -> Result<PathBuf, InstallError> {
        let file_name = src.file_name().ok_or_else(|| InstallError::Io {
            op: "install",
            path: src.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
        let dest = self.root.module_path(file_name);

        let content = fs::read(src).map_err(InstallError::io("read", src))?;
        output::detail(&format!("install {} -> {}", src.display(), dest.display()));
        fs::write(&dest, content).map_err(InstallError::io("write", &dest))?;
        Ok(dest)
    }
}

/// Regular files directly inside `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, InstallError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(InstallError::io("read directory", dir))? {
        let path = entry.map_err(InstallError::io("read directory", dir))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
