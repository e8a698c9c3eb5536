//! Error types for provisioning, compiling, and installing modules.

use std::path::PathBuf;
use thiserror::Error;

/// The install tree could not be brought into shape.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("cannot create directory {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot remove {} to make room for a directory: {source}", path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The external compiler rejected a module or could not be started.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{program} failed on {} (exit code: {code:?})\n{stderr}", file.display())]
    Failed {
        program: String,
        file: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl CompileError {
    /// Diagnostic text captured from the compiler, if it ran at all.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            CompileError::Failed { stderr, .. } => Some(stderr),
            CompileError::Spawn { .. } => None,
        }
    }
}

/// Missing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine the home directory; set JIL_HOME or pass --home")]
    NoHome,
}

/// Anything that can go wrong while installing modules.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl InstallError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| InstallError::Io { op, path, source }
    }
}
