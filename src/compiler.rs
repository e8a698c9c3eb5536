//! Compiling source modules
//!
//! The installer only needs "turn this source file into an artifact or tell
//! me why not", so the compiler sits behind [`Compiler`]. [`ExternalCompiler`]
//! is the real thing: it spawns the configured program and waits for it.

use crate::config::InstallConfig;
use crate::error::CompileError;
use crate::kind::artifact_path;
use crate::output;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A compiled module sitting next to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    /// Warnings and notes the compiler printed while succeeding.
    pub notes: Vec<String>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Something that can compile a single source module.
pub trait Compiler {
    fn compile(&self, source: &Path) -> Result<Artifact, CompileError>;
}

/// Runs `<program> <file> --release <release> -cp <classpath>` as a child
/// process in the source file's directory.
#[derive(Debug, Clone)]
pub struct ExternalCompiler {
    config: InstallConfig,
}

impl ExternalCompiler {
    pub fn new(config: InstallConfig) -> Self {
        Self { config }
    }

    /// Build the command line for `source` without running it.
    pub fn command(&self, source: &Path) -> Command {
        let file_name = source.file_name().unwrap_or(source.as_os_str());

        let mut cmd = Command::new(&self.config.compiler);
        cmd.arg(file_name)
            .args(["--release", &self.config.release])
            .args(["-cp", &self.config.classpath]);
        if let Some(dir) = source.parent().filter(|p| !p.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Compiler for ExternalCompiler {
    fn compile(&self, source: &Path) -> Result<Artifact, CompileError> {
        let program = self.config.compiler.clone();
        let display_name = source
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());

        let pb = output::spinner(&format!("{} {}", program, display_name));
        let result = self.command(source).output();
        output::progress_done(pb);

        let out = result.map_err(|source| CompileError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !out.status.success() {
            let mut stderr = String::from_utf8_lossy(&out.stderr).trim_end().to_string();
            if stderr.is_empty() {
                stderr = String::from_utf8_lossy(&out.stdout).trim_end().to_string();
            }
            return Err(CompileError::Failed {
                program,
                file: source.to_path_buf(),
                code: out.status.code(),
                stderr,
            });
        }

        let notes: Vec<String> = [&out.stdout, &out.stderr]
            .into_iter()
            .flat_map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        for note in &notes {
            output::detail(note);
        }

        output::detail(&format!("compiled {}", display_name));
        Ok(Artifact::new(artifact_path(source, &self.config)).with_notes(notes))
    }
}
