//! Build and install the jil standard library
//!
//! The stdlib directory holds two kinds of modules:
//!
//! - source modules (`*.java`), compiled with the external compiler and the
//!   resulting artifact (`*.class`) installed
//! - precompiled modules (`*.jil`), installed as-is
//!
//! Both end up in a flat per-user directory:
//!
//! ```text
//! <home>/jil/lib/std/IO.class
//! <home>/jil/lib/std/list.jil
//! ```
//!
//! # Binaries
//!
//! - `jil-build-module -f IO.java [-i]` - compile one module, optionally install it
//! - `jil-install-stdlib [DIR]` - install every module in DIR (default: current directory)
//!
//! # Example
//!
//! ```no_run
//! use jil_stdlib::{ExternalCompiler, InstallConfig, Installer};
//! use std::path::Path;
//!
//! let config = InstallConfig::from_env()?;
//! let installer = Installer::new(config.clone(), ExternalCompiler::new(config));
//! let report = installer.install_all(Path::new("."))?;
//! println!("{} compiled, {} copied", report.installed(), report.copied());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod installer;
pub mod kind;
pub mod output;
pub mod paths;
pub mod provision;

pub use compiler::{Artifact, Compiler, ExternalCompiler};
pub use config::InstallConfig;
pub use error::{CompileError, ConfigError, InstallError, ProvisionError};
pub use installer::{BuildOutcome, FileOutcome, InstallReport, Installer};
pub use kind::{FileKind, classify};
pub use paths::InstallRoot;
pub use provision::ensure_dir;
