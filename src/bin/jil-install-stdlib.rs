//! Install the whole jil stdlib
//!
//! Compiles every source module in DIR (default: current directory),
//! installs the artifacts, and copies precompiled modules alongside them.
//! A module that fails to compile is reported and skipped.

use anyhow::{Context, Result};
use clap::Parser;
use jil_stdlib::cli::ConfigArgs;
use jil_stdlib::{ExternalCompiler, Installer, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jil-install-stdlib")]
#[command(about = "Build and install every jil stdlib module in a directory")]
#[command(version)]
struct Cli {
    /// Directory holding the stdlib modules
    #[arg(default_value = ".")]
    dir: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.into_config()?;
    let installer = Installer::new(config.clone(), ExternalCompiler::new(config));

    output::action(&format!(
        "Installing stdlib from {} into {}",
        cli.dir.display(),
        installer.root().std().display()
    ));

    let report = installer
        .install_all(&cli.dir)
        .with_context(|| format!("failed to install stdlib from {}", cli.dir.display()))?;

    let failed: Vec<_> = report.failures().map(|(name, _)| name).collect();
    if failed.is_empty() {
        output::success(&format!(
            "{} compiled, {} copied",
            report.installed(),
            report.copied()
        ));
    } else {
        output::warning(&format!(
            "{} compiled, {} copied, {} failed: {}",
            report.installed(),
            report.copied(),
            failed.len(),
            failed.join(", ")
        ));
    }

    Ok(())
}
