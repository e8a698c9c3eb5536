//! Compile a single stdlib module
//!
//! Usage:
//!   jil-build-module -f IO.java        Compile IO.java next to itself
//!   jil-build-module -f IO.java -i     Compile and install into ~/jil/lib/std

use anyhow::{Context, Result};
use clap::Parser;
use jil_stdlib::cli::ConfigArgs;
use jil_stdlib::{BuildOutcome, ExternalCompiler, InstallError, Installer, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jil-build-module")]
#[command(about = "Compile a jil stdlib module and optionally install it")]
#[command(version)]
struct Cli {
    /// Source module to compile
    #[arg(short, long)]
    file: PathBuf,

    /// Install the compiled module and remove the local artifact
    #[arg(short, long)]
    install: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config.into_config()?;
    let installer = Installer::new(config.clone(), ExternalCompiler::new(config));

    output::action(&format!("Building {}", cli.file.display()));

    match installer.build_module(&cli.file, cli.install) {
        Ok(BuildOutcome::Installed { dest, .. }) => {
            output::success(&format!("installed {}", dest.display()));
        }
        Ok(BuildOutcome::Compiled { artifact }) => {
            output::success(&format!("compiled {}", artifact.path.display()));
        }
        Err(InstallError::Compile(e)) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(1));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to build {}", cli.file.display()));
        }
    }

    Ok(ExitCode::SUCCESS)
}
