//! Command-line options shared by both binaries

use crate::config::{DEFAULT_CLASSPATH, DEFAULT_COMPILER, DEFAULT_RELEASE, InstallConfig};
use crate::error::ConfigError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Directory the jil tree is installed under (default: your home directory)
    #[arg(long, env = "JIL_HOME")]
    pub home: Option<PathBuf>,

    /// Compiler used for source modules
    #[arg(long, env = "JIL_COMPILER", default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// Target release passed to the compiler
    #[arg(long, env = "JIL_RELEASE", default_value = DEFAULT_RELEASE)]
    pub release: String,

    /// Classpath containing the compiled jil runtime
    #[arg(long, env = "JIL_CLASSPATH", default_value = DEFAULT_CLASSPATH)]
    pub classpath: String,
}

impl ConfigArgs {
    pub fn into_config(self) -> Result<InstallConfig, ConfigError> {
        Ok(InstallConfig::with_home_override(self.home)?
            .with_compiler(self.compiler)
            .with_release(self.release)
            .with_classpath(self.classpath))
    }
}
