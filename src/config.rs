//! Installer configuration
//!
//! Everything the provisioner and installer need from the environment is
//! resolved once here and passed in explicitly.

use crate::error::ConfigError;
use crate::paths::InstallRoot;
use std::path::PathBuf;

/// Compiler invoked on source modules.
pub const DEFAULT_COMPILER: &str = "javac";

/// Value passed with `--release`.
pub const DEFAULT_RELEASE: &str = "17";

/// Classpath holding the compiled jil runtime, relative to the stdlib sources.
pub const DEFAULT_CLASSPATH: &str = "../out/production/jil/";

/// Settings shared by both CLIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Directory the `jil` tree is created under (normally the user's home).
    pub home: PathBuf,
    pub compiler: String,
    pub release: String,
    pub classpath: String,
    /// Extension of modules that go through the compiler.
    pub source_ext: String,
    /// Extension the compiler gives its artifacts.
    pub compiled_ext: String,
    /// Extension of modules copied as-is.
    pub precompiled_ext: String,
}

impl InstallConfig {
    /// Defaults rooted at `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            compiler: DEFAULT_COMPILER.to_string(),
            release: DEFAULT_RELEASE.to_string(),
            classpath: DEFAULT_CLASSPATH.to_string(),
            source_ext: "java".to_string(),
            compiled_ext: "class".to_string(),
            precompiled_ext: "jil".to_string(),
        }
    }

    /// Defaults rooted at the current user's home directory
    /// (`USERPROFILE` on Windows, `HOME` elsewhere).
    pub fn from_env() -> Result<Self, ConfigError> {
        dirs::home_dir().map(Self::new).ok_or(ConfigError::NoHome)
    }

    /// Use `home` if given, otherwise the user's home directory.
    pub fn with_home_override(home: Option<PathBuf>) -> Result<Self, ConfigError> {
        match home {
            Some(home) => Ok(Self::new(home)),
            None => Self::from_env(),
        }
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }

    pub fn with_classpath(mut self, classpath: impl Into<String>) -> Self {
        self.classpath = classpath.into();
        self
    }

    /// The install tree this configuration points at.
    pub fn install_root(&self) -> InstallRoot {
        InstallRoot::new(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InstallConfig::new("/home/jil");
        assert_eq!(config.compiler, "javac");
        assert_eq!(config.release, "17");
        assert_eq!(config.classpath, "../out/production/jil/");
        assert_eq!(config.source_ext, "java");
        assert_eq!(config.compiled_ext, "class");
        assert_eq!(config.precompiled_ext, "jil");
    }

    #[test]
    fn test_home_override_wins() {
        let config = InstallConfig::with_home_override(Some(PathBuf::from("/opt/me"))).unwrap();
        assert_eq!(config.home, PathBuf::from("/opt/me"));
        assert_eq!(config.install_root().std(), PathBuf::from("/opt/me/jil/lib/std"));
    }

    #[test]
    fn test_builders() {
        let config = InstallConfig::new("/h")
            .with_compiler("/usr/lib/jvm/bin/javac")
            .with_release("21")
            .with_classpath("out/");
        assert_eq!(config.compiler, "/usr/lib/jvm/bin/javac");
        assert_eq!(config.release, "21");
        assert_eq!(config.classpath, "out/");
    }
}
