//! Classification of files in the stdlib directory

use crate::config::InstallConfig;
use std::path::{Path, PathBuf};

/// What the installer does with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Compile, then install the artifact.
    CompiledSource,
    /// Copy into the tree unchanged.
    PrecompiledModule,
    Ignored,
}

/// Split a file name at its last `.`. Unlike [`Path::extension`], a leading
/// dot counts, so `.java` has the extension `java` and an empty stem.
fn split_ext(path: &Path) -> Option<(&str, &str)> {
    path.file_name()?.to_str()?.rsplit_once('.')
}

/// Classify `path` by the text after the last `.` of its file name.
///
/// Matching ignores case. Names without a `.` are ignored.
pub fn classify(path: &Path, config: &InstallConfig) -> FileKind {
    let Some((_, ext)) = split_ext(path) else {
        return FileKind::Ignored;
    };

    if ext.eq_ignore_ascii_case(&config.source_ext) {
        FileKind::CompiledSource
    } else if ext.eq_ignore_ascii_case(&config.precompiled_ext) {
        FileKind::PrecompiledModule
    } else {
        FileKind::Ignored
    }
}

/// Path of the artifact the compiler writes for `source`: the final
/// extension replaced by the compiled one, in the same directory.
pub fn artifact_path(source: &Path, config: &InstallConfig) -> PathBuf {
    match split_ext(source) {
        Some((stem, _)) => source.with_file_name(format!("{}.{}", stem, config.compiled_ext)),
        None => source.with_extension(&config.compiled_ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> InstallConfig {
        InstallConfig::new("/home/u")
    }

    #[test]
    fn test_classify_by_extension() {
        let c = config();
        assert_eq!(classify(Path::new("IO.java"), &c), FileKind::CompiledSource);
        assert_eq!(classify(Path::new("list.jil"), &c), FileKind::PrecompiledModule);
        assert_eq!(classify(Path::new("install_stdlib.py"), &c), FileKind::Ignored);
        assert_eq!(classify(Path::new("Mem.class"), &c), FileKind::Ignored);
    }

    #[test]
    fn test_classify_ignores_case() {
        let c = config();
        assert_eq!(classify(Path::new("IO.JAVA"), &c), FileKind::CompiledSource);
        assert_eq!(classify(Path::new("list.Jil"), &c), FileKind::PrecompiledModule);
    }

    #[test]
    fn test_classify_uses_last_extension() {
        let c = config();
        assert_eq!(classify(Path::new("old.jil.java"), &c), FileKind::CompiledSource);
        assert_eq!(classify(Path::new("IO.java.bak"), &c), FileKind::Ignored);
    }

    #[test]
    fn test_classify_without_extension() {
        let c = config();
        assert_eq!(classify(Path::new("Makefile"), &c), FileKind::Ignored);
        assert_eq!(classify(Path::new(".gitignore"), &c), FileKind::Ignored);
        assert_eq!(classify(Path::new("trailing."), &c), FileKind::Ignored);
    }

    #[test]
    fn test_dot_only_names_use_text_after_the_dot() {
        let c = config();
        assert_eq!(classify(Path::new(".java"), &c), FileKind::CompiledSource);
        assert_eq!(classify(Path::new(".JIL"), &c), FileKind::PrecompiledModule);
        assert_eq!(artifact_path(Path::new(".java"), &c), PathBuf::from(".class"));
    }

    #[test]
    fn test_artifact_path_replaces_final_extension() {
        let c = config();
        assert_eq!(artifact_path(Path::new("IO.java"), &c), PathBuf::from("IO.class"));
        assert_eq!(
            artifact_path(Path::new("src/v1.2/Mem.java"), &c),
            PathBuf::from("src/v1.2/Mem.class")
        );
    }
}
