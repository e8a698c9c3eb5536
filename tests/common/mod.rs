//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for javac: copies `<name>.java` to `<name>.class` in the
/// current directory and appends its arguments to `calls.log` next to itself.
/// Names starting with `Bad` fail, `Ghost` succeed without writing anything,
/// and `Warn` succeed with a note on stderr.
pub const FAKE_JAVAC: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
case "$1" in
  Bad*)
    echo "$1:1: error: class, interface, or enum expected" >&2
    exit 1
    ;;
  Ghost*)
    exit 0
    ;;
  Warn*)
    echo "Note: $1 uses unchecked or unsafe operations." >&2
    ;;
esac
cp "$1" "${1%.*}.class"
"#;

/// Scratch layout: a home directory, a stdlib working directory, and a
/// directory holding the fake compiler.
pub struct TestEnv {
    _dir: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let work = dir.path().join("stdlib");
        let bin = dir.path().join("bin");
        for d in [&home, &work, &bin] {
            fs::create_dir_all(d).unwrap();
        }
        Self {
            _dir: dir,
            home,
            work,
            bin,
        }
    }

    /// Write the fake compiler and return its path.
    #[cfg(unix)]
    pub fn fake_javac(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.join("javac");
        fs::write(&path, FAKE_JAVAC).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Argument lines recorded by the fake compiler.
    pub fn compiler_calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin.join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn std_dir(&self) -> PathBuf {
        self.home.join("jil").join("lib").join("std")
    }

    pub fn installed(&self, name: &str) -> PathBuf {
        self.std_dir().join(name)
    }
}

pub fn read(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e))
}
