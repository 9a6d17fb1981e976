// Rust guideline compliant 2026-10-16

//! Shared helpers for hook integration tests.

#![allow(dead_code)]

use jac_hooks_core::{HookKind, Result, Runner};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then execute a script.
///
/// Without it another thread may fork while the script is still open for
/// writing, and the exec fails with "text file busy".
pub fn spawn_lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Stand-in for the `jac` toolchain.
///
/// `format` strips leading blanks from every line (its canonical style) and
/// fails on files containing `SYNTAX ERROR`. `check` fails on files containing
/// `mismatch`. Every call is appended to `calls.log` next to the script.
const FAKE_JAC: &str = r#"#!/bin/sh
cmd="$1"
shift
echo "$cmd $*" >> "$(dirname "$0")/calls.log"
status=0
case "$cmd" in
  format)
    for f in "$@"; do
      if [ ! -f "$f" ]; then
        echo "$f: no such file" >&2
        status=1
        continue
      fi
      if grep -q 'SYNTAX ERROR' "$f"; then
        echo "$f: parse error" >&2
        status=1
        continue
      fi
      sed 's/^[[:blank:]]*//' "$f" > "$f.fmt" && mv "$f.fmt" "$f"
    done
    ;;
  check)
    for f in "$@"; do
      if grep -q 'mismatch' "$f"; then
        echo "$f: type error" >&2
        status=1
      fi
    done
    ;;
  *)
    echo "unknown command: $cmd" >&2
    status=64
    ;;
esac
exit $status
"#;

/// A temp directory holding a fake `jac` script and the files under test.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let workspace = Self { dir };
        workspace.write_script("jac", FAKE_JAC);
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the fake `jac` executable.
    pub fn tool(&self) -> PathBuf {
        self.path().join("jac")
    }

    /// Writes an executable script that ignores its arguments and exits with `code`.
    pub fn exit_with(&self, code: i32) -> PathBuf {
        let name = format!("exit-{code}");
        self.write_script(&name, &format!("#!/bin/sh\nexit {code}\n"));
        self.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }

    /// Lines recorded by the fake tool, one per invocation.
    pub fn calls(&self) -> Vec<String> {
        match std::fs::read_to_string(self.path().join("calls.log")) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    #[cfg(unix)]
    fn write_script(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.path().join(name);
        std::fs::write(&path, body).expect("Failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
    }

    #[cfg(not(unix))]
    fn write_script(&self, name: &str, body: &str) {
        std::fs::write(self.path().join(name), body).expect("Failed to write script");
    }
}

/// In-process runner that records calls and returns a fixed exit code.
pub struct RecordingRunner {
    pub code: i32,
    pub calls: RefCell<Vec<(HookKind, Vec<PathBuf>)>>,
}

impl RecordingRunner {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Runner for RecordingRunner {
    fn run(&self, kind: HookKind, files: &[PathBuf]) -> Result<i32> {
        self.calls.borrow_mut().push((kind, files.to_vec()));
        Ok(self.code)
    }
}
