//! Git runner backed by the system executable
//!
//! One subprocess call per invocation, stdout/stderr captured whole. The
//! program name is per-instance configuration, so tests can point a single
//! query at a nonexistent executable without process-wide state.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::Command;

use super::{GitRunner, RunError};

/// Runs git commands through [`std::process::Command`]
#[derive(Debug, Clone)]
pub struct SystemGit {
  /// Program name or path to invoke, normally plain `git`
  program: OsString,
}

impl SystemGit {
  /// Use `git` as resolved on PATH
  pub fn new() -> Self {
    Self::with_program("git")
  }

  /// Use an explicit executable instead of `git` on PATH
  pub fn with_program(program: impl Into<OsString>) -> Self {
    Self {
      program: program.into(),
    }
  }
}

impl Default for SystemGit {
  fn default() -> Self {
    Self::new()
  }
}

impl GitRunner for SystemGit {
  fn run(&self, stdout: &mut dyn Write, stderr: &mut dyn Write, args: &[&str]) -> Result<(), RunError> {
    let output = Command::new(&self.program).args(args).output().map_err(|e| {
      if e.kind() == io::ErrorKind::NotFound {
        RunError::NotFound {
          program: self.program.to_string_lossy().into_owned(),
        }
      } else {
        RunError::Io(e)
      }
    })?;

    stdout.write_all(&output.stdout).map_err(RunError::Io)?;
    stderr.write_all(&output.stderr).map_err(RunError::Io)?;

    if output.status.success() {
      Ok(())
    } else {
      Err(RunError::Unsuccessful)
    }
  }
}
