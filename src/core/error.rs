//! Error types for git-filemap with contextual messages and exit codes
//!
//! Every query is all-or-nothing: any of these errors aborts the whole
//! mapping and no partial file map is returned. Retry policy, if any,
//! belongs to the caller.

use std::fmt;
use std::io;

/// Exit codes for the git-filemap CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad repository path, unknown revision)
  User = 1,
  /// System error (git missing, I/O, corrupt log stream)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for git-filemap
#[derive(Debug)]
pub enum MapError {
  /// The git executable could not be located
  ExecutableNotFound { program: String },

  /// git ran but exited with a failure status
  CommandFailed { command: String, stderr: String },

  /// A log record did not split into the expected number of header fields
  MalformedRecord { fields: usize },

  /// A date field did not match the fixed log timestamp format
  InvalidTimestamp { value: String },

  /// I/O error (subprocess plumbing, path resolution)
  Io(io::Error),
}

impl MapError {
  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      MapError::CommandFailed { .. } => ExitCode::User,
      MapError::ExecutableNotFound { .. } => ExitCode::System,
      MapError::MalformedRecord { .. } => ExitCode::System,
      MapError::InvalidTimestamp { .. } => ExitCode::System,
      MapError::Io(_) => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      MapError::ExecutableNotFound { .. } => {
        Some("Install git, or pass --git <path> to point at the executable to use.".to_string())
      }
      MapError::CommandFailed { stderr, .. } => {
        if stderr.contains("not a git repository") {
          Some("The repository path must lie inside a git working tree.".to_string())
        } else if stderr.contains("unknown revision") || stderr.contains("bad revision") {
          Some("Use a branch, tag, or commit hash the repository actually has.".to_string())
        } else {
          None
        }
      }
      MapError::MalformedRecord { .. } => Some(
        "The log stream did not match the mandated --format string; this is an integration bug, not bad repository data."
          .to_string(),
      ),
      _ => None,
    }
  }
}

impl fmt::Display for MapError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MapError::ExecutableNotFound { program } => {
        write!(f, "git executable not found: {}", program)
      }
      MapError::CommandFailed { command, stderr } => {
        write!(f, "git command failed: {}\n{}", command, stderr)
      }
      MapError::MalformedRecord { fields } => {
        write!(f, "malformed log record: expected 7 or 8 header fields, got {}", fields)
      }
      MapError::InvalidTimestamp { value } => {
        write!(f, "invalid log timestamp: {:?}", value)
      }
      MapError::Io(e) => write!(f, "I/O error: {}", e),
    }
  }
}

impl std::error::Error for MapError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      MapError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for MapError {
  fn from(err: io::Error) -> Self {
    MapError::Io(err)
  }
}

/// Result type alias for git-filemap
pub type MapResult<T> = Result<T, MapError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &MapError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
