pub mod system_git;

pub use system_git::SystemGit;

use std::io::Write;

/// Why a single git invocation produced no usable output
#[derive(Debug)]
pub enum RunError {
  /// The executable could not be located at all
  NotFound { program: String },

  /// The process ran but exited with a failure status
  Unsuccessful,

  /// Spawning the process or writing a sink failed
  Io(std::io::Error),
}

/// Capability for running one git command.
///
/// Production code uses [`SystemGit`]. Tests substitute a double to feed
/// scripted output or inject failures without touching the real tool.
pub trait GitRunner {
  /// Run git with `args`, streaming its stdout/stderr into the sinks.
  ///
  /// Implementations must report [`RunError::NotFound`] when the executable
  /// cannot be located, distinct from [`RunError::Unsuccessful`] for a
  /// command that ran and failed; callers rely on that distinction.
  fn run(&self, stdout: &mut dyn Write, stderr: &mut dyn Write, args: &[&str]) -> Result<(), RunError>;
}
