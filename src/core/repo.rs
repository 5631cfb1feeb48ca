//! Repository mapping: drives git and assembles the snapshot
//!
//! Two subprocess calls per query: one `rev-parse --show-cdup` to resolve
//! the top-level directory, one `log` in the delimited format decoded by
//! [`crate::core::log`]. The result is a brand-new, immutable snapshot;
//! there is no update or merge operation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::{MapError, MapResult};
use crate::core::history::{FileMap, build_file_map};
use crate::core::log;
use crate::core::vcs::{GitRunner, RunError, SystemGit};
use crate::utils::slash_join;

/// Log format handed to git: 0x1E terminates a record, 0x1F separates the
/// header fields, 0x1D introduces the touched-path list.
///
/// The surrounding invocation must disable merge entries, rename
/// detection and signature output, or the stream will not decode; see
/// [`map_with`] for the full argument list.
pub const LOG_FORMAT: &str = "--format=format:%x1e%H%x1f%h%x1f%s%x1f%aN%x1f%aE%x1f%ai%x1f%ci%x1f%b%x1d";

/// Options for [`map`]
#[derive(Debug, Clone, Default)]
pub struct Options {
  /// Path to the repository to map; any directory inside the working tree
  pub repository: PathBuf,

  /// Use blank or HEAD for the currently active revision
  pub revision: String,

  /// Explicit git executable; defaults to `git` as resolved on PATH
  pub git_program: Option<String>,
}

/// A mapped repository: where its working tree lives and which commits
/// touched every file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepo {
  /// Absolute path of the top-level directory, forward slashes on every
  /// platform, symbolic links not resolved
  pub top_level_abs_path: String,

  /// The files in this git repository
  pub files: FileMap,
}

/// Map a repository with the system git executable
pub fn map(opts: &Options) -> MapResult<GitRepo> {
  let runner = match &opts.git_program {
    Some(program) => SystemGit::with_program(program),
    None => SystemGit::new(),
  };
  map_with(&runner, opts)
}

/// Map a repository through an injected [`GitRunner`]
pub fn map_with(runner: &dyn GitRunner, opts: &Options) -> MapResult<GitRepo> {
  // An empty repository path means the current directory, like git's own
  // treatment of `-C ""`.
  let repository = if opts.repository.as_os_str().is_empty() {
    Path::new(".")
  } else {
    opts.repository.as_path()
  };
  let repo_arg = repository.to_string_lossy().into_owned();

  // Top level first: the repository argument may point anywhere inside
  // the working tree.
  let cdup = run_git(runner, &["-C", &repo_arg, "rev-parse", "--show-cdup"])?;
  let abs_repo_path = std::path::absolute(repository)?;
  let top_level_abs_path = slash_join(&abs_repo_path, cdup.trim());

  let mut args: Vec<&str> = vec![
    "-c",
    "diff.renames=0",
    "-c",
    "log.showSignature=0",
    "-C",
    &repo_arg,
    "log",
    "--name-only",
    "--no-merges",
    LOG_FORMAT,
  ];
  let revision = opts.revision.trim();
  if !revision.is_empty() {
    args.push(revision);
  }

  let out = run_git(runner, &args)?;
  let files = build_file_map(log::decode(&out))?;

  Ok(GitRepo {
    top_level_abs_path,
    files,
  })
}

/// Run one git command, mapping the runner outcome onto query errors
fn run_git(runner: &dyn GitRunner, args: &[&str]) -> MapResult<String> {
  let mut stdout = Vec::new();
  let mut stderr = Vec::new();

  match runner.run(&mut stdout, &mut stderr, args) {
    Ok(()) => Ok(String::from_utf8_lossy(&stdout).into_owned()),
    Err(RunError::NotFound { program }) => Err(MapError::ExecutableNotFound { program }),
    Err(RunError::Unsuccessful) => Err(MapError::CommandFailed {
      command: format!("git {}", args.join(" ")),
      stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
    }),
    Err(RunError::Io(e)) => Err(MapError::Io(e)),
  }
}
