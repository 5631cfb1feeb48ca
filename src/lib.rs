//! Build a queryable index of a git repository's file history.
//!
//! For every file ever touched at the requested revision, the index holds
//! the chain of commits that modified it, newest first, with full commit
//! metadata: hashes, mailmap-resolved author identity, author and commit
//! dates, subject and body. The index is built once per query from the
//! output of `git log` and is immutable afterwards.
//!
//! ```no_run
//! use git_filemap::{Options, map};
//!
//! let repo = map(&Options {
//!   repository: ".".into(),
//!   ..Options::default()
//! })?;
//!
//! if let Some(head) = repo.files.get("README.md") {
//!   println!("last touched by {} in {}", head.author_name, head.abbreviated_hash);
//!   for older in head.ancestors() {
//!     println!("  before that: {}", older.subject);
//!   }
//! }
//! # Ok::<(), git_filemap::MapError>(())
//! ```
//!
//! Renamed files are two unrelated path identities: rename detection is
//! disabled in the underlying log query, so an old name keeps its own
//! chain ending at the commit that removed it.

pub mod core;
pub mod utils;

pub use crate::core::commit::{Ancestors, CommitInfo, DATE_FORMAT, parse_date};
pub use crate::core::error::{ExitCode, MapError, MapResult, print_error};
pub use crate::core::history::FileMap;
pub use crate::core::log::{LogEntries, LogEntry, decode};
pub use crate::core::repo::{GitRepo, LOG_FORMAT, Options, map, map_with};
pub use crate::core::vcs::{GitRunner, RunError, SystemGit};
