//! Core engine for git-filemap
//!
//! This module contains the building blocks of a mapping query:
//!
//! - **commit**: commit records, timestamps, and ancestor-chain traversal
//! - **error**: error types with contextual help messages
//! - **history**: folding decoded log entries into the per-file map
//! - **log**: decoder for the delimited git log stream
//! - **repo**: query orchestration (Options, GitRepo, map)
//! - **vcs**: git invocation abstraction (GitRunner, SystemGit)

pub mod commit;
pub mod error;
pub mod history;
pub mod log;
pub mod repo;
pub mod vcs;
