//! Commit records and ancestor-chain traversal

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::error::{MapError, MapResult};

/// Textual timestamp format emitted by `git log` for `%ai`/`%ci`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// One commit as it touched one file path.
///
/// Records form per-path chains: `ancestor` holds the next-older commit
/// that touched the same path, `None` at the oldest touch. A chain is
/// owned, immutable data; a built map can be read from any number of
/// threads without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitInfo {
  /// Full commit hash
  pub hash: String,
  /// Abbreviated commit hash
  pub abbreviated_hash: String,
  /// The commit message's subject/title line
  pub subject: String,
  /// The author name, respecting .mailmap
  pub author_name: String,
  /// The author email address, respecting .mailmap
  pub author_email: String,
  /// The author date
  #[serde(with = "log_date")]
  pub author_date: DateTime<FixedOffset>,
  /// The commit date
  #[serde(with = "log_date")]
  pub commit_date: DateTime<FixedOffset>,
  /// The commit message body, empty when the commit has none
  pub body: String,
  /// Next-older commit touching the same file path
  #[serde(default)]
  pub ancestor: Option<Box<CommitInfo>>,
}

impl CommitInfo {
  /// Walk the chain of older commits for this record's path, newest first,
  /// excluding the record itself.
  pub fn ancestors(&self) -> Ancestors<'_> {
    Ancestors {
      next: self.ancestor.as_deref(),
    }
  }
}

/// Iterator over a commit's older relatives on the same path.
///
/// Cloning restarts the walk from where the clone was taken;
/// [`Ancestors::reversed`] yields the same records oldest first without
/// advancing this iterator.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
  next: Option<&'a CommitInfo>,
}

impl<'a> Iterator for Ancestors<'a> {
  type Item = &'a CommitInfo;

  fn next(&mut self) -> Option<Self::Item> {
    let current = self.next?;
    self.next = current.ancestor.as_deref();
    Some(current)
  }
}

impl<'a> Ancestors<'a> {
  /// The remaining records in oldest-to-newest order
  pub fn reversed(&self) -> std::iter::Rev<std::vec::IntoIter<&'a CommitInfo>> {
    let records: Vec<_> = self.clone().collect();
    records.into_iter().rev()
  }
}

/// Parse a `%ai`/`%ci` timestamp, surfacing the offending text on failure
pub fn parse_date(value: &str) -> MapResult<DateTime<FixedOffset>> {
  DateTime::parse_from_str(value, DATE_FORMAT).map_err(|_| MapError::InvalidTimestamp {
    value: value.to_string(),
  })
}

/// Serde adapter keeping dates in the log's textual format, offset
/// included, so a serialized record re-parses to the same instant
mod log_date {
  use chrono::{DateTime, FixedOffset};
  use serde::{Deserialize, Deserializer, Serializer};

  use super::DATE_FORMAT;

  pub fn serialize<S>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&value, DATE_FORMAT).map_err(serde::de::Error::custom)
  }
}
