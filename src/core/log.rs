//! Decoder for the delimited `git log` stream
//!
//! The log is requested with a three-level delimiter format so that
//! subjects, multi-line bodies and filenames survive intact: 0x1E
//! terminates a commit record, 0x1F separates the header fields inside it,
//! and 0x1D splits the header from the newline-separated list of touched
//! paths. See [`crate::core::repo::LOG_FORMAT`] for the exact format
//! string handed to git.

use crate::core::commit::{CommitInfo, parse_date};
use crate::core::error::{MapError, MapResult};

/// Terminates one commit record (`%x1e`)
pub const RECORD_SEPARATOR: char = '\u{1e}';
/// Separates header fields within a record (`%x1f`)
pub const FIELD_SEPARATOR: char = '\u{1f}';
/// Splits the header from the touched-path list (`%x1d`)
pub const UNIT_SEPARATOR: char = '\u{1d}';

/// One decoded record: the commit header plus the paths it touched
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
  pub info: CommitInfo,
  pub files: Vec<&'a str>,
}

/// Split a raw log blob into its records.
///
/// Decoding is lazy: records parse as the returned iterator advances, in
/// the exact order git emitted them.
pub fn decode(blob: &str) -> LogEntries<'_> {
  // git wraps the stream in stray newlines, separators and quotes
  let rest = blob.trim_matches(|c| c == '\n' || c == RECORD_SEPARATOR || c == '\'');
  LogEntries { rest }
}

/// Lazy iterator over the records of one log blob.
///
/// Cloning restarts the walk from where the clone was taken. A yielded
/// error means the stream and the mandated format disagree; callers abort
/// the whole query rather than keep a partial map.
#[derive(Debug, Clone)]
pub struct LogEntries<'a> {
  rest: &'a str,
}

impl<'a> Iterator for LogEntries<'a> {
  type Item = MapResult<LogEntry<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if self.rest.is_empty() {
        return None;
      }

      let record = match self.rest.find(RECORD_SEPARATOR) {
        Some(end) => {
          let record = &self.rest[..end];
          self.rest = &self.rest[end + RECORD_SEPARATOR.len_utf8()..];
          record
        }
        None => std::mem::take(&mut self.rest),
      };

      if record.trim().is_empty() {
        continue;
      }
      return Some(parse_record(record));
    }
  }
}

fn parse_record(record: &str) -> MapResult<LogEntry<'_>> {
  // Only the first unit separator counts; everything after it is the
  // path list. A record with no separator has touched no files.
  let (header, file_list) = match record.split_once(UNIT_SEPARATOR) {
    Some(split) => split,
    None => (record, ""),
  };

  let info = parse_header(header)?;
  let files = file_list
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .collect();

  Ok(LogEntry { info, files })
}

fn parse_header(header: &str) -> MapResult<CommitInfo> {
  let fields: Vec<&str> = header.split(FIELD_SEPARATOR).collect();

  // The body field was appended to the format later; streams recorded with
  // the older format carry seven fields and an implicitly empty body.
  let body = match fields.len() {
    7 => "",
    8 => fields[7].trim(),
    n => return Err(MapError::MalformedRecord { fields: n }),
  };

  Ok(CommitInfo {
    hash: fields[0].to_string(),
    abbreviated_hash: fields[1].to_string(),
    subject: fields[2].to_string(),
    author_name: fields[3].to_string(),
    author_email: fields[4].to_string(),
    author_date: parse_date(fields[5])?,
    commit_date: parse_date(fields[6])?,
    body: body.to_string(),
    ancestor: None,
  })
}
