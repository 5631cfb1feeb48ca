//! Folds decoded log entries into the per-file history map

use std::collections::HashMap;

use crate::core::commit::CommitInfo;
use crate::core::error::MapResult;
use crate::core::log::LogEntry;

/// Maps file paths, exactly as git reports them, to the newest commit
/// that touched them
pub type FileMap = HashMap<String, CommitInfo>;

/// Build the per-file map from log entries in emission order.
///
/// `git log` emits newest first, so the first record naming a path becomes
/// that path's head, and every later mention extends the path's ancestor
/// chain by one older link. The fold never re-sorts: chain order is the
/// emission order, which for the default query is reverse-chronological
/// topology order, not wall-clock time.
///
/// Any decode error aborts the fold; no partial map is returned.
pub fn build_file_map<'a, I>(entries: I) -> MapResult<FileMap>
where
  I: IntoIterator<Item = MapResult<LogEntry<'a>>>,
{
  // Each header parses once into a flat arena; per path we record the
  // arena indices of its touches, newest first. Chains materialize after
  // the fold, so no record placed in the map is ever mutated.
  let mut arena: Vec<CommitInfo> = Vec::new();
  let mut touches: HashMap<String, Vec<usize>> = HashMap::new();

  for entry in entries {
    let entry = entry?;
    let index = arena.len();
    arena.push(entry.info);

    for file in entry.files {
      let chain = touches.entry(file.to_string()).or_default();
      // a record listing the same path twice contributes one touch
      if chain.last() == Some(&index) {
        continue;
      }
      chain.push(index);
    }
  }

  let mut files = FileMap::with_capacity(touches.len());
  for (path, indices) in touches {
    if let Some(head) = materialize(&arena, &indices) {
      files.insert(path, head);
    }
  }

  Ok(files)
}

/// Chain one path's touches into an owned record list, oldest link
/// innermost
fn materialize(arena: &[CommitInfo], indices: &[usize]) -> Option<CommitInfo> {
  let mut chain: Option<Box<CommitInfo>> = None;
  for &index in indices.iter().rev() {
    let mut record = arena[index].clone();
    record.ancestor = chain;
    chain = Some(Box::new(record));
  }
  chain.map(|head| *head)
}
