//! Path handling helpers for git-style output

use std::path::{Component, Path};

/// Join an absolute directory with a relative offset (such as the output
/// of `git rev-parse --show-cdup`) and normalize the result the way git
/// prints paths: `.`/`..` segments resolved, forward slashes on every
/// platform.
pub fn slash_join(base: &Path, offset: &str) -> String {
  let joined = base.join(offset);

  let mut prefix = String::new();
  let mut parts: Vec<String> = Vec::new();
  for component in joined.components() {
    match component {
      Component::Prefix(p) => {
        prefix = p.as_os_str().to_string_lossy().replace('\\', "/");
      }
      Component::RootDir | Component::CurDir => {}
      Component::ParentDir => {
        parts.pop();
      }
      Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
    }
  }

  format!("{}/{}", prefix, parts.join("/"))
}
