//! Tests for the git-filemap CLI binary

use crate::helpers::*;
use anyhow::Result;
use serde_json::Value;

#[test]
fn test_cli_prints_json_map() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "a\n")?;
  let first = repo.commit("First")?;
  repo.write_file("a.txt", "aa\n")?;
  let second = repo.commit("Second")?;

  let output = run_git_filemap(&repo.path, &["."])?;
  let json: Value = serde_json::from_slice(&output.stdout)?;

  assert!(json["topLevelAbsPath"].as_str().is_some_and(|p| !p.is_empty()));

  let head = &json["files"]["a.txt"];
  assert_eq!(head["hash"], Value::String(second));
  assert_eq!(head["subject"], Value::String("Second".to_string()));
  assert_eq!(head["ancestor"]["hash"], Value::String(first));
  assert_eq!(head["ancestor"]["ancestor"], Value::Null);

  Ok(())
}

#[test]
fn test_cli_revision_flag() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "a\n")?;
  let first = repo.commit("First")?;
  repo.write_file("b.txt", "b\n")?;
  repo.commit("Second")?;

  let output = run_git_filemap(&repo.path, &["--revision", &first, "."])?;
  let json: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(json["files"]["a.txt"]["hash"], Value::String(first));
  assert_eq!(json["files"]["b.txt"], Value::Null);

  Ok(())
}

#[test]
fn test_cli_pretty_output_parses_identically() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "a\n")?;
  repo.commit("First")?;

  let compact = run_git_filemap(&repo.path, &["."])?;
  let pretty = run_git_filemap(&repo.path, &["--pretty", "."])?;

  let compact_json: Value = serde_json::from_slice(&compact.stdout)?;
  let pretty_json: Value = serde_json::from_slice(&pretty.stdout)?;
  assert_eq!(compact_json, pretty_json);
  assert!(pretty.stdout.len() > compact.stdout.len());

  Ok(())
}

#[test]
fn test_cli_exit_code_for_bad_revision() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "a\n")?;
  repo.commit("First")?;

  let output = git_filemap_command(&repo.path, &["--revision", "nope-not-here", "."]).output()?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());

  Ok(())
}

#[test]
fn test_cli_exit_code_for_missing_git() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("a.txt", "a\n")?;
  repo.commit("First")?;

  let output = git_filemap_command(&repo.path, &["--git", "git-filemap-hopefully-not-on-path", "."]).output()?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(2));

  Ok(())
}
