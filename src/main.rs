use std::io;
use std::path::PathBuf;

use clap::Parser;
use git_filemap::{MapError, MapResult, Options, map, print_error};

/// Map a git repository's per-file commit history to JSON
#[derive(Parser)]
#[command(name = "git-filemap")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Path to the repository; any directory inside the working tree
  #[arg(default_value = ".")]
  repository: PathBuf,

  /// Revision to map; defaults to the currently checked-out revision
  #[arg(short, long, default_value = "")]
  revision: String,

  /// Explicit git executable to invoke instead of `git` on PATH
  #[arg(long, value_name = "PROGRAM")]
  git: Option<String>,

  /// Pretty-print the JSON output
  #[arg(long)]
  pretty: bool,
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = run(cli) {
    handle_error(err);
  }
}

fn run(cli: Cli) -> MapResult<()> {
  let opts = Options {
    repository: cli.repository,
    revision: cli.revision,
    git_program: cli.git,
  };

  let repo = map(&opts)?;

  let json = if cli.pretty {
    serde_json::to_string_pretty(&repo)
  } else {
    serde_json::to_string(&repo)
  }
  .map_err(io::Error::other)?;

  println!("{}", json);
  Ok(())
}

fn handle_error(err: MapError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))))
}
