//! fsift-cli: Command-line interface for fsift.

mod output;

use clap::Parser;
use fsift_core::build_info::BuildInfo;
use fsift_core::{Config, Result};
use fsift_filter::{filter_files, PatternSet};
use fsift_scanner::Scanner;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "fsift")]
#[command(about = "List the files under a directory, filtered by ignore / re-include globs", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to walk
    root: PathBuf,

    /// Comma-separated patterns; prefix with `!` to re-include (e.g. "*.log,!keep.log")
    patterns: Option<String>,

    /// Print paths relative to ROOT and match patterns against them
    #[arg(short, long)]
    relative: bool,

    /// Terminate entries with NUL instead of newline
    #[arg(short = '0', long)]
    null: bool,

    /// Config file (default: $FSIFT_DIR/config.toml or ~/.config/fsift/config.toml)
    #[arg(long, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long)]
    no_config: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    if wants_version(std::env::args_os().skip(1)) {
        println!("{}", BuildInfo::current().version_line("fsift"));
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    fsift_core::logging::init(cli.verbose.then_some("debug"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fsift_core::Error::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("fsift: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli)?;
    if cli.relative {
        config.traversal.relative_paths = true;
    }

    // Config patterns first, then the command line.
    let mut patterns = PatternSet::from_patterns(&config.patterns);
    if let Some(list) = &cli.patterns {
        patterns.extend_list(list);
    }
    debug!("Using {} patterns", patterns.len());

    let files = Scanner::new(config.traversal).scan(&cli.root)?;
    let kept = filter_files(files, &patterns);

    let terminator = if cli.null { b'\0' } else { b'\n' };
    output::write_paths(std::io::stdout().lock(), &kept, terminator)?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(&fsift_core::paths::config_path()),
    }
}

/// `-V`/`--version` anywhere before a `--` separator.
fn wants_version(args: impl IntoIterator<Item = OsString>) -> bool {
    args.into_iter()
        .take_while(|arg| arg != "--")
        .any(|arg| arg == "--version" || arg == "-V")
}
