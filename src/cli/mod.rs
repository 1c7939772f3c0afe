use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    commands::{locate::LocateCommand, open::OpenCommand, reveal::RevealCommand},
    editor::{TargetKind, load_preferences},
};

pub const LOG_FILTER_ENV: &str = "OPEN_IN_CURSOR_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "open-in-cursor",
    version,
    about = "Open files, folders, projects, and solutions in Cursor",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a file or folder, optionally at a line and column.
    Open(OpenArgs),
    /// Open a project-tree item; folders, projects, and solutions open their directory.
    Reveal(RevealArgs),
    /// Print the Cursor launcher that would be used.
    Locate,
}

#[derive(Parser, Debug)]
struct OpenArgs {
    /// File or folder to open
    path: OsString,
    /// 1-based line to jump to; zero or negative means none
    #[arg(long, allow_negative_numbers = true)]
    line: Option<i64>,
    /// 1-based column to jump to; ignored without --line
    #[arg(long, allow_negative_numbers = true)]
    column: Option<i64>,
}

#[derive(Parser, Debug)]
struct RevealArgs {
    /// Kind of item selected
    #[arg(value_enum)]
    kind: TargetKind,
    /// Path of the selected item
    path: OsString,
}

pub fn run() -> color_eyre::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let preferences = load_preferences()?;

    match cli.command {
        Commands::Open(args) => {
            let command = OpenCommand::new(PathBuf::from(args.path), args.line, args.column);
            command.execute(&preferences)
        }
        Commands::Reveal(args) => {
            let command = RevealCommand::new(args.kind, PathBuf::from(args.path));
            command.execute(&preferences)
        }
        Commands::Locate => {
            let command = LocateCommand;
            command.execute(&preferences)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "open_in_cursor=error",
        1 => "open_in_cursor=info",
        _ => "open_in_cursor=debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
