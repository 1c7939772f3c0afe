use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::ValueEnum;

pub const NAVIGATION_FLAG: &str = "--goto";

/// 1-based caret position. A column is only meaningful together with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u64,
    pub column: Option<u64>,
}

impl Position {
    /// Non-positive or absent values count as unspecified.
    pub fn from_parts(line: Option<i64>, column: Option<i64>) -> Option<Self> {
        let line = positive(line)?;
        Some(Self {
            line,
            column: positive(column),
        })
    }

    fn suffix(self) -> String {
        match self.column {
            Some(column) => format!(":{}:{}", self.line, column),
            None => format!(":{}", self.line),
        }
    }
}

fn positive(value: Option<i64>) -> Option<u64> {
    value
        .filter(|value| *value > 0)
        .and_then(|value| u64::try_from(value).ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub path: PathBuf,
    pub position: Option<Position>,
}

impl LaunchTarget {
    pub fn new(path: impl Into<PathBuf>, position: Option<Position>) -> Self {
        Self {
            path: path.into(),
            position,
        }
    }
}

/// Arguments handed to the Cursor launcher.
///
/// `argv` goes to the process untouched (no shell is involved), while
/// `command_line` is the quoted single-string form used in messages and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArguments {
    argv: Vec<OsString>,
    command_line: String,
}

impl LaunchArguments {
    pub fn for_target(target: &LaunchTarget) -> Self {
        let path = target.path.as_os_str();
        match target.position {
            Some(position) => {
                let mut location = path.to_os_string();
                location.push(position.suffix());
                let command_line =
                    format!("{NAVIGATION_FLAG} \"{}\"", location.to_string_lossy());
                Self {
                    argv: vec![OsString::from(NAVIGATION_FLAG), location],
                    command_line,
                }
            }
            None => Self {
                argv: vec![path.to_os_string()],
                command_line: format!("\"{}\"", path.to_string_lossy()),
            },
        }
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}

/// Kind of item picked in a project tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetKind {
    File,
    Folder,
    Project,
    Solution,
}

impl TargetKind {
    /// Files open as themselves; folders, projects, and solutions open the
    /// directory that contains them.
    pub fn path_to_open(self, selected: &Path) -> PathBuf {
        if self == TargetKind::File || !selected.is_file() {
            return selected.to_path_buf();
        }

        match selected.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => selected.to_path_buf(),
        }
    }
}
