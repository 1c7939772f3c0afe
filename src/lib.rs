pub mod cli;
mod commands;
pub mod editor;
pub mod notice;
pub mod telemetry;

use std::path::Path;

pub use editor::{LaunchOutcome, Preferences, TargetKind};
pub use notice::{Notice, Severity};

/// Open `path` in Cursor, optionally at a 1-based `line` and `column`.
///
/// Uses the process-wide resolver; when nothing has initialised it yet, it is
/// set up with default preferences (PATH scan).
pub fn launch(path: impl AsRef<Path>, line: Option<i64>, column: Option<i64>) -> LaunchOutcome {
    editor::open_in_cursor(path.as_ref(), line, column, &Preferences::default())
}
