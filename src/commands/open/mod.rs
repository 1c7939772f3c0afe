use std::{path::PathBuf, process::ExitCode};

use crate::editor::{Preferences, open_in_cursor};

use super::report_outcome;

/// Opens a document, optionally at a caret position.
#[derive(Debug)]
pub struct OpenCommand {
    path: PathBuf,
    line: Option<i64>,
    column: Option<i64>,
}

impl OpenCommand {
    pub fn new(path: PathBuf, line: Option<i64>, column: Option<i64>) -> Self {
        Self { path, line, column }
    }

    pub fn execute(&self, preferences: &Preferences) -> color_eyre::Result<ExitCode> {
        let outcome = open_in_cursor(&self.path, self.line, self.column, preferences);
        Ok(report_outcome(&self.path, &outcome))
    }
}
