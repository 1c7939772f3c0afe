use std::{path::PathBuf, process::ExitCode};

use crate::{
    editor::{Preferences, TargetKind, open_in_cursor},
    notice::{Notice, Severity},
};

use super::report_outcome;

pub(crate) const NO_SELECTION_MESSAGE: &str =
    "No item selected or unable to determine the path.";

/// Opens a project-tree item: files as themselves, everything else as the
/// containing folder.
#[derive(Debug)]
pub struct RevealCommand {
    kind: TargetKind,
    selected: PathBuf,
}

impl RevealCommand {
    pub fn new(kind: TargetKind, selected: PathBuf) -> Self {
        Self { kind, selected }
    }

    pub fn execute(&self, preferences: &Preferences) -> color_eyre::Result<ExitCode> {
        if self.selected.as_os_str().is_empty() {
            Notice::new(Severity::Warning, NO_SELECTION_MESSAGE).emit();
            return Ok(ExitCode::SUCCESS);
        }

        let path = self.kind.path_to_open(&self.selected);
        tracing::debug!(
            kind = ?self.kind,
            selected = %self.selected.display(),
            path = %path.display(),
            "revealing item"
        );
        let outcome = open_in_cursor(&path, None, None, preferences);
        Ok(report_outcome(&path, &outcome))
    }
}
