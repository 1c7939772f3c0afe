use std::path::Path;

use crate::notice::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorLaunchStatus {
    Success,
    EmptyPath,
    PathNotFound,
    ExecutableNotFound,
    LaunchFailed,
}

impl EditorLaunchStatus {
    pub fn is_success(self) -> bool {
        self == EditorLaunchStatus::Success
    }

    /// Severity used when the status is surfaced to the user. `None` for success.
    pub fn severity(self) -> Option<Severity> {
        match self {
            EditorLaunchStatus::Success => None,
            EditorLaunchStatus::EmptyPath => Some(Severity::Warning),
            EditorLaunchStatus::PathNotFound
            | EditorLaunchStatus::ExecutableNotFound
            | EditorLaunchStatus::LaunchFailed => Some(Severity::Error),
        }
    }
}

pub fn log_editor_launch_attempt(path: &Path, status: EditorLaunchStatus, message: &str) {
    if status.is_success() {
        tracing::info!(path = %path.display(), ?status, detail = message, "launch attempt");
    } else {
        tracing::warn!(path = %path.display(), ?status, detail = message, "launch attempt");
    }
}
