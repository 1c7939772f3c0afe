pub mod locate;
pub mod open;
pub mod reveal;

use std::{path::Path, process::ExitCode};

use owo_colors::{OwoColorize, Stream};

use crate::editor::LaunchOutcome;

/// Print the outcome of a launch. Warnings exit successfully, errors do not.
pub(crate) fn report_outcome(path: &Path, outcome: &LaunchOutcome) -> ExitCode {
    match outcome.notice() {
        None => {
            let path_raw = format!("{}", path.display());
            let path = format!(
                "{}",
                path_raw
                    .as_str()
                    .if_supports_color(Stream::Stdout, |text| format!("{}", text.blue()))
            );
            println!("Opened `{}` in Cursor.", path);
            println!("{}", outcome.message);
            ExitCode::SUCCESS
        }
        Some(notice) if notice.is_error() => {
            notice.emit();
            ExitCode::FAILURE
        }
        Some(notice) => {
            notice.emit();
            ExitCode::SUCCESS
        }
    }
}
