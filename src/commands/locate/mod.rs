use std::process::ExitCode;

use owo_colors::{OwoColorize, Stream};

use crate::{
    editor::{Preferences, PreferenceSource, missing_executable_message, shared_resolver},
    notice::{Notice, Severity},
};

#[derive(Debug, Default)]
pub struct LocateCommand;

impl LocateCommand {
    pub fn execute(&self, preferences: &Preferences) -> color_eyre::Result<ExitCode> {
        let resolver = shared_resolver(preferences);
        if let PreferenceSource::ConfigFile(path) = &preferences.source {
            tracing::info!(config = %path.display(), "using preferences file");
        }
        tracing::info!(
            strategy = resolver.strategy().kind().name(),
            search = %resolver.describe_search(),
            "locating Cursor"
        );

        match resolver.resolve() {
            Some(executable) => {
                let path_raw = format!("{}", executable.display());
                let path = format!(
                    "{}",
                    path_raw
                        .as_str()
                        .if_supports_color(Stream::Stdout, |text| format!("{}", text.green()))
                );
                println!("{}", path);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                Notice::new(Severity::Error, missing_executable_message(resolver)).emit();
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
