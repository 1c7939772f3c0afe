use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::{notice::Notice, telemetry::EditorLaunchStatus};

use super::{
    ExecutableResolver, ResolveStrategy,
    target::{LaunchArguments, LaunchTarget, Position},
};

pub struct LaunchRequest<'a> {
    pub path: &'a Path,
    pub line: Option<i64>,
    pub column: Option<i64>,
    pub resolver: &'a ExecutableResolver,
}

#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub status: EditorLaunchStatus,
    pub message: String,
}

impl LaunchOutcome {
    fn new(status: EditorLaunchStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.status
            .severity()
            .map(|severity| Notice::new(severity, self.message.clone()))
    }

    /// `(ok, message)`, where the message is only present on failure.
    pub fn into_parts(self) -> (bool, Option<String>) {
        if self.is_success() {
            (true, None)
        } else {
            (false, Some(self.message))
        }
    }
}

pub fn launch_editor(request: LaunchRequest<'_>) -> LaunchOutcome {
    if request.path.as_os_str().is_empty() {
        return LaunchOutcome::new(EditorLaunchStatus::EmptyPath, "No path provided.");
    }

    if !request.path.exists() {
        return LaunchOutcome::new(
            EditorLaunchStatus::PathNotFound,
            format!("Path not found: {}", request.path.display()),
        );
    }

    let Some(executable) = request.resolver.resolve() else {
        return LaunchOutcome::new(
            EditorLaunchStatus::ExecutableNotFound,
            missing_executable_message(request.resolver),
        );
    };

    let target = LaunchTarget::new(
        request.path,
        Position::from_parts(request.line, request.column),
    );
    let arguments = LaunchArguments::for_target(&target);

    let mut command = Command::new(executable);
    command
        .args(arguments.argv())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    detach(&mut command);

    match command.spawn() {
        Ok(child) => {
            tracing::debug!(pid = child.id(), executable = %executable.display(), "spawned Cursor");
            LaunchOutcome::new(
                EditorLaunchStatus::Success,
                format!(
                    "Launched `{}` using `{} {}`",
                    request.path.display(),
                    executable.display(),
                    arguments.command_line()
                ),
            )
        }
        Err(error) => LaunchOutcome::new(
            EditorLaunchStatus::LaunchFailed,
            format!("Failed to open in Cursor: {error}"),
        ),
    }
}

/// Remediation text for a resolver that came back empty.
pub fn missing_executable_message(resolver: &ExecutableResolver) -> String {
    let searched = resolver.describe_search();
    match resolver.strategy() {
        ResolveStrategy::PathScan(scan) => format!(
            "Cursor executable not found in {variable} (looked for {searched}).\n\n\
             Please make sure:\n\
             1. Cursor is installed\n\
             2. Cursor is added to your system {variable}\n\
             3. The calling application is restarted after adding it to {variable}",
            variable = scan.variable,
        ),
        ResolveStrategy::FixedLocation(_) => format!(
            "Cursor executable not found at {searched}.\n\n\
             Please make sure:\n\
             1. Cursor is installed\n\
             2. Cursor was installed for the current user in the default location\n\
             3. The calling application is restarted after installing Cursor"
        ),
    }
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NEW_PROCESS_GROUP | CREATE_NO_WINDOW);
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    command.process_group(0);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}
