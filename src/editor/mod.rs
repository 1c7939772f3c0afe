mod launch;
mod preference;
mod resolver;
mod target;

use std::{path::Path, sync::OnceLock};

use crate::telemetry::log_editor_launch_attempt;

pub use launch::{LaunchOutcome, LaunchRequest, launch_editor, missing_executable_message};
pub use preference::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_OVERRIDE_ENV, PreferenceSource, Preferences,
    ResolverPreference, config_path, load_preferences, load_preferences_from,
};
pub use resolver::{
    DEFAULT_INSTALLED_LAUNCHER, DEFAULT_MARKER, DEFAULT_PATH_LAUNCHER, DEFAULT_PATH_VARIABLE,
    DEFAULT_PRODUCT, ExecutableResolver, FixedLocation, PathScan, ResolveStrategy, StrategyKind,
    scan_path_entries,
};
pub use target::{LaunchArguments, LaunchTarget, NAVIGATION_FLAG, Position, TargetKind};

static SHARED_RESOLVER: OnceLock<ExecutableResolver> = OnceLock::new();

/// Process-wide resolver. The preferences passed on the first call decide the
/// strategy; later calls get the same resolver back whatever they pass.
pub fn shared_resolver(preferences: &Preferences) -> &'static ExecutableResolver {
    SHARED_RESOLVER.get_or_init(|| ExecutableResolver::new(preferences.resolver.strategy()))
}

pub fn open_in_cursor(
    path: &Path,
    line: Option<i64>,
    column: Option<i64>,
    preferences: &Preferences,
) -> LaunchOutcome {
    let outcome = launch_editor(LaunchRequest {
        path,
        line,
        column,
        resolver: shared_resolver(preferences),
    });
    log_editor_launch_attempt(path, outcome.status, &outcome.message);
    outcome
}
