use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::Deserialize;

pub const DEFAULT_PATH_VARIABLE: &str = "PATH";
pub const DEFAULT_MARKER: &str = "cursor";
pub const DEFAULT_PRODUCT: &str = "cursor";

#[cfg(windows)]
pub const DEFAULT_PATH_LAUNCHER: &str = "cursor.cmd";
#[cfg(not(windows))]
pub const DEFAULT_PATH_LAUNCHER: &str = "cursor";

#[cfg(windows)]
pub const DEFAULT_INSTALLED_LAUNCHER: &str = "Cursor.exe";
#[cfg(not(windows))]
pub const DEFAULT_INSTALLED_LAUNCHER: &str = "cursor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    PathScan,
    FixedLocation,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::PathScan, StrategyKind::FixedLocation];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::PathScan => "path-scan",
            StrategyKind::FixedLocation => "fixed-location",
        }
    }
}

/// Looks through the directories of a PATH-like variable for one whose name
/// mentions `marker` and that holds `launcher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathScan {
    pub variable: String,
    pub marker: String,
    pub launcher: String,
}

impl Default for PathScan {
    fn default() -> Self {
        Self {
            variable: DEFAULT_PATH_VARIABLE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            launcher: DEFAULT_PATH_LAUNCHER.to_string(),
        }
    }
}

impl PathScan {
    pub fn locate(&self) -> Option<PathBuf> {
        let Some(value) = env::var_os(&self.variable) else {
            tracing::debug!(variable = %self.variable, "search variable is not set");
            return None;
        };

        scan_path_entries(&value, &self.marker, &self.launcher)
    }
}

/// Return the first `<entry>/<launcher>` that is a regular file, considering
/// only entries whose text contains `marker` (ignoring case).
pub fn scan_path_entries(value: &OsStr, marker: &str, launcher: &str) -> Option<PathBuf> {
    let marker = marker.to_lowercase();

    for entry in env::split_paths(value) {
        let text = entry.to_string_lossy();
        if text.trim().is_empty() {
            continue;
        }
        if !text.to_lowercase().contains(&marker) {
            continue;
        }

        let candidate = entry.join(launcher);
        match candidate.metadata() {
            Ok(metadata) if metadata.is_file() => {
                tracing::debug!(candidate = %candidate.display(), "found launcher");
                return Some(candidate);
            }
            Ok(_) => {
                tracing::trace!(candidate = %candidate.display(), "not a regular file");
            }
            Err(error) => {
                tracing::trace!(candidate = %candidate.display(), %error, "skipping entry");
            }
        }
    }

    None
}

/// Checks the conventional per-user install location
/// `<base>/Programs/<product>/<launcher>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocation {
    /// Defaults to the local application-data directory when unset.
    pub base: Option<PathBuf>,
    pub product: String,
    pub launcher: String,
}

impl Default for FixedLocation {
    fn default() -> Self {
        Self {
            base: None,
            product: DEFAULT_PRODUCT.to_string(),
            launcher: DEFAULT_INSTALLED_LAUNCHER.to_string(),
        }
    }
}

impl FixedLocation {
    pub fn install_path(&self) -> Option<PathBuf> {
        let base = self.base.clone().or_else(dirs::data_local_dir)?;
        Some(base.join("Programs").join(&self.product).join(&self.launcher))
    }

    pub fn locate(&self) -> Option<PathBuf> {
        let Some(path) = self.install_path() else {
            tracing::debug!("local application-data directory is unavailable");
            return None;
        };
        path.is_file().then_some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveStrategy {
    PathScan(PathScan),
    FixedLocation(FixedLocation),
}

impl Default for ResolveStrategy {
    fn default() -> Self {
        ResolveStrategy::PathScan(PathScan::default())
    }
}

impl ResolveStrategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            ResolveStrategy::PathScan(_) => StrategyKind::PathScan,
            ResolveStrategy::FixedLocation(_) => StrategyKind::FixedLocation,
        }
    }

    pub fn locate(&self) -> Option<PathBuf> {
        match self {
            ResolveStrategy::PathScan(scan) => scan.locate(),
            ResolveStrategy::FixedLocation(fixed) => fixed.locate(),
        }
    }
}

/// Locates the Cursor launcher and remembers the answer, found or not, for the
/// lifetime of the resolver.
#[derive(Debug)]
pub struct ExecutableResolver {
    strategy: ResolveStrategy,
    resolved: OnceLock<Option<PathBuf>>,
}

impl ExecutableResolver {
    pub fn new(strategy: ResolveStrategy) -> Self {
        Self {
            strategy,
            resolved: OnceLock::new(),
        }
    }

    pub fn strategy(&self) -> &ResolveStrategy {
        &self.strategy
    }

    /// First call runs the search; every later call returns the cached result
    /// even if the environment has changed since.
    pub fn resolve(&self) -> Option<&Path> {
        self.resolved
            .get_or_init(|| {
                let found = self.strategy.locate();
                tracing::debug!(
                    strategy = self.strategy.kind().name(),
                    found = ?found,
                    "resolved Cursor launcher"
                );
                found
            })
            .as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn describe_search(&self) -> String {
        match &self.strategy {
            ResolveStrategy::PathScan(scan) => format!(
                "`{}` in ${} entries containing `{}`",
                scan.launcher, scan.variable, scan.marker
            ),
            ResolveStrategy::FixedLocation(fixed) => match fixed.install_path() {
                Some(path) => format!("`{}`", path.display()),
                None => format!(
                    "`Programs/{}/{}` under the local application-data directory",
                    fixed.product, fixed.launcher
                ),
            },
        }
    }
}

impl Default for ExecutableResolver {
    fn default() -> Self {
        Self::new(ResolveStrategy::default())
    }
}
