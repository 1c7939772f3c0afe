use std::{
    env, fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, WrapErr};
use serde::Deserialize;

use super::resolver::{FixedLocation, PathScan, ResolveStrategy, StrategyKind};

pub const CONFIG_FILE_NAME: &str = "preferences.json";
pub const CONFIG_DIR_NAME: &str = "open-in-cursor";
pub const CONFIG_OVERRIDE_ENV: &str = "OPEN_IN_CURSOR_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub resolver: ResolverPreference,
    pub source: PreferenceSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreferenceSource {
    #[default]
    Defaults,
    ConfigFile(PathBuf),
}

/// Resolver settings as written in `preferences.json`. Unset fields fall back
/// to the strategy defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolverPreference {
    #[serde(default)]
    pub strategy: Option<StrategyKind>,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub launcher: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub base: Option<PathBuf>,
}

impl ResolverPreference {
    pub fn strategy(&self) -> ResolveStrategy {
        match self.strategy.unwrap_or(StrategyKind::PathScan) {
            StrategyKind::PathScan => {
                let defaults = PathScan::default();
                ResolveStrategy::PathScan(PathScan {
                    variable: self.variable.clone().unwrap_or(defaults.variable),
                    marker: self.marker.clone().unwrap_or(defaults.marker),
                    launcher: self.launcher.clone().unwrap_or(defaults.launcher),
                })
            }
            StrategyKind::FixedLocation => {
                let defaults = FixedLocation::default();
                ResolveStrategy::FixedLocation(FixedLocation {
                    base: self.base.clone().or(defaults.base),
                    product: self.product.clone().unwrap_or(defaults.product),
                    launcher: self.launcher.clone().unwrap_or(defaults.launcher),
                })
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("variable", &self.variable),
            ("marker", &self.marker),
            ("launcher", &self.launcher),
            ("product", &self.product),
        ];
        for (name, value) in fields {
            if value.as_deref().is_some_and(|value| value.trim().is_empty()) {
                return Err(format!("`resolver.{name}` must not be empty"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct FileFormat {
    #[serde(default)]
    resolver: Option<ResolverPreference>,
}

/// `$OPEN_IN_CURSOR_CONFIG` when set, otherwise the per-user config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_OVERRIDE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

pub fn load_preferences() -> color_eyre::Result<Preferences> {
    match config_path() {
        Some(path) => load_preferences_from(&path),
        None => Ok(Preferences::default()),
    }
}

pub fn load_preferences_from(path: &Path) -> color_eyre::Result<Preferences> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no preferences file, using defaults");
        return Ok(Preferences::default());
    }

    let text = fs::read_to_string(path)
        .wrap_err_with(|| eyre::eyre!("failed to read `{}`", path.display()))?;

    let parsed: FileFormat = serde_json::from_str(&text).map_err(|error| {
        let strategies = StrategyKind::ALL.map(StrategyKind::name).join(", ");
        eyre::eyre!(
            "preferences file `{}` is invalid: {} (known strategies: {})",
            path.display(),
            error,
            strategies
        )
    })?;

    let resolver = parsed.resolver.unwrap_or_default();
    resolver.validate().map_err(|error| {
        eyre::eyre!("preferences file `{}` is invalid: {}", path.display(), error)
    })?;

    Ok(Preferences {
        resolver,
        source: PreferenceSource::ConfigFile(path.to_path_buf()),
    })
}
