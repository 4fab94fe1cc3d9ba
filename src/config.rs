//! Application-level configuration loading, including emotion profile overrides.

use std::{
    collections::HashMap,
    env, fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::palette::{DEFAULT_COLOR_COUNT, EmotionProfile, PaletteEngine, ProfileTable, SentimentCategory};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "EMOTION_PALETTE_CONFIG_PATH";
/// Largest palette a client may request unless configured otherwise.
const DEFAULT_MAX_COLOR_COUNT: usize = 12;
/// Upper bound on the number of palettes returned by the gallery.
const DEFAULT_GALLERY_LIMIT: usize = 100;
/// Palettes kept by the in-memory store before the oldest are evicted.
const DEFAULT_STORE_CAPACITY: usize = 10_000;

/// Reasons the configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Palette size used when a request does not specify one.
    pub default_color_count: usize,
    /// Largest palette size a request may ask for.
    pub max_color_count: usize,
    /// Maximum number of palettes returned by the gallery.
    pub gallery_limit: usize,
    /// Maximum number of palettes held by the in-memory store.
    pub store_capacity: usize,
    /// When set, every generation uses a fresh RNG seeded with this value.
    pub seed: Option<u64>,
    profiles: ProfileTable,
}

impl AppConfig {
    /// Load the configuration from disk.
    ///
    /// A missing file yields the built-in defaults. A file that cannot be
    /// read, parsed or validated is an error: a profile naming an unknown
    /// harmony scheme must stop startup rather than be silently replaced.
    pub fn load() -> Result<Self, ConfigError> {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = Self::parse(&contents, &path)?;
                info!(
                    path = %path.display(),
                    seeded = config.seed.is_some(),
                    "loaded configuration"
                );
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        raw.try_into()
    }

    /// Palette engine bound to the configured profile table.
    pub fn engine(&self) -> PaletteEngine {
        PaletteEngine::new(self.profiles.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_color_count: DEFAULT_COLOR_COUNT,
            max_color_count: DEFAULT_MAX_COLOR_COUNT,
            gallery_limit: DEFAULT_GALLERY_LIMIT,
            store_capacity: DEFAULT_STORE_CAPACITY,
            seed: None,
            profiles: ProfileTable::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    default_color_count: Option<usize>,
    #[serde(default)]
    max_color_count: Option<usize>,
    #[serde(default)]
    gallery_limit: Option<usize>,
    #[serde(default)]
    store_capacity: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    profiles: HashMap<SentimentCategory, EmotionProfile>,
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let default_color_count = raw
            .default_color_count
            .unwrap_or(defaults.default_color_count);
        let max_color_count = raw.max_color_count.unwrap_or(defaults.max_color_count);
        let gallery_limit = raw.gallery_limit.unwrap_or(defaults.gallery_limit);
        let store_capacity = raw.store_capacity.unwrap_or(defaults.store_capacity);

        if default_color_count == 0 {
            return Err(ConfigError::Invalid(
                "default_color_count must be at least 1".into(),
            ));
        }
        if default_color_count > max_color_count {
            return Err(ConfigError::Invalid(format!(
                "default_color_count ({default_color_count}) exceeds max_color_count ({max_color_count})"
            )));
        }
        if gallery_limit == 0 {
            return Err(ConfigError::Invalid("gallery_limit must be at least 1".into()));
        }
        if store_capacity == 0 {
            return Err(ConfigError::Invalid("store_capacity must be at least 1".into()));
        }

        let mut profiles = defaults.profiles;
        for (category, profile) in raw.profiles {
            info!(%category, harmony = %profile.harmony, "overriding emotion profile");
            profiles.set(category, profile);
        }

        Ok(Self {
            default_color_count,
            max_color_count,
            gallery_limit,
            store_capacity,
            seed: raw.seed,
            profiles,
        })
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::HarmonyScheme;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.default_color_count, 5);
        assert_eq!(config.max_color_count, DEFAULT_MAX_COLOR_COUNT);
        assert_eq!(config.gallery_limit, DEFAULT_GALLERY_LIMIT);
        assert_eq!(config.store_capacity, DEFAULT_STORE_CAPACITY);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn scalar_fields_are_read() {
        let config = AppConfig::from_json(
            r#"{ "default_color_count": 3, "max_color_count": 8, "gallery_limit": 20, "store_capacity": 64, "seed": 42 }"#,
        )
        .unwrap();
        assert_eq!(config.default_color_count, 3);
        assert_eq!(config.max_color_count, 8);
        assert_eq!(config.gallery_limit, 20);
        assert_eq!(config.store_capacity, 64);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn profile_overrides_replace_one_category() {
        let config = AppConfig::from_json(
            r#"{
                "profiles": {
                    "slightly_negative": {
                        "name": "Wistful",
                        "candidate_hues": [190, 200, 210, 220],
                        "saturation_range": [0.2, 0.5],
                        "lightness_range": [0.4, 0.6],
                        "temperature": "cool",
                        "energy": "low",
                        "harmony": "monochromatic",
                        "mood": "wistful"
                    }
                }
            }"#,
        )
        .unwrap();

        let engine = config.engine();
        let overridden = engine.profiles().get(SentimentCategory::SlightlyNegative);
        assert_eq!(overridden.name, "Wistful");
        assert_eq!(overridden.harmony, HarmonyScheme::Monochromatic);
        assert_eq!(
            engine.profiles().get(SentimentCategory::Negative),
            ProfileTable::default().get(SentimentCategory::Negative)
        );
    }

    #[test]
    fn unknown_harmony_scheme_fails_fast() {
        let err = AppConfig::from_json(
            r#"{
                "profiles": {
                    "neutral": {
                        "name": "Balance",
                        "candidate_hues": [0, 90, 180, 270],
                        "saturation_range": [0.3, 0.6],
                        "lightness_range": [0.5, 0.7],
                        "temperature": "balanced",
                        "energy": "medium",
                        "harmony": "hexadic",
                        "mood": "balanced"
                    }
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_category_and_fields_are_rejected() {
        assert!(AppConfig::from_json(r#"{ "profiles": { "ecstatic": {} } }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "colours": 3 }"#).is_err());
    }

    #[test]
    fn inconsistent_counts_are_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "default_color_count": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "default_color_count": 9, "max_color_count": 4 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "gallery_limit": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "store_capacity": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
