// Configuration loading and parsing (league.toml, assistant.toml, environment).

use chrono::Datelike;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variables that override file values.
pub const ENV_LEAGUE_ID: &str = "DRAFTLINE_LEAGUE_ID";
pub const ENV_USER_ID: &str = "DRAFTLINE_USER_ID";
pub const ENV_USERNAME: &str = "DRAFTLINE_USERNAME";
pub const ENV_REFRESH_SECS: &str = "DRAFTLINE_REFRESH_SECS";
pub const ENV_RANKINGS: &str = "DRAFTLINE_RANKINGS";

/// Accepted range for `[refresh] interval_secs`.
pub const MIN_REFRESH_SECS: u64 = 10;
pub const MAX_REFRESH_SECS: u64 = 60;

const DEFAULT_LEAGUE_TOML: &str = include_str!("../../../defaults/league.toml");
const DEFAULT_ASSISTANT_TOML: &str = include_str!("../../../defaults/assistant.toml");

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },

    #[error("invalid value for environment variable {var}: {message}")]
    EnvError { var: String, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `config/`, `data/` and `logs/`.
    pub base_dir: PathBuf,
    pub sleeper: SleeperConfig,
    pub refresh: RefreshConfig,
    pub recommendations: RecommendationConfig,
    pub data: DataConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Apply overrides on top of the file values. Only fields that are set
    /// in `overrides` change.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(league_id) = overrides.league_id {
            self.sleeper.league_id = league_id;
        }
        if let Some(user_id) = overrides.user_id {
            self.sleeper.user_id = Some(user_id);
        }
        if let Some(username) = overrides.username {
            self.sleeper.username = Some(username);
        }
        if let Some(secs) = overrides.refresh_secs {
            self.refresh.interval_secs = secs;
        }
        if let Some(rankings) = overrides.rankings {
            self.data.rankings = rankings;
        }
        self
    }

    /// Rankings CSV path, resolved against `base_dir` when relative.
    pub fn rankings_path(&self) -> PathBuf {
        self.base_dir.join(&self.data.rankings)
    }

    /// Check every field. Called after overrides are merged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[sleeper]` table in league.toml.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    sleeper: SleeperConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SleeperConfig {
    #[serde(default)]
    pub league_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Resolved to a user id at startup when `user_id` is not set.
    #[serde(default)]
    pub username: Option<String>,
    /// NFL season used when listing the user's leagues. Defaults to the
    /// current calendar year.
    #[serde(default)]
    pub season: Option<String>,
}

impl SleeperConfig {
    pub fn season(&self) -> String {
        self.season
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| chrono::Utc::now().year().to_string())
    }
}

// ---------------------------------------------------------------------------
// assistant.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for assistant.toml. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct AssistantFile {
    #[serde(default)]
    refresh: RefreshConfig,
    #[serde(default)]
    recommendations: RecommendationConfig,
    #[serde(default)]
    data: DataConfig,
    #[serde(default)]
    api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub auto_refresh: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            interval_secs: 30,
            auto_refresh: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub top_n: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        RecommendationConfig { top_n: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub rankings: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            rankings: "data/dynasty_rankings.csv".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://api.sleeper.app/v1".into(),
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Environment overrides
// ---------------------------------------------------------------------------

/// Values that take precedence over the config files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub league_id: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub refresh_secs: Option<u64>,
    pub rankings: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build overrides from any variable lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let refresh_secs = match get(ENV_REFRESH_SECS) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::EnvError {
                var: ENV_REFRESH_SECS.into(),
                message: format!("expected a whole number of seconds, got {raw:?} ({e})"),
            })?),
            None => None,
        };

        Ok(ConfigOverrides {
            league_id: get(ENV_LEAGUE_ID),
            user_id: get(ENV_USER_ID),
            username: get(ENV_USERNAME),
            refresh_secs,
            rankings: get(ENV_RANKINGS),
        })
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Read `config/league.toml` (required) and `config/assistant.toml`
/// (optional) under `base_dir`, then apply `overrides`. Does not validate.
pub fn read_config_from(
    base_dir: &Path,
    overrides: ConfigOverrides,
) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    // --- league.toml (required) ---
    let league_path = config_dir.join("league.toml");
    let league_text = read_file(&league_path)?;
    let league_file: LeagueFile =
        toml::from_str(&league_text).map_err(|e| ConfigError::ParseError {
            path: league_path.clone(),
            source: e,
        })?;

    // --- assistant.toml (optional) ---
    let assistant_path = config_dir.join("assistant.toml");
    let assistant = if assistant_path.exists() {
        let text = read_file(&assistant_path)?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: assistant_path.clone(),
            source: e,
        })?
    } else {
        AssistantFile::default()
    };

    let mut sleeper = league_file.sleeper;
    sleeper.user_id = non_empty(sleeper.user_id);
    sleeper.username = non_empty(sleeper.username);
    sleeper.season = non_empty(sleeper.season);

    let config = Config {
        base_dir: base_dir.to_path_buf(),
        sleeper,
        refresh: assistant.refresh,
        recommendations: assistant.recommendations,
        data: assistant.data,
        api: assistant.api,
    };

    Ok(config.merge(overrides))
}

/// Read, merge and validate.
pub fn load_config_from(
    base_dir: &Path,
    overrides: ConfigOverrides,
) -> Result<Config, ConfigError> {
    let config = read_config_from(base_dir, overrides)?;
    validate(&config)?;
    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were created. Skips `.example` files.
///
/// When `defaults/` is absent (an installed binary running from the per-user
/// config directory), the built-in defaults are written instead.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    if !defaults_dir.exists() {
        for (name, content) in [
            ("league.toml", DEFAULT_LEAGUE_TOML),
            ("assistant.toml", DEFAULT_ASSISTANT_TOML),
        ] {
            let target = config_dir.join(name);
            if write_new(&target, content.as_bytes())? {
                copied.push(target);
            }
        }
        return Ok(copied);
    }

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }

        let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        if write_new(&target, &content)? {
            copied.push(target);
        }
    }

    Ok(copied)
}

/// Pick the directory config is loaded from: the working directory when it
/// holds `config/` or `defaults/`, otherwise the per-user config directory.
pub fn resolve_base_dir() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    if cwd.join("config").is_dir() || cwd.join("defaults").is_dir() {
        return Ok(cwd);
    }
    match directories::ProjectDirs::from("", "", "draftline") {
        Some(dirs) => Ok(dirs.config_dir().to_path_buf()),
        None => Ok(cwd),
    }
}

/// Convenience wrapper: resolves the base directory, copies defaults, reads
/// the files and applies environment overrides. Validation is left to the
/// caller so that a missing league id can be reported with context.
pub fn load_config() -> Result<Config, ConfigError> {
    let base_dir = resolve_base_dir()?;
    ensure_config_files(&base_dir)?;
    let overrides = ConfigOverrides::from_env()?;
    read_config_from(&base_dir, overrides)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Create `target` with `content` unless it already exists. Returns whether
/// the file was written.
fn write_new(target: &Path, content: &[u8]) -> Result<bool, ConfigError> {
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(mut dest) => {
            std::io::Write::write_all(&mut dest, content).map_err(|e| {
                ConfigError::DefaultsCopyError {
                    message: format!("failed to write {}: {e}", target.display()),
                }
            })?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", target.display()),
        }),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let sleeper = &config.sleeper;
    if sleeper.league_id.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "sleeper.league_id".into(),
            message: "must be set".into(),
        });
    }

    let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !has(&sleeper.user_id) && !has(&sleeper.username) {
        return Err(ConfigError::ValidationError {
            field: "sleeper.user_id".into(),
            message: "either user_id or username must be set".into(),
        });
    }

    let interval = config.refresh.interval_secs;
    if !(MIN_REFRESH_SECS..=MAX_REFRESH_SECS).contains(&interval) {
        return Err(ConfigError::ValidationError {
            field: "refresh.interval_secs".into(),
            message: format!(
                "must be between {} and {} inclusive, got {}",
                MIN_REFRESH_SECS, MAX_REFRESH_SECS, interval
            ),
        });
    }

    let top_n = config.recommendations.top_n;
    if !(1..=20).contains(&top_n) {
        return Err(ConfigError::ValidationError {
            field: "recommendations.top_n".into(),
            message: format!("must be between 1 and 20 inclusive, got {top_n}"),
        });
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "api.timeout_secs".into(),
            message: "must be > 0".into(),
        });
    }

    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: "must be set".into(),
        });
    }

    if config.data.rankings.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.rankings".into(),
            message: "must be set".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
