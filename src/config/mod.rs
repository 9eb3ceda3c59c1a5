//! Client configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/ecolearn/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;


/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the EcoLearn backend
    pub api_url: String,

    /// Session CSRF token sent on state-changing requests. Optional here;
    /// building the API client without one is an error.
    pub csrf_token: Option<String>,

    /// Whether to run the TUI (headless mode logs to stdout and idles)
    pub enable_tui: bool,

    /// Demo mode: answer page interactions with canned responses instead
    /// of calling the backend
    pub demo_mode: bool,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Error-surfacing switches for the flows that are quiet by default
    pub behavior: Behavior,

    /// Search debounce tuning
    pub search: SearchTuning,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000".to_string(),
            csrf_token: None,
            enable_tui: true,
            demo_mode: false,
            theme: "dark".to_string(),
            behavior: Behavior::default(),
            search: SearchTuning::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Which quiet failures get user-visible alerts. The web surface showed
/// an alert for quiz failures only and silently logged the rest; these
/// flags let a deployment surface the others without changing the default.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    pub surface_progress_errors: bool,
    pub surface_search_errors: bool,
    /// Also open the achievement modal for achievements returned by quiz
    /// submission (the server sends them; the page historically ignored them)
    pub surface_quiz_achievements: bool,
}

impl Behavior {
    fn from_file(file: Option<FileBehavior>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            surface_progress_errors: file.surface_progress_errors.unwrap_or(false),
            surface_search_errors: file.surface_search_errors.unwrap_or(false),
            surface_quiz_achievements: file.surface_quiz_achievements.unwrap_or(false),
        }
    }
}

/// Search debounce tuning.
#[derive(Debug, Clone)]
pub struct SearchTuning {
    pub debounce_ms: u64,
    pub min_query_len: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
        }
    }
}

impl SearchTuning {
    fn from_file(file: Option<FileSearchTuning>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            min_query_len: file.min_query_len.unwrap_or(defaults.min_query_len),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset: "error".."trace"
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "ecolearn".to_string(),
        }
    }
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub csrf_token: Option<String>,
    pub theme: Option<String>,

    /// Optional [behavior] section
    pub behavior: Option<FileBehavior>,

    /// Optional [search] section
    pub search: Option<FileSearchTuning>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileBehavior {
    pub surface_progress_errors: Option<bool>,
    pub surface_search_errors: Option<bool>,
    pub surface_quiz_achievements: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileSearchTuning {
    pub debounce_ms: Option<u64>,
    pub min_query_len: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/ecolearn/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("ecolearn").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist, to help
    /// users discover the available options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load the file config if it exists.
    ///
    /// A config file that exists but cannot be parsed is a fatal error:
    /// failing fast with the parse error beats silently running on
    /// defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:\n  {}", path.display(), e);
                    eprintln!("To reset, delete the file and restart ecolearn.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let api_url = std::env::var("ECOLEARN_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        let csrf_token = std::env::var("ECOLEARN_CSRF_TOKEN")
            .ok()
            .or(file.csrf_token);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("ECOLEARN_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("ECOLEARN_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let theme = std::env::var("ECOLEARN_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        Self {
            api_url,
            csrf_token,
            enable_tui,
            demo_mode,
            theme,
            behavior: Behavior::from_file(file.behavior),
            search: SearchTuning::from_file(file.search),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Render the config as a commented TOML template. Single source of
    /// truth for the file written by `ensure_config_exists`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# EcoLearn client configuration
# Values here are overridden by ECOLEARN_* environment variables.

# Base URL of the EcoLearn backend
api_url = "{api_url}"

# Session CSRF token for state-changing requests
# csrf_token = "..."

# Theme: "dark" or "light"
theme = "{theme}"

[behavior]
# The web client surfaced an alert for quiz failures only; lesson
# progress and search failures were logged silently. Flip these to
# surface them as alerts too.
surface_progress_errors = {surface_progress_errors}
surface_search_errors = {surface_search_errors}
# Open the achievement modal for achievements earned via quiz submission
surface_quiz_achievements = {surface_quiz_achievements}

[search]
debounce_ms = {debounce_ms}
min_query_len = {min_query_len}

[logging]
# Default level when RUST_LOG is unset
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
"#,
            api_url = self.api_url,
            theme = self.theme,
            surface_progress_errors = self.behavior.surface_progress_errors,
            surface_search_errors = self.behavior.surface_search_errors,
            surface_quiz_achievements = self.behavior.surface_quiz_achievements,
            debounce_ms = self.search.debounce_ms,
            min_query_len = self.search.min_query_len,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
