//! Run configuration and file exclusion settings.
//!
//! `RunConfig` is built once from the command line and never changes during a
//! run. Exclusion rules come from an optional TOML settings file:
//!
//! ```toml
//! [filters.exclude]
//! filenames = ["Thumbs.db", "desktop.ini"]
//! patterns = ["*.tmp", "node_modules/**"]
//! extensions = ["bak", "part"]
//! regex = ["^~\\$"]
//! ```
//!
//! Glob patterns are matched against the path relative to the root being
//! organized; regexes against the bare file name.

use glob::Pattern;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Log file location used by the command-line tool, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/log.txt";

/// Settings file looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = ".fileorgrc.toml";

/// Options for a single organize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory being organized; category folders are created directly inside it.
    pub root: PathBuf,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Append one line per successful move to `log_file`.
    pub logging: bool,
    /// Report what would move without touching the filesystem.
    pub dry_run: bool,
    pub log_file: PathBuf,
}

impl RunConfig {
    /// Creates a non-recursive, non-logging config for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            logging: false,
            dry_run: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }
}

/// Errors raised while loading or compiling exclusion settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("IO error reading configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid glob pattern '{0}'")]
    InvalidGlobPattern(String),
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegexPattern { pattern: String, reason: String },
}

/// Exclusion settings as read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filters: FilterRules,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterRules {
    /// Files matching any of these rules are left where they are.
    #[serde(default)]
    pub exclude: ExcludeRules,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExcludeRules {
    /// Exact file names.
    #[serde(default)]
    pub filenames: Vec<String>,

    /// Glob patterns relative to the root.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Extensions without the dot, case-insensitive.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Regexes matched against the file name.
    #[serde(default)]
    pub regex: Vec<String>,
}

impl FilterConfig {
    /// Loads settings, falling back to defaults when no file is found.
    ///
    /// Lookup order:
    /// 1. `config_path`, if given (must exist)
    /// 2. `.fileorgrc.toml` in the working directory
    /// 3. `~/.config/fileorg/config.toml`
    /// 4. built-in defaults (no exclusions)
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local = PathBuf::from(LOCAL_SETTINGS_FILE);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("fileorg")
                .join("config.toml");
            if home_config.is_file() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Loads settings from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        log::debug!("loading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Compiles the rules into matchers; fails on the first invalid pattern.
    pub fn compile(self) -> Result<CompiledFilters, ConfigError> {
        CompiledFilters::new(self.filters)
    }
}

/// Pre-compiled exclusion rules.
#[derive(Debug, Default)]
pub struct CompiledFilters {
    exclude_filenames: HashSet<String>,
    exclude_extensions: HashSet<String>,
    exclude_patterns: Vec<Pattern>,
    exclude_regexes: Vec<Regex>,
}

impl CompiledFilters {
    fn new(rules: FilterRules) -> Result<Self, ConfigError> {
        let exclude = rules.exclude;

        let exclude_patterns = exclude
            .patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|_| ConfigError::InvalidGlobPattern(pattern.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = exclude
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidRegexPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            exclude_filenames: exclude.filenames.into_iter().collect(),
            exclude_extensions: exclude
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns,
            exclude_regexes,
        })
    }

    /// Returns true if the file at `relative_path` (relative to the root) is excluded.
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        let file_name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.exclude_filenames.contains(file_name.as_ref()) {
            return true;
        }

        if let Some(ext) = crate::file_category::extension_of(&file_name)
            && self.exclude_extensions.contains(&ext)
        {
            return true;
        }

        if self
            .exclude_patterns
            .iter()
            .any(|pattern| pattern.matches_path(relative_path))
        {
            return true;
        }

        self.exclude_regexes
            .iter()
            .any(|regex| regex.is_match(&file_name))
    }
}
