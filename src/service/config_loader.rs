// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.grenrc` configuration file discovery and loading.
//!
//! The loader walks a fixed, ordered list of candidate file names inside a
//! directory and returns the first one that reads and parses into a mapping.
//! A missing, unreadable or malformed candidate is skipped, never reported as
//! an error, so a bad dotfile cannot abort a program's startup.

use crate::adapters::JsonParser;
#[cfg(feature = "script")]
use crate::adapters::ScriptParser;
#[cfg(feature = "yaml")]
use crate::adapters::YamlParser;
use crate::domain::{ConfigCandidate, ConfigError, ConfigFormat, ConfigMap, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate file names, highest precedence first.
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    ".grenrc.yml",
    ".grenrc.json",
    ".grenrc.yaml",
    ".grenrc.js",
    ".grenrc",
];

/// Maximum allowed configuration file size (10MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

static DEFAULT_LOADER: Lazy<ConfigLoader> = Lazy::new(ConfigLoader::new);

/// Returns the parser for a format, or `None` if its feature is disabled.
fn parser_for(format: ConfigFormat) -> Option<&'static dyn ConfigParser> {
    match format {
        ConfigFormat::Json => Some(&JsonParser),
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => Some(&YamlParser),
        #[cfg(feature = "script")]
        ConfigFormat::Script => Some(&ScriptParser),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn log_skipped(path: &Path, err: &ConfigError) {
    match err {
        ConfigError::ParseError { .. } | ConfigError::NotAMapping { .. } => {
            tracing::warn!("Ignoring configuration file {}: {}", path.display(), err);
        }
        _ if err.is_not_found() => {
            tracing::debug!("No configuration file at {}", path.display());
        }
        _ => {
            tracing::debug!("Skipping configuration file {}: {}", path.display(), err);
        }
    }
}

/// Loads `.grenrc`-style configuration files.
///
/// # Examples
///
/// ```rust,no_run
/// use grenrc::service::ConfigLoader;
///
/// let loader = ConfigLoader::new();
/// let config = loader.get_config_from_file(".");
/// if let Some(prefix) = config.get("prefix") {
///     println!("tag prefix: {}", prefix);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Candidates in precedence order (first wins)
    candidates: Vec<ConfigCandidate>,
    /// Files larger than this are skipped
    max_file_size: u64,
}

impl ConfigLoader {
    /// Creates a loader with the default `.grenrc` candidates.
    pub fn new() -> Self {
        Self {
            candidates: default_candidates(),
            max_file_size: MAX_CONFIG_FILE_SIZE,
        }
    }

    /// Creates a new loader builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grenrc::domain::ConfigFormat;
    /// use grenrc::service::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builder()
    ///     .with_candidates([".myapprc.json", ".myapprc"])
    ///     .with_max_file_size(64 * 1024)
    ///     .build();
    /// assert_eq!(loader.candidates().len(), 2);
    /// assert_eq!(loader.candidates()[1].format(), ConfigFormat::Json);
    /// ```
    pub fn builder() -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new()
    }

    /// Returns the candidates in precedence order.
    pub fn candidates(&self) -> &[ConfigCandidate] {
        &self.candidates
    }

    /// Returns the file size limit in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Loads a single configuration file, reporting why it could not be used.
    ///
    /// The format is chosen from the file extension: `.yml`/`.yaml` are YAML,
    /// `.json` is JSON, `.js` is a declarative script module, and a file with
    /// no extension is read as JSON.
    pub fn try_require_config<P: AsRef<Path>>(&self, path: P) -> Result<ConfigMap> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        self.load(path, format)
    }

    /// Loads a single configuration file.
    ///
    /// Returns `None` if the file is missing, unreadable, too large, malformed,
    /// or does not hold a mapping.
    pub fn require_config<P: AsRef<Path>>(&self, path: P) -> Option<ConfigMap> {
        let path = path.as_ref();
        match self.try_require_config(path) {
            Ok(map) => Some(map),
            Err(e) => {
                log_skipped(path, &e);
                None
            }
        }
    }

    /// Finds the first candidate in `dir` that loads, with its path.
    pub fn find_config<P: AsRef<Path>>(&self, dir: P) -> Option<(PathBuf, ConfigMap)> {
        let dir = dir.as_ref();
        for candidate in &self.candidates {
            let path = dir.join(candidate.file_name());
            match self.load(&path, candidate.format()) {
                Ok(map) => {
                    tracing::debug!("Loaded configuration from {}", path.display());
                    return Some((path, map));
                }
                Err(e) => log_skipped(&path, &e),
            }
        }
        None
    }

    /// Resolves the configuration for `dir`.
    ///
    /// Always returns a mapping: empty when no candidate could be loaded.
    pub fn get_config_from_file<P: AsRef<Path>>(&self, dir: P) -> ConfigMap {
        self.find_config(dir)
            .map(|(_, map)| map)
            .unwrap_or_default()
    }

    /// Resolves the configuration for `dir` and deserializes it into `T`.
    ///
    /// A directory without any usable candidate deserializes from an empty
    /// mapping, so `T` should default its fields.
    pub fn load_as<T, P>(&self, dir: P) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let map = self.get_config_from_file(dir);
        serde_json::from_value(Value::Object(map)).map_err(|e| ConfigError::DeserializeError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }

    fn load(&self, path: &Path, format: ConfigFormat) -> Result<ConfigMap> {
        let parser = parser_for(format).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        // Check file size before reading
        let metadata = fs::metadata(path)?;
        if metadata.len() > self.max_file_size {
            return Err(ConfigError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.max_file_size,
            });
        }

        let content = fs::read_to_string(path)?;
        match parser.parse(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn default_candidates() -> Vec<ConfigCandidate> {
    DEFAULT_CANDIDATES
        .iter()
        .filter_map(|name| ConfigCandidate::from_file_name(*name))
        .collect()
}

/// Builder for [`ConfigLoader`].
#[derive(Debug, Clone)]
pub struct ConfigLoaderBuilder {
    candidates: Vec<ConfigCandidate>,
    max_file_size: u64,
}

impl ConfigLoaderBuilder {
    /// Creates a builder seeded with the default `.grenrc` candidates.
    pub fn new() -> Self {
        Self {
            candidates: default_candidates(),
            max_file_size: MAX_CONFIG_FILE_SIZE,
        }
    }

    /// Appends a candidate with the lowest precedence so far.
    pub fn with_candidate(mut self, candidate: ConfigCandidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Replaces the candidate list with the given file names.
    ///
    /// Names whose extension is not recognised are dropped.
    pub fn with_candidates<I, S>(mut self, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = file_names
            .into_iter()
            .filter_map(ConfigCandidate::from_file_name)
            .collect();
        self
    }

    /// Sets the maximum file size in bytes.
    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ConfigLoader {
        ConfigLoader {
            candidates: self.candidates,
            max_file_size: self.max_file_size,
        }
    }
}

impl Default for ConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a single configuration file with the default loader.
///
/// # Examples
///
/// ```rust
/// assert!(grenrc::require_config("this/does/not/exist.json").is_none());
/// ```
pub fn require_config<P: AsRef<Path>>(path: P) -> Option<ConfigMap> {
    DEFAULT_LOADER.require_config(path)
}

/// Resolves the `.grenrc` configuration in `dir` with the default loader.
///
/// Candidates are tried in the order `.grenrc.yml`, `.grenrc.json`,
/// `.grenrc.yaml`, `.grenrc.js`, `.grenrc`. Returns an empty mapping when none
/// can be loaded.
pub fn get_config_from_file<P: AsRef<Path>>(dir: P) -> ConfigMap {
    DEFAULT_LOADER.get_config_from_file(dir)
}

/// Returns the OS-appropriate per-user configuration directory for an app.
///
/// # Examples
///
/// ```rust,no_run
/// use grenrc::service::{default_config_dir, get_config_from_file};
///
/// let config = default_config_dir("com.example", "gren")
///     .map(get_config_from_file)
///     .unwrap_or_default();
/// ```
pub fn default_config_dir(qualifier: &str, app_name: &str) -> Option<PathBuf> {
    ProjectDirs::from(qualifier, "", app_name).map(|dirs| dirs.config_dir().to_path_buf())
}
