// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file formats and candidate file names.
//!
//! A candidate is a file name paired with the format it is parsed as. The
//! loader walks an ordered list of candidates; the format is derived from the
//! file extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The file format of a configuration candidate.
///
/// # Examples
///
/// ```
/// use grenrc::domain::ConfigFormat;
///
/// assert_eq!(ConfigFormat::from_path(".grenrc.yml"), Some(ConfigFormat::Yaml));
/// assert_eq!(ConfigFormat::from_path(".grenrc"), Some(ConfigFormat::Json));
/// assert_eq!(ConfigFormat::from_path(".grenrc.toml"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// A YAML mapping document (`.yml`, `.yaml`).
    Yaml,
    /// A JSON object document (`.json`, or no extension at all).
    Json,
    /// A declarative JavaScript module exporting an object literal (`.js`).
    Script,
}

impl ConfigFormat {
    /// Maps a file extension (without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            "js" => Some(ConfigFormat::Script),
            _ => None,
        }
    }

    /// Determines the format of a file from its name.
    ///
    /// Files without an extension (such as a bare `.grenrc`) are treated as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension() {
            None => Some(ConfigFormat::Json),
            Some(ext) => ext.to_str().and_then(Self::from_extension),
        }
    }

    /// Returns a short lowercase name for the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Script => "script",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configuration file name the loader looks for, with its format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCandidate {
    file_name: String,
    format: ConfigFormat,
}

impl ConfigCandidate {
    /// Creates a candidate with an explicit format.
    pub fn new(file_name: impl Into<String>, format: ConfigFormat) -> Self {
        Self {
            file_name: file_name.into(),
            format,
        }
    }

    /// Creates a candidate, deriving the format from the file name.
    ///
    /// Returns `None` if the extension is not recognised.
    pub fn from_file_name(file_name: impl Into<String>) -> Option<Self> {
        let file_name = file_name.into();
        let format = ConfigFormat::from_path(&file_name)?;
        Some(Self { file_name, format })
    }

    /// Returns the file name of this candidate.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the format of this candidate.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}
