// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utility helpers and `.grenrc` configuration file loading.
//!
//! This crate resolves release-notes settings from a `.grenrc` dotfile in one
//! of several formats, and ships the small helpers used around it: key
//! sorting, list coercion, date formatting, case conversion and range checks.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core types (`ConfigMap`, `ConfigFormat`, `ConfigCandidate`, errors)
//! - **Ports**: The `ConfigParser` trait
//! - **Adapters**: One parser per file format (JSON, YAML, script module)
//! - **Service**: The `ConfigLoader` that walks candidate files in precedence order
//! - **Helpers**: Standalone utility functions
//!
//! # Candidate Files
//!
//! In precedence order: `.grenrc.yml`, `.grenrc.json`, `.grenrc.yaml`,
//! `.grenrc.js`, `.grenrc`. The first one that loads wins. Files that are
//! missing or malformed are skipped; loading never fails.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable `.yml`/`.yaml` support (default)
//! - `script`: Enable declarative `.js` module support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grenrc::prelude::*;
//!
//! let config = get_config_from_file(".");
//! let labels = convert_string_to_array(config.get("ignoreLabels"));
//! println!("ignoring {} labels", labels.len());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod helpers;
pub mod ports;
pub mod service;

pub use helpers::{
    convert_string_to_array, dash_to_camel_case, format_date, is_in_range, noop, sort_object,
};
pub use service::{get_config_from_file, require_config};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigCandidate, ConfigError, ConfigFormat, ConfigMap, Result};
    pub use crate::helpers::{
        convert_string_to_array, dash_to_camel_case, format_date, is_in_range, noop, sort_object,
        split_list,
    };
    pub use crate::ports::ConfigParser;
    pub use crate::service::{
        default_config_dir, get_config_from_file, require_config, ConfigLoader,
        ConfigLoaderBuilder,
    };

    pub use crate::adapters::JsonParser;
    #[cfg(feature = "script")]
    pub use crate::adapters::ScriptParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
