// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer implementation.
//!
//! This module contains the configuration loader, which resolves a `.grenrc`
//! file from a directory using the format parsers in the adapters layer.

pub mod config_loader;

pub use config_loader::{
    default_config_dir, get_config_from_file, require_config, ConfigLoader, ConfigLoaderBuilder,
    DEFAULT_CANDIDATES, MAX_CONFIG_FILE_SIZE,
};
