// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the file format parsers.
//!
//! Each adapter implements the `ConfigParser` trait defined in the ports layer
//! for one configuration file format.

pub mod json_file;
#[cfg(feature = "script")]
pub mod script_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use json_file::JsonParser;
#[cfg(feature = "script")]
pub use script_file::ScriptParser;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
