// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small standalone helpers.
//!
//! These do not depend on the loader and can be used on their own.

pub mod collections;
pub mod formatting;
pub mod range;

pub use collections::{convert_string_to_array, sort_object, split_list};
pub use formatting::{dash_to_camel_case, format_date};
pub use range::is_in_range;

/// Does nothing. Useful as a default callback.
///
/// ```
/// let callback: fn() = grenrc::helpers::noop;
/// callback();
/// ```
pub fn noop() {}
