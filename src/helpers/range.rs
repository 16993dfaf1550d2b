// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric range check.

/// Returns true if `lower <= value < upper`.
///
/// # Examples
///
/// ```
/// use grenrc::helpers::is_in_range;
///
/// assert!(is_in_range(2, 2, 5));
/// assert!(!is_in_range(5, 2, 5));
/// assert!(is_in_range(-0.5, -1.0, 0.0));
/// ```
pub fn is_in_range<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    lower <= value && value < upper
}
