// SPDX-License-Identifier: MIT OR Apache-2.0

//! Date and identifier formatting helpers.

use chrono::{DateTime, TimeZone, Utc};

/// Formats a date as `MM/DD/YYYY`, always in UTC.
///
/// The offset carried by `date` does not change the result: the same instant
/// gives the same string in every time zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use grenrc::helpers::format_date;
///
/// let epoch = Utc.timestamp_opt(0, 0).unwrap();
/// assert_eq!(format_date(&epoch), "01/01/1970");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%m/%d/%Y").to_string()
}

/// Converts a dash separated identifier to camelCase.
///
/// Every segment is lower-cased first, so `tHIs-Is` and `this-is` both give
/// `thisIs`.
///
/// # Examples
///
/// ```
/// use grenrc::helpers::dash_to_camel_case;
///
/// assert_eq!(dash_to_camel_case("ignore-issues-with"), "ignoreIssuesWith");
/// ```
pub fn dash_to_camel_case(s: &str) -> String {
    s.split('-')
        .enumerate()
        .map(|(i, segment)| {
            let segment = segment.to_lowercase();
            if i == 0 {
                return segment;
            }
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
