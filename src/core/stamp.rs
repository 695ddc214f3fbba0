//! Timestamp prefix formatting and the file name transform.
//!
//! A stamped name looks like `20240305T143000_report.txt`: the file's
//! last-modified time in local time, a `_`, then the original name.

use chrono::{DateTime, Local, Timelike};
use regex::Regex;
use std::sync::OnceLock;
use std::time::SystemTime;

use crate::defaults::{PREFIX_SEPARATOR, TIMESTAMP_FORMAT, TIMESTAMP_PREFIX_PATTERN};

fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIMESTAMP_PREFIX_PATTERN).expect("timestamp prefix regex"))
}

/// Convert a filesystem time to local time, truncated to whole seconds.
pub fn local_time(time: SystemTime) -> DateTime<Local> {
    let local: DateTime<Local> = time.into();
    local.with_nanosecond(0).unwrap_or(local)
}

/// Format a timestamp as `YYYYMMDDThhmmss`.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the leading `YYYYMMDDThhmmss_` segment of `name`, if it has one.
pub fn existing_prefix(name: &str) -> Option<&str> {
    prefix_regex().find(name).map(|m| m.as_str())
}

/// Compute the stamped name for `base_name` given its modification time.
///
/// - No prefix yet: the new timestamp is prepended.
/// - Same prefix already present: the name is returned unchanged.
/// - A different prefix: it is replaced, never stacked.
pub fn compute_new_name(base_name: &str, mod_time: &DateTime<Local>) -> String {
    let stamp = format_timestamp(mod_time);

    match existing_prefix(base_name) {
        Some(prefix) if prefix[..prefix.len() - 1] == stamp => base_name.to_string(),
        Some(prefix) => format!("{}{}{}", stamp, PREFIX_SEPARATOR, &base_name[prefix.len()..]),
        None => format!("{}{}{}", stamp, PREFIX_SEPARATOR, base_name),
    }
}
