//! Fixed defaults shared by the library and the CLI.

/// `chrono` layout for the timestamp prefix: `YYYYMMDDThhmmss`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Joins the timestamp prefix to the rest of the file name.
pub const PREFIX_SEPARATOR: char = '_';

/// Shape of a timestamp prefix already present on a file name.
/// ASCII digits only.
pub const TIMESTAMP_PREFIX_PATTERN: &str = r"^[0-9]{8}T[0-9]{6}_";

/// The CLI always works from the current directory.
pub const DEFAULT_ROOT: &str = ".";

/// Answer accepted as "yes" at the confirmation prompt (case-insensitive).
pub const AFFIRMATIVE_ANSWER: &str = "y";
