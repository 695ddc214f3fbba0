// Public modules
pub mod console;
pub mod defaults;
pub mod error;
pub mod output;
pub mod pattern;
pub mod renamer;
pub mod stamp;
pub mod walk;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{FileOutcome, Outcome, RunReport};
pub use renamer::{RenameMode, RenamePlan, RenameRequest, Renamer};
