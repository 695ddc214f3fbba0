use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    PatternInvalid,

    TraversalFailed,

    ConsoleReadFailed,

    RenameFailed,
    RenameTargetExists,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::PatternInvalid => "pattern.invalid",

            ErrorCode::TraversalFailed => "traversal.failed",

            ErrorCode::ConsoleReadFailed => "console.read_failed",

            ErrorCode::RenameFailed => "rename.failed",
            ErrorCode::RenameTargetExists => "rename.target_exists",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInvalidDetails {
    pub pattern: String,
    pub error: String,
    pub position: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalFailedDetails {
    pub path: String,
    pub operation: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleReadFailedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFailedDetails {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            format!("Invalid argument: {}", problem),
            details,
        )
    }

    pub fn pattern_invalid(pattern: impl Into<String>, err: &glob::PatternError) -> Self {
        let pattern = pattern.into();
        let details = to_details(PatternInvalidDetails {
            pattern: pattern.clone(),
            error: err.msg.to_string(),
            position: err.pos,
        });

        Self::new(
            ErrorCode::PatternInvalid,
            format!("syntax error in pattern '{}': {}", pattern, err.msg),
            details,
        )
        .with_hint("Supported wildcards: '*', '?', '[abc]', '[a-z]', '[!abc]'")
    }

    pub fn traversal_failed(path: &Path, operation: &str, err: &std::io::Error) -> Self {
        let details = to_details(TraversalFailedDetails {
            path: path.display().to_string(),
            operation: operation.to_string(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::TraversalFailed,
            format!("{} {}: {}", operation, path.display(), err),
            details,
        )
    }

    /// Standard input failed or was closed before an answer arrived.
    pub fn console_read_failed(error: Option<String>) -> Self {
        let message = match &error {
            Some(e) => format!("Failed to read input: {}", e),
            None => "Failed to read input: standard input is closed".to_string(),
        };
        let details = to_details(ConsoleReadFailedDetails { error });

        Self::new(ErrorCode::ConsoleReadFailed, message, details)
            .with_hint("Use --force to rename without prompting, or --dry-run to preview")
    }

    pub fn rename_failed(from: &Path, to: &Path, err: &std::io::Error) -> Self {
        let details = to_details(RenameFailedDetails {
            from: from.display().to_string(),
            to: to.display().to_string(),
            error: Some(err.to_string()),
        });

        Self::new(
            ErrorCode::RenameFailed,
            format!("rename {} {}: {}", from.display(), to.display(), err),
            details,
        )
    }

    pub fn rename_target_exists(from: &Path, to: &Path) -> Self {
        let details = to_details(RenameFailedDetails {
            from: from.display().to_string(),
            to: to.display().to_string(),
            error: None,
        });

        Self::new(
            ErrorCode::RenameTargetExists,
            format!(
                "rename {} {}: target already exists",
                from.display(),
                to.display()
            ),
            details,
        )
        .with_hint("Move or remove the existing file, then run again")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
