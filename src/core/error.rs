use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    RootDirectoryMissing,

    FileIoError,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::RootDirectoryMissing => "migrate.root_missing",

            ErrorCode::FileIoError => "file.io_error",

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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootDirectoryMissingDetails {
    pub root: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileIoErrorDetails {
    pub path: String,
    pub operation: String,
    pub error: String,
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
        value: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn root_directory_missing(root: impl Into<String>) -> Self {
        let root = root.into();
        let details = serde_json::to_value(RootDirectoryMissingDetails { root: root.clone() })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::RootDirectoryMissing,
            format!("Directory {} not found", root),
            details,
        )
        .with_hint("Run this from the root of the Flutter project")
    }

    /// Read, decode or write failure on a single candidate file.
    ///
    /// The message is the underlying I/O error text so per-file report lines
    /// can show it verbatim.
    pub fn file_io(
        path: impl Into<String>,
        operation: impl Into<String>,
        err: &std::io::Error,
    ) -> Self {
        let error = err.to_string();
        let details = serde_json::to_value(FileIoErrorDetails {
            path: path.into(),
            operation: operation.into(),
            error: error.clone(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::FileIoError, error, details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_directory_missing_names_the_directory() {
        let err = Error::root_directory_missing("lib/");

        assert_eq!(err.code.as_str(), "migrate.root_missing");
        assert_eq!(err.message, "Directory lib/ not found");
        assert_eq!(err.details["root"], "lib/");
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn file_io_uses_underlying_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::file_io("lib/a.dart", "read", &io);

        assert_eq!(err.code, ErrorCode::FileIoError);
        assert_eq!(err.to_string(), "access denied");
        assert_eq!(err.details["path"], "lib/a.dart");
        assert_eq!(err.details["operation"], "read");
    }

    #[test]
    fn invalid_argument_omits_missing_value() {
        let err = Error::validation_invalid_argument("extension", "must not be empty", None);

        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(err.details.get("value").is_none());
        assert_eq!(err.details["field"], "extension");
    }
}
