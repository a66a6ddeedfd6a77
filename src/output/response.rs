//! JSON mode: exactly one envelope per run, written to stdout.

use opacity_fix::error::Hint;
use opacity_fix::{Error, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Status for any run that ends in an error. A run exits 0 or this, nothing else.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        ErrorBody {
            code: err.code.as_str(),
            message: err.message.clone(),
            details: err.details.clone(),
            hints: err.hints.clone(),
        }
    }
}

/// Borrow a command result as an envelope.
pub fn envelope<T: Serialize>(result: &Result<(T, i32)>) -> Envelope<&T> {
    match result {
        Ok((data, _)) => Envelope {
            success: true,
            data: Some(data),
            error: None,
        },
        Err(err) => Envelope {
            success: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        },
    }
}

pub fn exit_status<T>(result: &Result<(T, i32)>) -> i32 {
    match result {
        Ok((_, status)) => *status,
        Err(_) => EXIT_FAILURE,
    }
}

/// Write the envelope for `result` and return the run's exit status.
///
/// A closed reader (broken pipe) is not an error.
pub fn write_envelope<T, W>(out: &mut W, result: &Result<(T, i32)>) -> Result<i32>
where
    T: Serialize,
    W: Write,
{
    let payload = serde_json::to_string_pretty(&envelope(result))
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize envelope".to_string())))?;

    match writeln!(out, "{}", payload) {
        Ok(()) => Ok(exit_status(result)),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(exit_status(result)),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        )),
    }
}

pub fn print_envelope<T: Serialize>(result: &Result<(T, i32)>) -> i32 {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_envelope(&mut handle, result).unwrap_or(EXIT_FAILURE)
}
