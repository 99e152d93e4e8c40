use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

/// Every failure maps to the same status; the message carries the detail.
pub fn exit_code_for(_err: &Error) -> ExitCode {
    ExitCode::FAILURE
}
