use std::process::{ExitCode, Termination};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotError {
    /// The command line could not be split into call parameters
    #[error(transparent)]
    Parse(#[from] shell_words::ParseError),
    /// There was an error in an IO operation
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// Splitting the command line produced nothing to execute
    #[error("No command to execute specified")]
    EmptyCommand,
}

impl Termination for NotError {
    /// Faults outside the inversion contract exit as a plain failure
    fn report(self) -> ExitCode {
        ExitCode::FAILURE
    }
}
