use crate::core::error::MgsError;
use mgs_lib::LexError;

/// Exit codes for the mgs CLI.
/// 2 matches the code clap uses for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// General/unspecified error, including failures writing or serializing output
    GeneralError = 1,
    /// Missing or unrecognized command-line arguments
    UsageError = 2,
    /// Input file missing or unreadable
    FileOpenError = 3,
    /// I/O error while reading lines
    FileReadError = 4,
    /// I/O error releasing the input, reported after output
    FileCloseError = 5,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&LexError> for ExitCode {
    fn from(error: &LexError) -> Self {
        match error {
            LexError::FileOpen { .. } => ExitCode::FileOpenError,
            LexError::FileRead { .. } => ExitCode::FileReadError,
            LexError::FileClose { .. } => ExitCode::FileCloseError,
        }
    }
}

impl From<&MgsError> for ExitCode {
    fn from(error: &MgsError) -> Self {
        match error {
            MgsError::Lex(err) => ExitCode::from(err),
            MgsError::Usage(_) => ExitCode::UsageError,
            MgsError::Io(_) | MgsError::Json(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(mgs_error) = error.downcast_ref::<MgsError>() {
            ExitCode::from(mgs_error)
        } else if let Some(lex_error) = error.downcast_ref::<LexError>() {
            ExitCode::from(lex_error)
        } else {
            ExitCode::GeneralError
        }
    }
}
