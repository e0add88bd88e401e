use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LexError {
    FileOpen { path: String, source: io::Error },
    FileRead { path: String, source: io::Error },
    FileClose { path: String, source: io::Error },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::FileOpen { path, source } => {
                write!(f, "Unable to open file: {path} ({source})")
            }
            LexError::FileRead { path, source } => {
                write!(f, "Unable to read file: {path} ({source})")
            }
            LexError::FileClose { path, source } => {
                write!(f, "There was a problem closing the file: {path} ({source})")
            }
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexError::FileOpen { source, .. }
            | LexError::FileRead { source, .. }
            | LexError::FileClose { source, .. } => Some(source),
        }
    }
}
