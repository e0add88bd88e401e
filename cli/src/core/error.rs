use mgs_lib::LexError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MgsError {
    Lex(LexError),
    Usage(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for MgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MgsError::Lex(err) => write!(f, "{err}"),
            MgsError::Usage(msg) => write!(f, "{msg}"),
            MgsError::Io(err) => write!(f, "IO error: {err}"),
            MgsError::Json(err) => write!(f, "Failed to serialize output: {err}"),
        }
    }
}

impl std::error::Error for MgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MgsError::Lex(err) => Some(err),
            MgsError::Io(err) => Some(err),
            MgsError::Json(err) => Some(err),
            MgsError::Usage(_) => None,
        }
    }
}

impl From<LexError> for MgsError {
    fn from(err: LexError) -> Self {
        MgsError::Lex(err)
    }
}

impl From<io::Error> for MgsError {
    fn from(err: io::Error) -> Self {
        MgsError::Io(err)
    }
}

impl From<serde_json::Error> for MgsError {
    fn from(err: serde_json::Error) -> Self {
        MgsError::Json(err)
    }
}

impl From<clap::Error> for MgsError {
    fn from(err: clap::Error) -> Self {
        MgsError::Usage(err.render().to_string())
    }
}
