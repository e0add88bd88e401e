use super::classify::classify;
use serde::Serialize;
use std::fmt;

/// Classification of a token.
///
/// The discriminants are the numeric codes written by the text output
/// and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Type = 0,
    Operator = 1,
    Value = 2,
}

impl Kind {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn classify(text: &str) -> Self {
        classify(text)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Type => write!(f, "Type"),
            Kind::Operator => write!(f, "Operator"),
            Kind::Value => write!(f, "Value"),
        }
    }
}

/// 1-based position of a token's first character. Columns count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextLocation {
    pub line: usize,
    pub column: usize,
}

impl TextLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}, Col: {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub location: TextLocation,
}

impl Token {
    /// Builds a token, classifying `text` against the reserved tables.
    pub fn classified(text: String, location: TextLocation) -> Self {
        Self {
            kind: Kind::classify(&text),
            text,
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({}: {}), {}]", self.kind, self.text, self.location)
    }
}
