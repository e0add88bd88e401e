use crate::core::error::MgsError;
use clap::ValueEnum;
use mgs_lib::Token;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything one run produced, in the shape the JSON output uses.
#[derive(Debug, Serialize)]
pub struct LexReport<'a> {
    pub file: String,
    pub lines: usize,
    pub tokens: &'a [Token],
}

/// One kind code per line, in source order. An empty stream renders as
/// nothing at all.
fn render_codes(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\n", token.kind.code()))
        .collect()
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format(&self, report: &LexReport) -> Result<String, MgsError> {
        match self.engine {
            OutputFormat::Text => Ok(render_codes(report.tokens)),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
