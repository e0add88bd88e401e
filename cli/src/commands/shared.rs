use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text (one kind code per line) or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct TokenizerArgs {
    #[arg(
        long = "flush-eol",
        help = "Emit the last token of a line even when no space follows it"
    )]
    pub flush_eol: bool,

    #[arg(
        long = "skip-empty",
        help = "Drop the empty tokens produced by consecutive spaces"
    )]
    pub skip_empty: bool,
}
