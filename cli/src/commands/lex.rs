use crate::commands::shared::{OutputArgs, TokenizerArgs};
use crate::core::error::MgsError;
use crate::core::formatter::{get_formatter, LexReport, OutputFormat};
use clap::Args;
use mgs_lib::{FileSource, LineSource, Tokenizer, TokenizerOptions};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LexArgs {
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Path to the file to tokenize"
    )]
    pub file: PathBuf,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl LexArgs {
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            flush_at_end_of_line: self.tokenizer.flush_eol,
            skip_empty: self.tokenizer.skip_empty,
        }
    }
}

pub fn execute(args: &LexArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = FileSource::open(&args.file).map_err(MgsError::from)?;
    crate::debug_log!("Opened {}", source.path().display());

    let tokenizer = Tokenizer::new(args.tokenizer_options());
    crate::debug_log!("Tokenizer options: {:?}", tokenizer.options());

    let file = args.file.display().to_string();
    let stdout = io::stdout();
    lex_source(source, &file, tokenizer, &args.output.output, &mut stdout.lock())?;
    Ok(())
}

/// Tokenizes every line of `source` and writes the result to `out`.
///
/// A read error aborts before anything is written. The source is closed
/// only after the output has been flushed, so a close failure leaves the
/// printed tokens intact.
pub fn lex_source<S, W>(
    source: S,
    file: &str,
    tokenizer: Tokenizer,
    format: &OutputFormat,
    out: &mut W,
) -> Result<(), MgsError>
where
    S: LineSource,
    W: Write,
{
    let mut stream = tokenizer.tokenize_stream(source);
    let tokens = stream.by_ref().collect::<Result<Vec<_>, _>>()?;
    let lines = stream.lines_read();
    crate::debug_log!("Read {} lines, produced {} tokens", lines, tokens.len());

    let report = LexReport {
        file: file.to_string(),
        lines,
        tokens: &tokens,
    };
    let rendered = get_formatter(format).format(&report)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    stream.into_inner().close()?;
    Ok(())
}
