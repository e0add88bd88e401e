use clap::Parser;

mod commands;
mod core;

use crate::core::error::MgsError;
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "mgs")]
#[command(
    about = "Splits space-separated statements into tokens and prints each token's kind code (0 type, 1 operator, 2 value)."
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[command(flatten)]
    lex: commands::lex::LexArgs,
}

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            match e.downcast_ref::<MgsError>() {
                Some(MgsError::Usage(msg)) => eprint!("{msg}"),
                _ => eprintln!("Error: {e}"),
            }
            ExitCode::from(&e)
        }
    };
    std::process::exit(exit_code.code());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(MgsError::from(e).into()),
    };

    crate::core::logger::Logger::init(args.debug);
    commands::lex::execute(&args.lex)
}
