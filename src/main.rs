use std::{io, process::ExitCode};

use clap::Parser;
use columna::{Options, interpreter::formatter::NumberStyle, run};

/// columna reads an operation such as `12+7` and prints it as a right-aligned
/// column worksheet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Shows the result with up to ten significant digits instead of
    /// truncating it to an integer.
    #[arg(short, long)]
    decimals: bool,

    /// Logs every pipeline stage to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::from_default_env().filter_level(level)
                                           .init();

    let style = if args.decimals { NumberStyle::Decimal } else { NumberStyle::Truncated };

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&mut stdin.lock(), &mut stdout.lock(), Options { style }) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Failed to write to standard output: {e}");
            ExitCode::FAILURE
        },
    }
}
