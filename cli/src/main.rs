mod cli;
mod error;
mod lookup;
mod ui;

use clap::{error::ErrorKind, Parser};
use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(err) = run() {
        match err {
            // clap renders its own message and usage line.
            CliError::Usage(err) => {
                let _ = err.print();
            }
            err => ui::error(err.to_string()),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(CliError::Usage(err)),
    };

    lookup::run(cli)
}
