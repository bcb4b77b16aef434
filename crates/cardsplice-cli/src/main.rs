mod cli;
mod logging;
mod splice_cmd;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::init();

    if let Err(code) = splice_cmd::run(&cli.file) {
        std::process::exit(code);
    }
}
