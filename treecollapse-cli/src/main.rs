use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use treecollapse_cli::{run, Cli, Page};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match File::create(&cli.log) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {e}", cli.log.display()),
    }

    let result = Page::load(&cli.page)
        .and_then(|page| run(page, cli.context(), &cli.clicks, cli.ellipsize));

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
