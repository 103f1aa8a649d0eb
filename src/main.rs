mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use app::Status;
use cli::CliArgs;
use notepad_config::Config;
use notepad_logger::LogLevel;

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    let config = Config::load().unwrap_or_default();

    let min_level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);
    notepad_logger::init(config.log_file_path().ok(), min_level);

    let mut stdout = io::stdout().lock();
    let status = app::run(args.command, &config, &mut stdout).inspect_err(|err| {
        notepad_logger::error(format!("{:#}", err));
    })?;
    match status {
        Status::Done => Ok(ExitCode::SUCCESS),
        Status::Notice(err) => {
            eprintln!("Warning: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
