use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{normalize_args, Cli, USAGE_HINT};

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let Some(input) = cli.input_path() else {
        println!("{}", USAGE_HINT);
        return Ok(false);
    };
    if !cli.rest.is_empty() {
        log::debug!("ignoring {} trailing operand(s)", cli.rest.len());
    }
    commands::handle_process(cli, input)
}
