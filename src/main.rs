mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod git;
mod integrations;
mod preflight;
mod process;
mod remote;
mod ui;
mod workspace;


use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{resolve_visibility, Cli};
use commands::cmd_create;
use config::Config;
use process::SystemRunner;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Unrecognized flags and conflicting visibility flags land here.
            eprint!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            // --help / --version.
            print!("{err}");
            return Ok(());
        }
    };

    let name = match cli.name {
        Some(name) => name,
        None => {
            // A missing name is a usage problem, not a failure: help goes to
            // stdout, nothing to stderr, but the exit code is still non-zero.
            let mut command = Cli::command();
            let _ = command.print_help();
            std::process::exit(1);
        }
    };

    let config = Config::load()?;
    let visibility = resolve_visibility(cli.public, cli.private);
    cmd_create(&config, &SystemRunner, &name, visibility)
}
