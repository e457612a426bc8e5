//! `picotools` wraps the CMake/Make build flow of Raspberry Pi Pico projects
//! and copies built UF2 images onto a Pico mounted as mass storage.

use std::process::ExitCode;

use clap::{ColorChoice, Parser};

use console::style;

mod build;
mod cli;
mod cmake;
mod command;
mod config;
mod install;
mod make;
mod project;
mod sdk;
mod upload;

use crate::build::BuildPipeline;
use crate::cli::{Cli, Command};
use crate::install::Installer;
use crate::upload::Upload;

fn run(command: Command) -> anyhow::Result<u8> {
    match command {
        Command::Build(args) => BuildPipeline::from_args(args)?.run(),
        Command::Upload(args) => Upload::from_args(args)?.run(),
        Command::AttachSdk(args) => {
            sdk::attach(&args.path)?;

            Ok(0)
        }
        Command::Install(args) => {
            Installer::new(args.prefix).run()?;

            Ok(0)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.color == ColorChoice::Never {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    } else if cli.color == ColorChoice::Always {
        console::set_colors_enabled(true);
        console::set_colors_enabled_stderr(true);
    }

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").bold().red());

            ExitCode::FAILURE
        }
    }
}
