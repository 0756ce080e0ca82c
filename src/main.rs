//! Hopeconf - a typed configuration compiler for vuepress-theme-hope blogs.
//!
//! Owns the blog's configuration as a validated `hope.toml` and emits the
//! exact nested record the external theme engine consumes.

#![allow(dead_code)]

mod cli;
mod config;
mod emit;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_config(&cli.config, name.as_deref(), *dry),
        Commands::Check => cli::check::run_check(&cli.config),
        Commands::Emit { output, pretty } => {
            cli::emit::run_emit(&cli.config, output.as_deref(), *pretty)
        }
    }
}
