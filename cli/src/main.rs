#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use crate::app_config::AppConfig;
use args::{CliArgs, Command, RecipeCommand};
use clap::Parser;
use commands::{
    completions::completions_cmd, config::config_cmd, filters::filters_cmd, group::group_cmd,
    init::init_cmd,
    recipe::recipe_cmd,
};
use profile::{get_profile_config_path, get_profile_name, Profile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app_config;
mod args;
mod commands;
mod db;
mod formatters;
mod profile;
mod remote;
mod utils;

#[cfg(test)]
mod test;

fn main() {
    setup_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let profile_name = get_profile_name(&args.config.profile);
    let profile_path = get_profile_config_path(&profile_name);

    if let Some(command) = args.command {
        let profile = Profile::from_path(&profile_path)?;
        let config = AppConfig::from_profile(&profile_name, &profile_path, profile.as_ref());

        match command {
            Command::Config => config_cmd(config)?,
            Command::Init(args) => init_cmd(&config, &profile_path, args)?,
            Command::Recipe(subcommand) => recipe_cmd(&config, subcommand)?,
            Command::Ls(args) => recipe_cmd(&config, RecipeCommand::List(args))?,
            Command::Group(subcommand) => {
                group_cmd(std::path::Path::new(&config.db_path), subcommand)?
            }
            Command::Filters(subcommand) => filters_cmd(&config, subcommand)?,
            Command::Completions { shell } => completions_cmd(shell),
        }
    }

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("LARDER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
