#![allow(clippy::print_stderr, clippy::print_stdout)]

mod handlers;
mod models;

use crate::handlers::{atlas, challenge, quiz};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use dialecta::domain::config::{AppConfig, GradingMode};
use dialecta_logger::{Logger, LoggerSettings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        dialecta::load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    apply_overrides(&mut config, &cli);

    let settings = LoggerSettings::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;
    let _log = Logger::init(settings)?;

    let mut session = dialecta::init(&config).context("Critical: Linguistic data is unusable")?;

    match cli.command {
        Commands::Explore { unit } => atlas::explore(&session, &unit)?,
        Commands::Resolve { unit, feature } => atlas::resolve(session.atlas(), &unit, &feature)?,
        Commands::Expand { zone } => atlas::expand(session.atlas(), &zone)?,
        Commands::Filter { feature } => atlas::filter(&mut session, &feature)?,
        Commands::Challenge { feature, selections, .. } => {
            challenge::run(&mut session, feature.as_deref(), &selections)?;
        },
        Commands::Quiz { answer, .. } => quiz::run(&mut session, answer)?,
    }

    Ok(())
}

/// Command-line flags win over file and environment.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(data) = &cli.data {
        config.data.path.clone_from(data);
    }

    match &cli.command {
        Commands::Challenge { seed, kinds, variable, .. } => {
            if seed.is_some() {
                config.challenge.seed = *seed;
            }
            if let Some(kinds) = kinds {
                config.challenge.kinds = *kinds;
            }
            if *variable {
                config.challenge.grading = GradingMode::PresenceAndVariable;
            }
        },
        Commands::Quiz { seed: Some(seed), .. } => config.challenge.seed = Some(*seed),
        _ => {},
    }
}
