//! # CLI Argument Definitions
//!
//! Global flags select the config file and the data document; each subcommand
//! drives one mode of a session.

use clap::{Parser, Subcommand};
use dialecta::domain::kinds::ChallengeKinds;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dialecta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Spanish dialect zones: explore, filter and challenge")]
pub struct Cli {
    /// Config file (defaults to `config/dialecta.toml` when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Linguistic data document, overriding `data.path`
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the zone profile of an administrative unit
    Explore { unit: String },
    /// Resolve one feature for one administrative unit
    Resolve { unit: String, feature: String },
    /// List the units displayed for a zone (linked zones included)
    Expand { zone: String },
    /// Classify every zone and unit by a feature
    Filter { feature: String },
    /// Draw a question, select zones and grade the answer
    Challenge {
        /// Seed for a reproducible question
        #[arg(long)]
        seed: Option<u64>,
        /// Ask about this feature first
        #[arg(long)]
        feature: Option<String>,
        /// Question kinds: `feature`, `text` or `all`
        #[arg(long)]
        kinds: Option<ChallengeKinds>,
        /// Grade the "variable" class too (select with `ZONE:variable`)
        #[arg(long)]
        variable: bool,
        /// Zone to select; repeat for several
        #[arg(long = "select", value_name = "ZONE[:variable]")]
        selections: Vec<String>,
    },
    /// Draw a multiple-choice quiz question
    Quiz {
        #[arg(long)]
        seed: Option<u64>,
        /// Index of the chosen option
        #[arg(long)]
        answer: Option<usize>,
    },
}
