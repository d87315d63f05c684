//! Command line definition for the `subnet-planner` binary.
//!
//! Options fall back to `SUBNET_PLANNER_*` environment variables (a `.env`
//! file works too, `main` loads it first), then to built-in defaults.

use crate::config::{ENV_FORMAT, ENV_LOG_LEVEL};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "subnet-planner")]
#[command(author, version, about = "IPv4 subnet planner (CIDR equal split and VLSM)", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, global = true, env = ENV_FORMAT, default_value = "table")]
    pub format: OutputFormat,

    /// Log level. Also replaces the root level of a loaded log4rs file.
    #[arg(short, long, global = true, env = ENV_LOG_LEVEL, default_value = "info")]
    pub log_level: LevelFilter,

    /// Report how long the allocation took on stderr.
    #[arg(long, global = true)]
    pub timing: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Split NETWORK (a.b.c.d/n) into COUNT equal subnets.
    Cidr { network: String, count: usize },
    /// Split NETWORK into one subnet per host requirement, largest first.
    Vlsm {
        network: String,
        /// Host counts, e.g. "60,30,10" or 60 30 10.
        #[arg(required = true, num_args = 1..)]
        hosts: Vec<String>,
    },
    /// Describe a single network.
    Info { network: String },
}
