// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for the application's CLI schema. Execution
//! logic for each command lives in its own submodule; the argument, flag and
//! help-text definitions are centralized here.
//!
//! The `From<&CommandLine> for Config` implementation decouples the external
//! interface (CLI flags) from the internal application state (`Config`), so
//! the core libraries stay agnostic of the user interface layer.

pub mod full;
pub mod monitor;
pub mod ping;
pub mod status;

use clap::{Parser, Subcommand};
use netcheck_common::{config::Config, platform::Platform};

#[derive(Parser)]
#[command(name = "netcheck")]
#[command(about = "Terminal network diagnostic tool.")]
#[command(after_help = "\
Examples:
  netcheck status          Show basic network status
  netcheck ping            Run ping and DNS tests
  netcheck full            Run complete diagnostic report
  netcheck monitor         Start continuous monitoring (10s interval)
  netcheck monitor -i 30   Start monitoring with 30s interval")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show basic network status
    #[command(alias = "s")]
    Status,

    /// Run ping and DNS connectivity tests
    #[command(alias = "p")]
    Ping,

    /// Run the complete diagnostic report
    #[command(alias = "f")]
    Full,

    /// Continuously monitor connectivity and announce transitions
    #[command(alias = "m")]
    Monitor {
        /// Seconds between connectivity checks
        #[arg(short = 'i', long = "interval", default_value_t = 10)]
        interval: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        let interval_secs = match cmd.command {
            Commands::Monitor { interval } => interval,
            _ => 10,
        };

        Self {
            platform: Platform::detect(),
            interval_secs,
        }
    }
}
