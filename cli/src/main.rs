// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # NetCheck CLI Entry Point
//!
//! The binary entry point for NetCheck.
//!
//! This module bootstraps the application runtime and manages the global
//! lifecycle of the process. It isolates the command-line interface layer
//! from the core diagnostic logic.
//!
//! ## Responsibilities
//!
//! 1.  **Runtime Initialization**: The `#[tokio::main]` attribute sets up the
//!     async runtime used for interrupt handling and the monitor loop's
//!     inter-tick sleeps. The probes themselves stay blocking.
//! 2.  **Global State Setup**: Initializes the `tracing` subscriber that all
//!     terminal output flows through.
//! 3.  **Configuration Mapping**: Converts parsed CLI arguments into the
//!     internal `Config` value handed to the core libraries.
//! 4.  **Command Dispatch**: Routes execution to the appropriate module in
//!     `commands/`.
//! 5.  **Error Boundary**: Any error propagated up from a subcommand is
//!     caught here, printed, and converted into a non-zero `ExitCode`. An
//!     interrupt is a normal termination path and exits zero.

mod commands;
mod terminal;

use std::process::ExitCode;

use netcheck_common::{config::Config, error, success};

use crate::{
    commands::{CommandLine, Commands, full, monitor, ping, status},
    terminal::{print, spinner},
};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    spinner::init_logging();

    let cfg = Config::from(&commands);

    print::banner();

    // One long-lived watcher so an interrupt is honored even while a
    // blocking probe is in flight. An interrupt is a success path.
    let monitoring = matches!(commands.command, Commands::Monitor { .. });
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            crate::ncprint!();
            if monitoring {
                success!("Monitoring stopped by user");
            } else {
                crate::ncprint!("Operation cancelled by user");
            }
            print::end_of_program();
            std::process::exit(0);
        }
    });

    let result = match &commands.command {
        Commands::Status => status::status(&cfg),
        Commands::Ping => ping::ping(&cfg),
        Commands::Full => full::full(&cfg).await,
        Commands::Monitor { .. } => monitor::monitor(&cfg).await,
    };

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An unexpected error occurred: {e}");
            ExitCode::FAILURE
        }
    };

    print::end_of_program();

    exit_code
}
