// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::platform::Platform;

/// Global configuration options for a diagnostic run.
///
/// This struct carries the handful of values that influence runtime behavior:
/// which OS tooling dialect the probes speak, and how often the monitor loop
/// wakes up. It is constructed once from CLI arguments and passed down by
/// reference; nothing mutates it after startup.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// The OS tooling dialect used by probes, parsers and advice text.
    ///
    /// Detected once at startup via [`Platform::detect`] and injected from
    /// there on, so lower layers never consult the environment themselves.
    pub platform: Platform,

    /// Seconds the monitor loop sleeps between connectivity ticks.
    ///
    /// Only meaningful for the `monitor` subcommand. Defaults to 10.
    pub interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::detect(),
            interval_secs: 10,
        }
    }
}
