// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Platform Capability
//!
//! The one place where the host operating system's identity matters: which
//! command-line syntax our probes use (`ping -c` vs `ping -n`), which text
//! format their output arrives in, and which remediation advice applies
//! (`ipconfig /flushdns` only exists on Windows).
//!
//! The platform is detected **once at startup** and carried as a plain value
//! through the [`Config`](crate::config::Config). Nothing below the CLI layer
//! probes `cfg!` or environment state at runtime, which keeps the collector's
//! parsers and the diagnosis engine deterministic under test on any host.

/// The flavor of OS tooling this process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `ipconfig`, `ping -n`, `Average = 23ms` phrasing.
    Windows,
    /// `ip addr` / `ip route`, `ping -c`, `rtt min/avg/max/mdev` phrasing.
    /// Also covers the BSDs and macOS, whose `ping` prints `round-trip`.
    Unix,
}

impl Platform {
    /// Detects the platform of the running process.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}
