// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Measurement Collector
//!
//! Implements the "gather one snapshot" use case.
//!
//! This service acts as a facade over the individual probes: it runs them in
//! a fixed order, assembles the [`Measurement`] record, and derives the
//! overall connectivity verdict. It holds no state of its own and performs no
//! classification; that is the diagnosis engine's job.

use netcheck_common::models::measurement::Measurement;
use netcheck_common::probe::NetworkProbe;

/// Well-known reachable host used for connectivity probes.
pub const PRIMARY_HOST: &str = "8.8.8.8";
/// Well-known domain used for the domain ping and the DNS check.
pub const PROBE_DOMAIN: &str = "google.com";
/// Probes per full-diagnostic ping.
pub const PING_COUNT: u32 = 4;

pub struct Collector {
    probe: Box<dyn NetworkProbe>,
}

impl Collector {
    pub fn new(probe: Box<dyn NetworkProbe>) -> Self {
        Self { probe }
    }

    /// Gathers a complete snapshot. Individual probe failures degrade their
    /// field; collection itself cannot fail.
    pub fn collect(&self) -> Measurement {
        let local_ip = self.probe.local_ip();
        let external_ip = self.probe.external_ip();
        let gateway = self.probe.gateway();
        let interfaces = self.probe.interfaces();

        let primary_ping = self.probe.ping(PRIMARY_HOST, PING_COUNT);
        let domain_ping = self.probe.ping(PROBE_DOMAIN, PING_COUNT);
        let dns_ok = self.probe.resolve(PROBE_DOMAIN);

        let internet_connected = primary_ping.success;

        Measurement {
            local_ip,
            external_ip,
            gateway,
            interfaces,
            primary_ping,
            domain_ping,
            dns_ok,
            internet_connected,
        }
    }

    /// Cheap connectivity check: one probe against the anchor host. Used by
    /// the monitor loop so idle ticks stay inexpensive.
    pub fn is_connected(&self) -> bool {
        self.probe.ping(PRIMARY_HOST, 1).success
    }

    pub fn probe(&self) -> &dyn NetworkProbe {
        self.probe.as_ref()
    }
}
