// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::Ipv4Addr;

use crate::models::measurement::{InterfaceInfo, PingResult};

/// Defines the contract for running external network probes.
///
/// Each method is one independent check against the outside world (a
/// subprocess, a socket, an HTTP call). Implementations must be tolerant of
/// failure in every probe: a check that cannot run or whose output cannot be
/// understood returns its absent/false value instead of an error. The
/// collector composes these into a [`Measurement`] without ever aborting
/// mid-collection.
///
/// [`Measurement`]: crate::models::measurement::Measurement
pub trait NetworkProbe {
    /// The local address the OS would route outbound traffic from.
    fn local_ip(&self) -> Option<Ipv4Addr>;

    /// The public address as seen by an external IP-echo service.
    fn external_ip(&self) -> Option<String>;

    /// The default gateway, if a default route exists.
    fn gateway(&self) -> Option<String>;

    /// Interfaces holding an IPv4 address, loopback excluded.
    fn interfaces(&self) -> Vec<InterfaceInfo>;

    /// Pings `host` with `count` probes via the OS ping utility.
    fn ping(&self, host: &str, count: u32) -> PingResult;

    /// Whether the system resolver can resolve `domain`.
    fn resolve(&self, domain: &str) -> bool;
}
