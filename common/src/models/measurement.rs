// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Measurement Model
//!
//! This module defines the [`Measurement`] snapshot, the single record every
//! diagnostic run produces and every downstream consumer reads.
//!
//! ## Key Concepts
//! * **Immutable**: a `Measurement` is built once per run and never mutated.
//!   The monitor loop builds a fresh one on every full-diagnostic tick.
//! * **Degradation over failure**: every field a probe failed to obtain is
//!   simply absent (`None`) or `false`. Absence means "unknown", never zero.
//! * **No storage**: the snapshot lives for exactly one classify-and-render
//!   cycle.

use std::fmt;
use std::net::Ipv4Addr;

/// One immutable snapshot of network-health observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The outbound-routable local address, if one could be determined.
    pub local_ip: Option<Ipv4Addr>,

    /// The public address reported by the IP-echo service, if the query
    /// succeeded.
    pub external_ip: Option<String>,

    /// The default gateway, if a default route exists.
    pub gateway: Option<String>,

    /// Interfaces holding a resolved IPv4 address, loopback excluded.
    pub interfaces: Vec<InterfaceInfo>,

    /// Result of pinging the well-known anchor host (8.8.8.8), 4 probes.
    pub primary_ping: PingResult,

    /// Result of pinging the well-known domain (google.com), 4 probes.
    pub domain_ping: PingResult,

    /// Whether resolving the well-known domain succeeded.
    pub dns_ok: bool,

    /// Overall connectivity verdict, derived from `primary_ping.success`.
    pub internet_connected: bool,
}

/// The distilled outcome of one `ping` invocation.
///
/// `avg_latency_ms` and `packet_loss_pct` stay `None` whenever the utility's
/// output could not be parsed, even if the probe itself exited successfully.
/// Consumers must treat `None` as "unknown", not as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PingResult {
    pub success: bool,
    pub avg_latency_ms: Option<f64>,
    pub packet_loss_pct: Option<f64>,
}

impl PingResult {
    /// The all-absent result substituted when the probe could not run at all.
    pub fn failed() -> Self {
        Self::default()
    }
}

/// A network interface that currently holds an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub name: String,
    pub kind: InterfaceKind,
    pub ip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Ethernet,
    WiFi,
    Vpn,
    Unknown,
}

impl InterfaceKind {
    /// Classifies an interface by its name, e.g. `enp3s0` -> Ethernet.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.starts_with("eth") || lower.starts_with("enp") || lower.starts_with("en") {
            InterfaceKind::Ethernet
        } else if lower.starts_with("wl") || lower.starts_with("wlan") {
            InterfaceKind::WiFi
        } else if lower.starts_with("tun") || lower.starts_with("wg") || lower.contains("vpn") {
            InterfaceKind::Vpn
        } else {
            InterfaceKind::Unknown
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterfaceKind::Ethernet => "Ethernet",
            InterfaceKind::WiFi => "Wi-Fi",
            InterfaceKind::Vpn => "VPN",
            InterfaceKind::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}
