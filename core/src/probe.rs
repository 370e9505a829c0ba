// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # System Probe
//!
//! The production [`NetworkProbe`] implementation. Every method shells out to
//! an OS utility, opens a socket, or performs one HTTP call, and swallows its
//! own failures: a probe that cannot run reports absence, never an error.
//! This is what lets the collector assemble a partial picture of a broken
//! network instead of dying on the first symptom of the very problem it is
//! trying to diagnose.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::process::{Command, Output};
use std::str::FromStr;
use std::time::Duration;

use netcheck_common::debug;
use netcheck_common::models::measurement::{InterfaceInfo, PingResult};
use netcheck_common::platform::Platform;
use netcheck_common::probe::NetworkProbe;

use crate::parse;

/// Public IP-echo endpoint; answers with the caller's address as plain text.
const IP_ECHO_URL: &str = "https://api.ipify.org";

/// Anchor host used to infer the outbound local address.
const ANCHOR_ADDR: (&str, u16) = ("8.8.8.8", 80);

const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
enum ProbeError {
    #[error("failed to run {utility}: {source}")]
    Spawn {
        utility: &'static str,
        #[source]
        source: io::Error,
    },
}

fn query_ip_echo() -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .ok()?;

    let response = match client.get(IP_ECHO_URL).send() {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            debug!("IP echo service returned {}", r.status());
            return None;
        }
        Err(e) => {
            debug!("IP echo query failed: {e}");
            return None;
        }
    };

    let body = response.text().ok()?;
    // Refuse to display a captive portal's HTML as an "IP address".
    IpAddr::from_str(body.trim()).ok().map(|ip| ip.to_string())
}

/// Probe implementation backed by the operating system's own tooling.
pub struct SystemProbe {
    platform: Platform,
}

impl SystemProbe {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn run(&self, utility: &'static str, args: &[&str]) -> Result<Output, ProbeError> {
        Command::new(utility)
            .args(args)
            .output()
            .map_err(|source| ProbeError::Spawn { utility, source })
    }

    /// Combined stdout + stderr, lossily decoded. `ping` in particular likes
    /// to split its statistics across both streams depending on platform.
    fn combined_text(output: &Output) -> String {
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        text
    }
}

impl NetworkProbe for SystemProbe {
    fn local_ip(&self) -> Option<Ipv4Addr> {
        // Connecting a UDP socket never sends a packet; it just asks the
        // kernel which source address it would route from.
        let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
        socket.connect(ANCHOR_ADDR).ok()?;
        match socket.local_addr().ok()? {
            SocketAddr::V4(addr) => Some(*addr.ip()),
            SocketAddr::V6(_) => None,
        }
    }

    fn external_ip(&self) -> Option<String> {
        // reqwest's blocking client owns a runtime of its own and must not
        // be created or dropped on a tokio worker thread, so the whole
        // query runs on a dedicated OS thread.
        match std::thread::spawn(query_ip_echo).join() {
            Ok(ip) => ip,
            Err(_) => {
                debug!("IP echo thread panicked");
                None
            }
        }
    }

    fn gateway(&self) -> Option<String> {
        let output = match self.platform {
            Platform::Unix => self.run("ip", &["route", "show", "default"]),
            Platform::Windows => self.run("ipconfig", &[]),
        };

        match output {
            Ok(out) => parse::parse_gateway(&Self::combined_text(&out), self.platform),
            Err(e) => {
                debug!("gateway lookup failed: {e}");
                None
            }
        }
    }

    fn interfaces(&self) -> Vec<InterfaceInfo> {
        let output = match self.platform {
            Platform::Unix => self.run("ip", &["addr", "show"]),
            Platform::Windows => self.run("ipconfig", &["/all"]),
        };

        match output {
            Ok(out) => parse::parse_interfaces(&Self::combined_text(&out), self.platform),
            Err(e) => {
                debug!("interface enumeration failed: {e}");
                Vec::new()
            }
        }
    }

    fn ping(&self, host: &str, count: u32) -> PingResult {
        let count_arg = count.to_string();
        // Per-probe reply deadline so a dead host cannot hang a tick
        // indefinitely: -W is seconds on iputils, -w milliseconds on Windows.
        let args: [&str; 5] = if self.platform.is_windows() {
            ["-n", &count_arg, "-w", "2000", host]
        } else {
            ["-c", &count_arg, "-W", "2", host]
        };

        let output = match self.run("ping", &args) {
            Ok(out) => out,
            Err(e) => {
                debug!("ping {host} failed to start: {e}");
                return PingResult::failed();
            }
        };

        let text = Self::combined_text(&output);
        let (avg_latency_ms, packet_loss_pct) = parse::parse_ping_output(&text, self.platform);

        PingResult {
            success: output.status.success(),
            avg_latency_ms,
            packet_loss_pct,
        }
    }

    fn resolve(&self, domain: &str) -> bool {
        // System resolver, same path getaddrinfo takes; honors /etc/hosts
        // and the configured nameservers.
        (domain, 80)
            .to_socket_addrs()
            .map(|mut addrs| addrs.next().is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_a_hosts_file_name() {
        let probe = SystemProbe::new(Platform::Unix);
        assert!(probe.resolve("localhost"));
    }

    #[test]
    fn resolve_degrades_on_an_unresolvable_name() {
        let probe = SystemProbe::new(Platform::Unix);
        assert!(!probe.resolve(""));
    }

    // The external-IP query runs on its own OS thread because reqwest's
    // blocking client panics when created or dropped on a tokio worker.
    // Whatever the network answers, the probe must come back with a value,
    // not abort the collection.
    #[tokio::test(flavor = "multi_thread")]
    async fn external_ip_degrades_inside_a_runtime() {
        let probe = SystemProbe::new(Platform::Unix);
        let _ = probe.external_ip();
    }
}
