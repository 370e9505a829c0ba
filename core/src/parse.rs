// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Utility Output Scraping
//!
//! Pure text parsers for the command-line utilities the probes invoke. The
//! text formats of `ping`, `ip` and `ipconfig` vary per platform and are not
//! stable interfaces, so everything here is deliberately lenient: a line that
//! does not match is skipped, and a value that cannot be extracted stays
//! absent. Keeping these functions free of I/O lets them be tested against
//! captured fixture text instead of live subprocesses.

use std::sync::LazyLock;

use regex::Regex;

use netcheck_common::models::measurement::{InterfaceInfo, InterfaceKind};
use netcheck_common::platform::Platform;

/// A recognizable-but-unusable piece of utility output.
///
/// Only produced by the stricter internal helpers; the public parsers degrade
/// to absence instead of surfacing this to callers.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no default route in output")]
    NoDefaultRoute,
}

// Linux iputils: "rtt min/avg/max/mdev = 12.345/23.456/34.567/1.234 ms"
// BSD / macOS:   "round-trip min/avg/max/stddev = 14.2/15.3/16.7/1.0 ms"
static UNIX_AVG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:rtt|round-trip) \S+ = [\d.]+/([\d.]+)/").unwrap());

// Windows: "Average = 23ms"
static WIN_AVG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Average = (\d+)ms").unwrap());

// Both worlds: "25% packet loss", "0.0% packet loss", "(25% loss)"
static LOSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)%\s+(?:packet\s+)?loss").unwrap());

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+\.\d+)").unwrap());

static UNIX_IFACE_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+): ([^:]+):").unwrap());

static UNIX_INET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"inet (\d+\.\d+\.\d+\.\d+)").unwrap());

/// Scrapes average latency and packet loss from raw `ping` output.
///
/// Returns `(avg_latency_ms, packet_loss_pct)`. Whether the ping *succeeded*
/// is the exit status's business, not this function's: output that matches
/// neither phrasing simply yields `None`, which downstream code treats as
/// "unknown" rather than as evidence of anything.
pub fn parse_ping_output(output: &str, platform: Platform) -> (Option<f64>, Option<f64>) {
    let avg = match platform {
        Platform::Windows => WIN_AVG_RE
            .captures(output)
            .and_then(|c| c[1].parse::<f64>().ok()),
        Platform::Unix => UNIX_AVG_RE
            .captures(output)
            .and_then(|c| c[1].parse::<f64>().ok()),
    };

    let loss = LOSS_RE
        .captures(output)
        .and_then(|c| c[1].parse::<f64>().ok());

    (avg, loss)
}

/// Scrapes the default gateway out of routing-table output.
///
/// Unix input is `ip route show default` ("default via 192.168.1.1 dev ..."),
/// Windows input is plain `ipconfig` (a "Default Gateway" line).
pub fn parse_gateway(output: &str, platform: Platform) -> Option<String> {
    match platform {
        Platform::Unix => parse_unix_gateway(output).ok(),
        Platform::Windows => output
            .lines()
            .find(|line| line.contains("Default Gateway"))
            .and_then(|line| IPV4_RE.captures(line))
            .map(|c| c[1].to_string()),
    }
}

fn parse_unix_gateway(output: &str) -> Result<String, ParseError> {
    for line in output.lines() {
        if !line.trim_start().starts_with("default") {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if let Some(via_idx) = parts.iter().position(|&p| p == "via")
            && let Some(gateway) = parts.get(via_idx + 1)
        {
            return Ok((*gateway).to_string());
        }
    }
    Err(ParseError::NoDefaultRoute)
}

/// Scrapes interface names, kinds and IPv4 addresses from interface-listing
/// output (`ip addr show` on Unix, `ipconfig /all` on Windows).
///
/// Only interfaces that resolved an IPv4 address are retained; loopback
/// addresses (127.0.0.0/8) are dropped.
pub fn parse_interfaces(output: &str, platform: Platform) -> Vec<InterfaceInfo> {
    let parsed = match platform {
        Platform::Unix => parse_ip_addr(output),
        Platform::Windows => parse_ipconfig(output),
    };
    parsed.into_iter().filter(|i| i.ip.is_some()).collect()
}

fn parse_ip_addr(output: &str) -> Vec<InterfaceInfo> {
    let mut interfaces: Vec<InterfaceInfo> = Vec::new();
    let mut current: Option<InterfaceInfo> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        if let Some(caps) = UNIX_IFACE_HEAD_RE.captures(trimmed) {
            if let Some(iface) = current.take() {
                interfaces.push(iface);
            }
            // VLAN sub-interfaces show up as "eth0.10@eth0"
            let name = caps[2].trim().split('@').next().unwrap_or("").to_string();
            let kind = InterfaceKind::from_name(&name);
            current = Some(InterfaceInfo {
                name,
                kind,
                ip: None,
            });
            continue;
        }

        if let Some(iface) = current.as_mut()
            && let Some(caps) = UNIX_INET_RE.captures(trimmed)
        {
            let ip = &caps[1];
            if !ip.starts_with("127.") {
                iface.ip = Some(ip.to_string());
            }
        }
    }

    if let Some(iface) = current {
        interfaces.push(iface);
    }

    interfaces
}

fn parse_ipconfig(output: &str) -> Vec<InterfaceInfo> {
    let mut interfaces: Vec<InterfaceInfo> = Vec::new();
    let mut current: Option<InterfaceInfo> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        // Adapter section headers, e.g. "Ethernet adapter Ethernet:" or
        // "Wireless LAN adapter Wi-Fi:"
        if trimmed.to_lowercase().contains("adapter") && trimmed.contains(':') {
            if let Some(iface) = current.take() {
                interfaces.push(iface);
            }
            let name = trimmed.split(':').next().unwrap_or("").trim().to_string();
            let kind = if trimmed.contains("Ethernet") {
                InterfaceKind::Ethernet
            } else if trimmed.contains("Wi-Fi") || trimmed.contains("Wireless") {
                InterfaceKind::WiFi
            } else if trimmed.contains("VPN") {
                InterfaceKind::Vpn
            } else {
                InterfaceKind::Unknown
            };
            current = Some(InterfaceInfo {
                name,
                kind,
                ip: None,
            });
            continue;
        }

        if let Some(iface) = current.as_mut()
            && trimmed.contains("IPv4 Address")
            && let Some(caps) = IPV4_RE.captures(trimmed)
        {
            iface.ip = Some(caps[1].to_string());
        }
    }

    if let Some(iface) = current {
        interfaces.push(iface);
    }

    interfaces
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINUX_PING: &str = "\
PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.
64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=12.8 ms
64 bytes from 8.8.8.8: icmp_seq=2 ttl=117 time=13.1 ms

--- 8.8.8.8 ping statistics ---
4 packets transmitted, 4 received, 0% packet loss, time 3004ms
rtt min/avg/max/mdev = 12.345/23.456/34.567/1.234 ms
";

    const MACOS_PING: &str = "\
PING 8.8.8.8 (8.8.8.8): 56 data bytes

--- 8.8.8.8 ping statistics ---
4 packets transmitted, 4 packets received, 0.0% packet loss
round-trip min/avg/max/stddev = 14.289/15.385/16.765/1.012 ms
";

    const WINDOWS_PING: &str = "\
Pinging 8.8.8.8 with 32 bytes of data:
Reply from 8.8.8.8: bytes=32 time=23ms TTL=117

Ping statistics for 8.8.8.8:
    Packets: Sent = 4, Received = 3, Lost = 1 (25% loss),
Approximate round trip times in milli-seconds:
    Minimum = 21ms, Maximum = 26ms, Average = 23ms
";

    const LINUX_IP_ADDR: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN
    inet 127.0.0.1/8 scope host lo
2: enp3s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP
    inet 192.168.1.42/24 brd 192.168.1.255 scope global dynamic enp3s0
3: wlan0: <NO-CARRIER,BROADCAST,MULTICAST,UP> mtu 1500 qdisc noqueue state DOWN
4: tun0: <POINTOPOINT,MULTICAST,NOARP,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UNKNOWN
    inet 10.8.0.6/24 scope global tun0
";

    const WINDOWS_IPCONFIG: &str = "\
Windows IP Configuration

Ethernet adapter Ethernet:

   Media State . . . . . . . . . . . : Media disconnected

Wireless LAN adapter Wi-Fi:

   IPv4 Address. . . . . . . . . . . : 192.168.1.17(Preferred)
   Subnet Mask . . . . . . . . . . . : 255.255.255.0
   Default Gateway . . . . . . . . . : 192.168.1.1
";

    #[test]
    fn linux_ping_avg_and_loss() {
        let (avg, loss) = parse_ping_output(LINUX_PING, Platform::Unix);
        assert_eq!(avg, Some(23.456));
        assert_eq!(loss, Some(0.0));
    }

    #[test]
    fn macos_ping_round_trip_phrasing() {
        let (avg, loss) = parse_ping_output(MACOS_PING, Platform::Unix);
        assert_eq!(avg, Some(15.385));
        assert_eq!(loss, Some(0.0));
    }

    #[test]
    fn windows_ping_average_and_loss() {
        let (avg, loss) = parse_ping_output(WINDOWS_PING, Platform::Windows);
        assert_eq!(avg, Some(23.0));
        assert_eq!(loss, Some(25.0));
    }

    #[test]
    fn unparseable_ping_output_yields_unknown() {
        let (avg, loss) = parse_ping_output("weird firmware ping banner\n", Platform::Unix);
        assert_eq!(avg, None);
        assert_eq!(loss, None);
    }

    #[test]
    fn windows_phrasing_is_not_misread_on_unix() {
        // A successful probe whose output matches neither Unix regex stays
        // unknown; it must never be treated as zero latency.
        let (avg, _) = parse_ping_output(WINDOWS_PING, Platform::Unix);
        assert_eq!(avg, None);
    }

    #[test]
    fn unix_gateway_from_default_route() {
        let out = "default via 192.168.1.1 dev enp3s0 proto dhcp metric 100\n";
        assert_eq!(
            parse_gateway(out, Platform::Unix),
            Some("192.168.1.1".to_string())
        );
    }

    #[test]
    fn unix_gateway_absent_without_default_route() {
        let out = "192.168.1.0/24 dev enp3s0 proto kernel scope link\n";
        assert_eq!(parse_gateway(out, Platform::Unix), None);
    }

    #[test]
    fn windows_gateway_line() {
        assert_eq!(
            parse_gateway(WINDOWS_IPCONFIG, Platform::Windows),
            Some("192.168.1.1".to_string())
        );
    }

    #[test]
    fn linux_interfaces_keep_addressed_skip_loopback_and_down() {
        let ifaces = parse_interfaces(LINUX_IP_ADDR, Platform::Unix);
        let names: Vec<&str> = ifaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["enp3s0", "tun0"]);
        assert_eq!(ifaces[0].kind, InterfaceKind::Ethernet);
        assert_eq!(ifaces[0].ip.as_deref(), Some("192.168.1.42"));
        assert_eq!(ifaces[1].kind, InterfaceKind::Vpn);
    }

    #[test]
    fn windows_interfaces_keep_only_addressed_adapters() {
        let ifaces = parse_interfaces(WINDOWS_IPCONFIG, Platform::Windows);
        assert_eq!(ifaces.len(), 1);
        assert_eq!(ifaces[0].name, "Wireless LAN adapter Wi-Fi");
        assert_eq!(ifaces[0].kind, InterfaceKind::WiFi);
        assert_eq!(ifaces[0].ip.as_deref(), Some("192.168.1.17"));
    }

    #[test]
    fn vlan_subinterface_names_are_stripped() {
        let out = "\
5: eth0.10@eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 state UP
    inet 10.0.10.3/24 scope global eth0.10
";
        let ifaces = parse_interfaces(out, Platform::Unix);
        assert_eq!(ifaces[0].name, "eth0.10");
    }
}
