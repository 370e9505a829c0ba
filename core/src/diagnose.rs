// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Diagnosis Engine
//!
//! Maps a [`Measurement`] onto exactly one [`StatusKind`] along with ordered
//! issues and remediation advice. This is a pure decision procedure: no I/O,
//! no clock, no hidden state, and no error path — every combination of inputs
//! classifies to something.
//!
//! ## The rule cascade
//!
//! Rules are evaluated in priority order and the **first match wins**:
//!
//! 1. No connectivity (whatever else is wrong, this dominates)
//! 2. DNS broken
//! 3. Packet loss above 20%
//! 4. Latency above 100 ms
//! 5. Healthy
//!
//! Two invariants matter and are easy to regress:
//! * Thresholds are strict: exactly 20% loss or 100 ms latency is still fine.
//! * An absent loss or latency value never triggers its rule. Unknown is not
//!   evidence of a problem.

use netcheck_common::models::diagnosis::{Diagnosis, StatusKind};
use netcheck_common::models::measurement::Measurement;
use netcheck_common::platform::Platform;

/// Packet loss above this percentage classifies as unstable.
pub const LOSS_THRESHOLD_PCT: f64 = 20.0;
/// Average latency above this many milliseconds classifies as slow.
pub const LATENCY_THRESHOLD_MS: f64 = 100.0;

/// Classifies one measurement. Pure and total; identical inputs always yield
/// an identical diagnosis.
pub fn diagnose(m: &Measurement, platform: Platform) -> Diagnosis {
    if !m.internet_connected {
        return no_connection(m);
    }

    if !m.dns_ok {
        return dns_issue(platform);
    }

    if let Some(loss) = m.primary_ping.packet_loss_pct
        && loss > LOSS_THRESHOLD_PCT
    {
        return unstable_connection(loss);
    }

    if let Some(avg) = m.primary_ping.avg_latency_ms
        && avg > LATENCY_THRESHOLD_MS
    {
        return slow_connection(avg);
    }

    Diagnosis {
        status: StatusKind::Healthy,
        issues: Vec::new(),
        advice: vec!["Internet is working normally".to_string()],
    }
}

fn no_connection(m: &Measurement) -> Diagnosis {
    let mut issues = vec!["No internet connectivity detected".to_string()];
    let mut advice = Vec::new();

    if m.local_ip.is_none() {
        issues.push("No network connection (no local IP)".to_string());
        advice.push("Check your network cable or Wi-Fi connection".to_string());
        advice.push("Restart your network adapter".to_string());
    } else if m.gateway.is_none() {
        issues.push("No default gateway detected".to_string());
        advice.push("Check router connection".to_string());
        advice.push("Restart your router".to_string());
    } else {
        issues.push("Connected to router but no internet access".to_string());
        advice.push("Check if your router has internet access".to_string());
        advice.push("Contact your ISP if router is online but no internet".to_string());
    }

    Diagnosis {
        status: StatusKind::NoConnection,
        issues,
        advice,
    }
}

fn dns_issue(platform: Platform) -> Diagnosis {
    let mut advice = vec![
        "Try changing DNS server to 8.8.8.8 or 1.1.1.1".to_string(),
        "Flush DNS cache".to_string(),
    ];
    if platform.is_windows() {
        advice.push("Run: ipconfig /flushdns".to_string());
    } else {
        advice.push("Restart network service or reboot".to_string());
    }

    Diagnosis {
        status: StatusKind::DnsIssue,
        issues: vec!["DNS not responding properly".to_string()],
        advice,
    }
}

fn unstable_connection(loss: f64) -> Diagnosis {
    Diagnosis {
        status: StatusKind::UnstableConnection,
        issues: vec![format!("High packet loss ({loss:.0}%)")],
        advice: vec![
            "Network connection is unstable".to_string(),
            "Check Wi-Fi signal strength if using wireless".to_string(),
            "Check network cables if using Ethernet".to_string(),
            "Restart router if problem persists".to_string(),
        ],
    }
}

fn slow_connection(avg: f64) -> Diagnosis {
    Diagnosis {
        status: StatusKind::SlowConnection,
        issues: vec![format!("High latency ({avg:.1}ms)")],
        advice: vec![
            "Network latency is high".to_string(),
            "Close bandwidth-intensive applications".to_string(),
            "Check if others are using network heavily".to_string(),
        ],
    }
}
