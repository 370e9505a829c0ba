// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

use netcheck_common::models::diagnosis::StatusKind;
use netcheck_common::models::measurement::PingResult;
use netcheck_common::platform::Platform;
use netcheck_core::collector::Collector;
use netcheck_core::diagnose;
use netcheck_core::monitor::{Monitor, TickEvent};

use crate::utils::ScriptedProbe;

/// One collect cycle pings both the anchor host and the probe domain.
const FULL_PINGS_PER_CYCLE: u32 = 2;

#[test]
fn flap_runs_exactly_one_full_diagnostic() {
    let probe = ScriptedProbe::with_script(&[true, true, false, false, true]);
    let counter = probe.full_ping_counter();
    let mut monitor = Monitor::new(Collector::new(Box::new(probe)), Platform::Unix);

    assert!(matches!(
        monitor.tick(),
        TickEvent::Initial {
            connected: true,
            report: None
        }
    ));
    assert!(matches!(
        monitor.tick(),
        TickEvent::Heartbeat { connected: true }
    ));
    assert!(matches!(monitor.tick(), TickEvent::Lost { .. }));
    assert!(matches!(
        monitor.tick(),
        TickEvent::Heartbeat { connected: false }
    ));
    assert!(matches!(monitor.tick(), TickEvent::Restored));

    // Only the up -> down edge paid for a full diagnostic; the steady
    // down tick and the restore did not.
    assert_eq!(counter.get(), FULL_PINGS_PER_CYCLE);
}

#[test]
fn lost_event_explains_a_router_side_outage() {
    let probe = ScriptedProbe::with_script(&[true, false]);
    let mut monitor = Monitor::new(Collector::new(Box::new(probe)), Platform::Unix);

    let _ = monitor.tick();
    match monitor.tick() {
        TickEvent::Lost {
            measurement,
            diagnosis,
        } => {
            assert!(!measurement.internet_connected);
            assert_eq!(diagnosis.status, StatusKind::NoConnection);
            assert_eq!(diagnosis.issues[0], "No internet connectivity detected");
            // Local IP and gateway were both present, so the fault sits
            // beyond the router.
            assert!(
                diagnosis
                    .issues
                    .contains(&"Connected to router but no internet access".to_string())
            );
        }
        other => panic!("expected Lost, got {other:?}"),
    }
}

#[test]
fn initial_down_tick_carries_a_report_and_counts_one_cycle() {
    let probe = ScriptedProbe::with_script(&[false]);
    let counter = probe.full_ping_counter();
    let mut monitor = Monitor::new(Collector::new(Box::new(probe)), Platform::Unix);

    match monitor.tick() {
        TickEvent::Initial {
            connected: false,
            report: Some((_, diagnosis)),
        } => assert_eq!(diagnosis.status, StatusKind::NoConnection),
        other => panic!("expected Initial-down with report, got {other:?}"),
    }
    assert_eq!(counter.get(), FULL_PINGS_PER_CYCLE);
}

#[test]
fn collect_then_diagnose_flags_dns_when_only_resolution_fails() {
    let mut probe = ScriptedProbe::with_script(&[]);
    probe.full_ping = PingResult {
        success: true,
        avg_latency_ms: Some(14.0),
        packet_loss_pct: Some(0.0),
    };
    probe.dns_ok = false;

    let collector = Collector::new(Box::new(probe));
    let measurement = collector.collect();
    assert!(measurement.internet_connected);
    assert!(!measurement.dns_ok);

    let diagnosis = diagnose::diagnose(&measurement, Platform::Unix);
    assert_eq!(diagnosis.status, StatusKind::DnsIssue);
    assert!(
        diagnosis
            .advice
            .contains(&"Restart network service or reboot".to_string())
    );
}

#[test]
fn collect_then_diagnose_healthy_end_to_end() {
    let mut probe = ScriptedProbe::with_script(&[]);
    probe.full_ping = PingResult {
        success: true,
        avg_latency_ms: Some(22.5),
        packet_loss_pct: Some(0.0),
    };
    probe.dns_ok = true;

    let collector = Collector::new(Box::new(probe));
    let diagnosis = diagnose::diagnose(&collector.collect(), Platform::Unix);

    assert!(diagnosis.is_healthy());
    assert_eq!(diagnosis.advice, vec!["Internet is working normally"]);
}
