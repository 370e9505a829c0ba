// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Monitor State Machine
//!
//! Edge detection over repeated cheap connectivity checks. Each call to
//! [`Monitor::tick`] performs one single-probe ping and classifies the
//! observation against the previous tick:
//!
//! * same level as before → heartbeat, nothing expensive happens
//! * first tick ever → initial report (with a full diagnostic if down)
//! * up → down → LOST, with a full diagnostic attached to explain why
//! * down → up → RESTORED, without a diagnostic (the successful ping
//!   is evidence enough)
//!
//! The only state carried across ticks is the previous connectivity level.
//! Sleeping between ticks and rendering the events is the caller's business,
//! which keeps this machine synchronous and trivially testable.

use netcheck_common::models::diagnosis::Diagnosis;
use netcheck_common::models::measurement::Measurement;
use netcheck_common::platform::Platform;

use crate::collector::Collector;
use crate::diagnose;

/// What one tick observed, already classified against the previous tick.
#[derive(Debug)]
pub enum TickEvent {
    /// The very first observation. Carries a full report iff we came up
    /// disconnected, so the user immediately learns why.
    Initial {
        connected: bool,
        report: Option<(Measurement, Diagnosis)>,
    },
    /// Connectivity level unchanged since the last tick.
    Heartbeat { connected: bool },
    /// Up → Down edge. A full diagnostic explains the outage.
    Lost {
        measurement: Measurement,
        diagnosis: Diagnosis,
    },
    /// Down → Up edge.
    Restored,
}

pub struct Monitor {
    collector: Collector,
    platform: Platform,
    previous_connected: Option<bool>,
}

impl Monitor {
    pub fn new(collector: Collector, platform: Platform) -> Self {
        Self {
            collector,
            platform,
            previous_connected: None,
        }
    }

    /// Runs one poll cycle and returns the classified observation.
    pub fn tick(&mut self) -> TickEvent {
        let connected = self.collector.is_connected();

        let event = match self.previous_connected {
            None => {
                let report = (!connected).then(|| self.full_diagnostic());
                TickEvent::Initial { connected, report }
            }
            Some(previous) if previous == connected => TickEvent::Heartbeat { connected },
            Some(true) => {
                let (measurement, diagnosis) = self.full_diagnostic();
                TickEvent::Lost {
                    measurement,
                    diagnosis,
                }
            }
            Some(false) => TickEvent::Restored,
        };

        self.previous_connected = Some(connected);
        event
    }

    fn full_diagnostic(&self) -> (Measurement, Diagnosis) {
        let measurement = self.collector.collect();
        let diagnosis = diagnose::diagnose(&measurement, self.platform);
        (measurement, diagnosis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::net::Ipv4Addr;

    use netcheck_common::models::diagnosis::StatusKind;
    use netcheck_common::models::measurement::{InterfaceInfo, PingResult};
    use netcheck_common::probe::NetworkProbe;

    /// Probe whose single-probe pings follow a fixed script. Full-diagnostic
    /// pings (count > 1) always fail, mimicking an outage under inspection.
    struct ScriptedProbe {
        script: RefCell<VecDeque<bool>>,
    }

    impl ScriptedProbe {
        fn new(script: &[bool]) -> Self {
            Self {
                script: RefCell::new(script.iter().copied().collect()),
            }
        }
    }

    impl NetworkProbe for ScriptedProbe {
        fn local_ip(&self) -> Option<Ipv4Addr> {
            Some(Ipv4Addr::new(192, 168, 1, 5))
        }
        fn external_ip(&self) -> Option<String> {
            None
        }
        fn gateway(&self) -> Option<String> {
            Some("192.168.1.1".to_string())
        }
        fn interfaces(&self) -> Vec<InterfaceInfo> {
            Vec::new()
        }
        fn ping(&self, _host: &str, count: u32) -> PingResult {
            if count == 1 {
                let up = self.script.borrow_mut().pop_front().unwrap_or(false);
                PingResult {
                    success: up,
                    avg_latency_ms: up.then_some(10.0),
                    packet_loss_pct: up.then_some(0.0),
                }
            } else {
                PingResult::failed()
            }
        }
        fn resolve(&self, _domain: &str) -> bool {
            false
        }
    }

    fn monitor_with_script(script: &[bool]) -> Monitor {
        let collector = Collector::new(Box::new(ScriptedProbe::new(script)));
        Monitor::new(collector, Platform::Unix)
    }

    #[test]
    fn flap_sequence_is_edge_triggered() {
        let mut monitor = monitor_with_script(&[true, true, false, false, true]);

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

        match monitor.tick() {
            TickEvent::Lost { diagnosis, .. } => {
                assert_eq!(diagnosis.status, StatusKind::NoConnection);
            }
            other => panic!("expected Lost, got {other:?}"),
        }

        assert!(matches!(
            monitor.tick(),
            TickEvent::Heartbeat { connected: false }
        ));
        assert!(matches!(monitor.tick(), TickEvent::Restored));
    }

    #[test]
    fn initial_tick_while_down_carries_a_report() {
        let mut monitor = monitor_with_script(&[false]);

        match monitor.tick() {
            TickEvent::Initial {
                connected: false,
                report: Some((_, diagnosis)),
            } => {
                assert_eq!(diagnosis.status, StatusKind::NoConnection);
                // Local IP and gateway exist, so the outage is past the router.
                assert!(
                    diagnosis
                        .issues
                        .contains(&"Connected to router but no internet access".to_string())
                );
            }
            other => panic!("expected Initial-down with report, got {other:?}"),
        }
    }

    #[test]
    fn restore_does_not_rerun_diagnostics() {
        let mut monitor = monitor_with_script(&[false, true]);
        let _ = monitor.tick();

        // A Restored event carries no measurement; the successful ping is
        // sufficient evidence on its own.
        assert!(matches!(monitor.tick(), TickEvent::Restored));
    }
}
