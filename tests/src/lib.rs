// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod monitoring;

pub mod utils {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::net::Ipv4Addr;
    use std::rc::Rc;

    use netcheck_common::models::measurement::{InterfaceInfo, InterfaceKind, PingResult};
    use netcheck_common::probe::NetworkProbe;

    /// A scripted probe standing in for the operating system.
    ///
    /// Single-probe pings (the monitor's cheap connectivity check) consume
    /// the `connectivity` script in order; multi-probe pings all return
    /// `full_ping`. The shared counter records how many multi-probe pings
    /// ran, so tests can assert that full diagnostics are edge-triggered
    /// even after the probe has been moved into a collector.
    pub struct ScriptedProbe {
        pub connectivity: RefCell<VecDeque<bool>>,
        pub full_ping: PingResult,
        pub local_ip: Option<Ipv4Addr>,
        pub gateway: Option<String>,
        pub dns_ok: bool,
        full_pings_run: Rc<Cell<u32>>,
    }

    impl ScriptedProbe {
        pub fn with_script(script: &[bool]) -> Self {
            Self {
                connectivity: RefCell::new(script.iter().copied().collect()),
                full_ping: PingResult::failed(),
                local_ip: Some(Ipv4Addr::new(192, 168, 1, 30)),
                gateway: Some("192.168.1.1".to_string()),
                dns_ok: false,
                full_pings_run: Rc::new(Cell::new(0)),
            }
        }

        /// Keep a handle on the counter before boxing the probe away.
        /// One full collect cycle runs two multi-probe pings.
        pub fn full_ping_counter(&self) -> Rc<Cell<u32>> {
            self.full_pings_run.clone()
        }
    }

    impl NetworkProbe for ScriptedProbe {
        fn local_ip(&self) -> Option<Ipv4Addr> {
            self.local_ip
        }

        fn external_ip(&self) -> Option<String> {
            None
        }

        fn gateway(&self) -> Option<String> {
            self.gateway.clone()
        }

        fn interfaces(&self) -> Vec<InterfaceInfo> {
            vec![InterfaceInfo {
                name: "enp3s0".to_string(),
                kind: InterfaceKind::Ethernet,
                ip: Some("192.168.1.30".to_string()),
            }]
        }

        fn ping(&self, _host: &str, count: u32) -> PingResult {
            if count == 1 {
                let up = self.connectivity.borrow_mut().pop_front().unwrap_or(false);
                return PingResult {
                    success: up,
                    avg_latency_ms: up.then_some(9.0),
                    packet_loss_pct: up.then_some(0.0),
                };
            }

            self.full_pings_run.set(self.full_pings_run.get() + 1);
            self.full_ping
        }

        fn resolve(&self, _domain: &str) -> bool {
            self.dns_ok
        }
    }
}
