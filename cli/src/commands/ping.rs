use anyhow;

use netcheck_common::config::Config;
use netcheck_common::{info, warn};
use netcheck_core::collector::{Collector, PING_COUNT, PRIMARY_HOST, PROBE_DOMAIN};
use netcheck_core::probe::SystemProbe;

use crate::ncprint;
use crate::terminal::print::GLOBAL_KEY_WIDTH;
use crate::terminal::{format, print};

/// Connectivity tests only: both pings plus a DNS resolution check.
pub fn ping(cfg: &Config) -> anyhow::Result<()> {
    GLOBAL_KEY_WIDTH.set(12);
    let collector = Collector::new(Box::new(SystemProbe::new(cfg.platform)));
    let probe = collector.probe();

    print::header("connectivity test");

    info!("Pinging {PRIMARY_HOST}...");
    let primary = probe.ping(PRIMARY_HOST, PING_COUNT);

    info!("Pinging {PROBE_DOMAIN}...");
    let domain = probe.ping(PROBE_DOMAIN, PING_COUNT);

    info!("Checking DNS resolution...");
    let dns_ok = probe.resolve(PROBE_DOMAIN);

    ncprint!();
    format::ping_line(PRIMARY_HOST, &primary, true);
    format::ping_line(PROBE_DOMAIN, &domain, false);
    format::dns_line(dns_ok);

    ncprint!();
    if primary.success && dns_ok {
        format::tagged_line("STATUS", "Connectivity tests passed", true);
    } else {
        format::tagged_line("STATUS", "Connectivity tests failed", false);
        if !dns_ok {
            warn!("DNS resolution is failing");
            ncprint!();
            format::bullet_list(
                "Quick Advice",
                &[
                    "DNS is not working properly".to_string(),
                    "Try changing DNS server to 8.8.8.8".to_string(),
                ],
            );
        }
    }

    Ok(())
}
