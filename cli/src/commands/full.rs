use anyhow;
use colored::*;
use tracing::info_span;

use netcheck_common::config::Config;
use netcheck_core::collector::Collector;
use netcheck_core::diagnose;
use netcheck_core::probe::SystemProbe;

use crate::terminal::print::GLOBAL_KEY_WIDTH;
use crate::terminal::spinner::SpinnerGuard;
use crate::terminal::{format, print};

/// The complete diagnostic report: collect every probe, classify, render.
pub async fn full(cfg: &Config) -> anyhow::Result<()> {
    GLOBAL_KEY_WIDTH.set(12);
    let collector = Collector::new(Box::new(SystemProbe::new(cfg.platform)));

    let measurement = {
        let _guard = run_spinner();
        collector.collect()
    };

    let diagnosis = diagnose::diagnose(&measurement, cfg.platform);

    print::divider();
    print::centerln(&format!("{}", "NETCHECK REPORT".bold()));

    format::network_status(&measurement);
    format::connectivity(
        &measurement.primary_ping,
        &measurement.domain_ping,
        measurement.dns_ok,
    );
    format::diagnosis(&diagnosis);

    Ok(())
}

fn run_spinner() -> SpinnerGuard {
    let span = info_span!("full", indicatif.pb_show = true);
    let _enter = span.enter();

    SpinnerGuard::with_phases(
        span.clone(),
        vec![
            "Checking network interfaces...",
            "Testing connectivity...",
            "Pinging the probe domain...",
            "Running DNS checks...",
        ],
    )
}
