use std::env;

use anyhow;
use colored::*;

use netcheck_common::config::Config;
use netcheck_common::models::diagnosis::StatusKind;
use netcheck_core::collector::{Collector, PROBE_DOMAIN};
use netcheck_core::probe::SystemProbe;

use crate::ncprint;
use crate::terminal::print::GLOBAL_KEY_WIDTH;
use crate::terminal::{colors, format, print};

/// Quick view: addresses, interfaces and a single-probe connectivity verdict.
pub fn status(cfg: &Config) -> anyhow::Result<()> {
    GLOBAL_KEY_WIDTH.set(12);
    let collector = Collector::new(Box::new(SystemProbe::new(cfg.platform)));

    print_local_system()?;

    print::header("network status");
    let probe = collector.probe();

    match probe.local_ip() {
        Some(ip) => print::aligned_line("Local IP", ip.to_string().color(colors::IPV4_ADDR)),
        None => format::tagged_line("Local IP", "Not detected", false),
    }
    match probe.external_ip() {
        Some(ip) => print::aligned_line("External IP", ip.color(colors::IPV4_ADDR)),
        None => format::tagged_line("External IP", "Not detected", false),
    }
    if let Some(gateway) = probe.gateway() {
        print::aligned_line("Gateway", gateway.color(colors::IPV4_ADDR));
    }

    let interfaces = probe.interfaces();
    if !interfaces.is_empty() {
        print::header("network interfaces");
        format::interfaces(&interfaces);
    }

    print::header("overall");
    let status = if !collector.is_connected() {
        StatusKind::NoConnection
    } else if !probe.resolve(PROBE_DOMAIN) {
        StatusKind::DnsIssue
    } else {
        StatusKind::Healthy
    };

    let summary = match status {
        StatusKind::Healthy => status.summary().green().bold(),
        StatusKind::NoConnection => status.summary().red().bold(),
        _ => status.summary().yellow().bold(),
    };
    print::aligned_line("OVERALL", summary);

    if status != StatusKind::Healthy {
        let advice = match status {
            StatusKind::DnsIssue => "Try changing DNS server to 8.8.8.8 or 1.1.1.1",
            _ => "Check your network connection",
        };
        ncprint!();
        format::bullet_list("Quick Advice", &[advice.to_string()]);
    }

    Ok(())
}

fn print_local_system() -> anyhow::Result<()> {
    print::header("local system");
    let hostname: String = sys_info::hostname()?;
    print::aligned_line("Hostname", hostname.color(colors::HOSTNAME));
    let release = sys_info::os_release().unwrap_or_else(|_| String::from(""));
    let os_name = sys_info::os_type()?;
    print::aligned_line("OS", format!("{} {}", os_name, release).as_str());
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        print::aligned_line("User", user);
    }
    Ok(())
}
