use colored::*;

use netcheck_common::models::diagnosis::Diagnosis;
use netcheck_common::models::measurement::{InterfaceInfo, Measurement, PingResult};
use netcheck_core::collector::{PRIMARY_HOST, PROBE_DOMAIN};

use crate::ncprint;
use crate::terminal::{colors, print};

pub fn ok_tag() -> ColoredString {
    "[OK]".green().bold()
}

pub fn fail_tag() -> ColoredString {
    "[FAIL]".red().bold()
}

pub fn alert_tag() -> ColoredString {
    "[ALERT]".yellow().bold()
}

/// A labeled result line with a trailing verdict tag, e.g.
/// `> PING......: 8.8.8.8: avg=23ms [OK]`
pub fn tagged_line(label: &str, value: &str, ok: bool) {
    let tag = if ok { ok_tag() } else { fail_tag() };
    print::aligned_line(label, format!("{} {}", value.color(colors::TEXT_DEFAULT), tag));
}

/// The NETWORK STATUS section: addresses, gateway and interfaces.
pub fn network_status(m: &Measurement) {
    print::header("network status");

    match &m.local_ip {
        Some(ip) => print::aligned_line("Local IP", ip.to_string().color(colors::IPV4_ADDR)),
        None => tagged_line("Local IP", "Not detected", false),
    }

    match &m.external_ip {
        Some(ip) => print::aligned_line("External IP", ip.to_string().color(colors::IPV4_ADDR)),
        None => tagged_line("External IP", "Not detected", false),
    }

    if let Some(gateway) = &m.gateway {
        print::aligned_line("Gateway", gateway.to_string().color(colors::IPV4_ADDR));
    }

    if !m.interfaces.is_empty() {
        ncprint!();
        interfaces(&m.interfaces);
    }
}

pub fn interfaces(interfaces: &[InterfaceInfo]) {
    for (idx, iface) in interfaces.iter().enumerate() {
        print::tree_head(idx, &iface.name);

        let mut details: Vec<(String, ColoredString)> = vec![(
            "Type".to_string(),
            iface.kind.to_string().color(colors::SECONDARY),
        )];
        if let Some(ip) = &iface.ip {
            details.push(("IPv4".to_string(), ip.to_string().color(colors::IPV4_ADDR)));
        }
        print::as_tree(details);

        if idx + 1 != interfaces.len() {
            ncprint!();
        }
    }
}

/// The CONNECTIVITY TEST section: both pings and the DNS check.
pub fn connectivity(primary: &PingResult, domain: &PingResult, dns_ok: bool) {
    print::header("connectivity test");

    ping_line(PRIMARY_HOST, primary, true);
    ping_line(PROBE_DOMAIN, domain, false);
    dns_line(dns_ok);
}

pub fn dns_line(dns_ok: bool) {
    if dns_ok {
        tagged_line("DNS", &format!("{PROBE_DOMAIN}: working"), true);
    } else {
        tagged_line("DNS", &format!("{PROBE_DOMAIN}: not responding"), false);
    }
}

pub fn ping_line(host: &str, result: &PingResult, show_loss: bool) {
    if !result.success {
        tagged_line("PING", &format!("{host}: failed"), false);
        return;
    }

    let avg_str = match result.avg_latency_ms {
        Some(avg) => format!("avg={avg:.0}ms"),
        None => "success".to_string(),
    };
    let loss_str = match result.packet_loss_pct {
        Some(loss) if show_loss && loss > 0.0 => format!(", loss={loss:.0}%"),
        _ => String::new(),
    };

    tagged_line("PING", &format!("{host}: {avg_str}{loss_str}"), true);
}

/// The DIAGNOSIS section: verdict, issues and recommended actions.
pub fn diagnosis(d: &Diagnosis) {
    print::header("diagnosis");

    if d.is_healthy() {
        tagged_line("STATUS", "Internet is working normally", true);
    } else {
        tagged_line("STATUS", "Issues detected", false);
    }

    if !d.issues.is_empty() {
        ncprint!();
        bullet_list("Issues Detected", &d.issues);
    }

    if !d.advice.is_empty() {
        ncprint!();
        bullet_list("Recommended Actions", &d.advice);
    }
}

pub fn bullet_list(title: &str, items: &[String]) {
    ncprint!(
        "{}",
        format!("[{title}]").color(colors::PRIMARY)
    );
    for item in items {
        ncprint!(
            "  {} {}",
            "-".color(colors::SEPARATOR),
            item.color(colors::TEXT_DEFAULT)
        );
    }
}
