use std::time::Duration;

use anyhow;
use colored::*;

use netcheck_common::config::Config;
use netcheck_core::collector::Collector;
use netcheck_core::monitor::{Monitor, TickEvent};
use netcheck_core::probe::SystemProbe;

use crate::ncprint;
use crate::terminal::{colors, format, print};

/// Continuous monitoring: poll cheaply, announce transitions loudly.
pub async fn monitor(cfg: &Config) -> anyhow::Result<()> {
    print::header("network monitor");
    print::print_status(format!(
        "Checking connectivity every {} seconds",
        cfg.interval_secs
    ));
    print::print_status("Press Ctrl+C to stop");
    ncprint!();

    let collector = Collector::new(Box::new(SystemProbe::new(cfg.platform)));
    let mut monitor = Monitor::new(collector, cfg.platform);
    let interval = Duration::from_secs(cfg.interval_secs);

    // Interrupts are handled by the process-wide watcher, which fires even
    // while a tick is blocked inside a probe.
    loop {
        let event = monitor.tick();
        render_event(&event);
        tokio::time::sleep(interval).await;
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn stamp() -> ColoredString {
    format!("[{}]", timestamp()).color(colors::SEPARATOR)
}

fn render_event(event: &TickEvent) {
    match event {
        TickEvent::Initial { connected, report } => {
            let (tag, level) = verdict(*connected);
            ncprint!("{} {} Initial check: Internet is {}", stamp(), tag, level);

            if let Some((_, diagnosis)) = report {
                ncprint!();
                format::bullet_list("Issues Detected", &diagnosis.issues);
                ncprint!();
                format::bullet_list("Recommended Actions", &diagnosis.advice);
                ncprint!();
            }
        }
        TickEvent::Heartbeat { connected } => {
            let (tag, level) = verdict(*connected);
            ncprint!("{} {} Connection status: {}", stamp(), tag, level);
        }
        TickEvent::Lost { diagnosis, .. } => {
            ncprint!();
            print::divider();
            ncprint!(
                "{} {} Internet connection LOST {}",
                stamp(),
                format::alert_tag(),
                format::fail_tag()
            );

            if !diagnosis.issues.is_empty() {
                ncprint!();
                format::bullet_list("Reason", &diagnosis.issues);
            }
            if !diagnosis.advice.is_empty() {
                ncprint!();
                format::bullet_list("Advice", &diagnosis.advice);
            }

            print::divider();
            ncprint!();
        }
        TickEvent::Restored => {
            ncprint!();
            print::divider();
            ncprint!(
                "{} {} Internet connection RESTORED {}",
                stamp(),
                format::alert_tag(),
                format::ok_tag()
            );
            print::divider();
            ncprint!();
        }
    }
}

fn verdict(connected: bool) -> (ColoredString, ColoredString) {
    if connected {
        (format::ok_tag(), "UP".green().bold())
    } else {
        (format::fail_tag(), "DOWN".red().bold())
    }
}
