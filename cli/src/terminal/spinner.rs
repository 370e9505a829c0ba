// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Terminal UI & Logging
//!
//! This module wires up the global `tracing` subscriber and manages the
//! background spinner shown while a full diagnostic collects its probes.
//! Collection shells out to `ping` twice with four probes each, which takes
//! several seconds on a healthy link and much longer on a broken one; the
//! spinner is what tells the user the process isn't frozen.
//!
//! The spinner runs in a dedicated `tokio` task and cycles through phase
//! messages on a timed rotation while the (blocking) collection happens on
//! the main task.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::{IndicatifLayer, span_ext::IndicatifSpanExt};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::terminal::{colors, logging};

/// How long each phase message stays visible.
const PHASE_MS: u128 = 2500;

/// Wires up the global tracing subscriber.
///
/// The layer stack:
/// 1.  **Filter**: `RUST_LOG` or a sensible default.
/// 2.  **Formatter**: our custom `NetcheckFormatter`.
/// 3.  **Indicatif**: ensures log lines print *above* the spinner line.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new().with_progress_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]),
    );

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,netcheck=debug,mio=error"));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(logging::NetcheckFormatter)
        .with_writer(indicatif_layer.get_stderr_writer());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .with(indicatif_layer)
        .init();
}

/// The animation loop running in the background task.
async fn run_spinner_loop(span: Span, running: Arc<AtomicBool>, phases: Vec<&'static str>) {
    // 10hz: fast enough to feel responsive, slow enough to save CPU.
    let mut interval = tokio::time::interval(Duration::from_millis(100));
    let start_time = tokio::time::Instant::now();
    let mut last_text = String::new();

    while running.load(Ordering::Relaxed) {
        interval.tick().await;

        let elapsed_ms = start_time.elapsed().as_millis();
        let phase_index = ((elapsed_ms / PHASE_MS) as usize).min(phases.len() - 1);

        let colored_msg = phases[phase_index].italic().color(colors::TEXT_DEFAULT);
        let current_text = colored_msg.to_string();

        // Only redraw the terminal if the text actually changed.
        if current_text != last_text {
            span.pb_set_message(&current_text);
            last_text = current_text;
        }
    }
}

/// A RAII guard that keeps the spinner spinning.
///
/// When dropped (e.g. at the end of the `full` command's collection), it
/// signals the background task to stop.
pub struct SpinnerGuard {
    running: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<()>,
}

impl SpinnerGuard {
    /// Starts a spinner that walks through `phases`, sticking on the last.
    pub fn with_phases(span: Span, phases: Vec<&'static str>) -> Self {
        debug_assert!(!phases.is_empty());

        let running = Arc::new(AtomicBool::new(true));
        let run_clone = running.clone();

        // Spawned off the main task so the blocking collection doesn't
        // starve the animation.
        let handle = tokio::spawn(async move {
            run_spinner_loop(span, run_clone, phases).await;
        });

        Self { running, handle }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        // Signal the loop to exit and abort the handle in case it's sleeping.
        self.running.store(false, Ordering::Relaxed);
        self.handle.abort();
    }
}
