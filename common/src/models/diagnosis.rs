// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Diagnosis Model
//!
//! The classified outcome derived from a [`Measurement`]. A diagnosis is
//! never stored; it exists only between classification and rendering.
//!
//! [`Measurement`]: crate::models::measurement::Measurement

/// The mutually exclusive health categories.
///
/// Exactly one is produced per measurement. Ordering here mirrors the
/// engine's rule priority: connectivity outranks DNS, which outranks packet
/// loss, which outranks latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Healthy,
    NoConnection,
    DnsIssue,
    UnstableConnection,
    SlowConnection,
}

impl StatusKind {
    /// One-line human summary with a bracketed verdict tag.
    pub fn summary(self) -> &'static str {
        match self {
            StatusKind::Healthy => "Internet is working normally [OK]",
            StatusKind::NoConnection => "No internet connection [FAIL]",
            StatusKind::DnsIssue => "Connected but DNS not working [WARNING]",
            StatusKind::UnstableConnection => "Unstable connection (high packet loss) [WARNING]",
            StatusKind::SlowConnection => "Slow connection (high latency) [WARNING]",
        }
    }
}

/// The classified status plus ordered issues and remediation advice.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub status: StatusKind,
    pub issues: Vec<String>,
    pub advice: Vec<String>,
}

impl Diagnosis {
    pub fn is_healthy(&self) -> bool {
        self.status == StatusKind::Healthy
    }
}
