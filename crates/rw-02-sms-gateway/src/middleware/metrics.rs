//! Webhook counters exposed on `/metrics`.

use crate::domain::SmsOutcome;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// SMS gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    pub sms_received: AtomicU64,
    pub decoded: AtomicU64,
    pub rejected: AtomicU64,
    pub malformed: AtomicU64,
}

/// Point-in-time copy of [`GatewayMetrics`].
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub sms_received: u64,
    pub decoded: u64,
    pub rejected: u64,
    pub malformed: u64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed webhook
    pub fn record_outcome(&self, outcome: &SmsOutcome) {
        self.sms_received.fetch_add(1, Ordering::Relaxed);

        let counter = match outcome {
            SmsOutcome::Decoded(_) => &self.decoded,
            SmsOutcome::Rejected => &self.rejected,
            SmsOutcome::Malformed => &self.malformed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sms_received: self.sms_received.load(Ordering::Relaxed),
            decoded: self.decoded.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
        }
    }
}
