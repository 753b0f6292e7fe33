//! Per-urgency feed counts for the dashboard header badges.

use serde::Serialize;

use crate::alert::Alert;
use crate::urgency::Urgency;

/// Counts of alerts per urgency tier in one feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlertSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl AlertSummary {
    pub fn of(alerts: &[Alert]) -> Self {
        let mut summary = Self::default();
        for alert in alerts {
            match alert.urgency() {
                Urgency::High => summary.high += 1,
                Urgency::Medium => summary.medium += 1,
                Urgency::Low => summary.low += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
