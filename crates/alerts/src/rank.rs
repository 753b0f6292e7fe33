//! Merge & rank: one combined, urgency-ordered feed.

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::builder::{dispute_alerts, expiration_alerts, low_stock_alerts};
use crate::record::OperationsSnapshot;

/// Order alerts by urgency tier: high, then medium, then low.
///
/// The sort is stable: equal-urgency alerts keep their input order, which
/// already carries each builder's domain-level ordering (soonest-expiring
/// first, largest shortfall first, oldest dispute first). No grouping by
/// alert type.
pub fn rank(mut alerts: Vec<Alert>) -> Vec<Alert> {
    alerts.sort_by_key(Alert::urgency);
    alerts
}

/// The full prioritization pass: run all three builders over the snapshot,
/// concatenate expiring → low-stock → dispute, and rank.
///
/// Pure and idempotent; re-running on an unchanged snapshot yields identical
/// output. The builders are independent — only the final rank needs the
/// combined input.
pub fn prioritized_alerts(snapshot: &OperationsSnapshot, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = expiration_alerts(&snapshot.ingredients, now);
    alerts.extend(low_stock_alerts(&snapshot.ingredients));
    alerts.extend(dispute_alerts(&snapshot.disputes, now));
    rank(alerts)
}
