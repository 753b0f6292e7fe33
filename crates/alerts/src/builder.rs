//! Per-domain alert builders.
//!
//! Each builder scans one record collection and emits zero or more normalized
//! alerts. `now` is always an explicit parameter so passes are deterministic
//! and testable with fixed timestamps. A malformed record is skipped with a
//! `warn` — a single bad row must never abort the whole pass.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::alert::{Alert, DisputeAlert, ExpiringAlert, LowStockAlert};
use crate::record::{DisputeRecord, IngredientRecord};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days remaining until `deadline`, partial days rounding **up**.
///
/// "Expires in half a day" reports as 1 — time remaining warns early.
fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((deadline - now).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil() as i64
}

/// Whole days elapsed since `start`, partial days rounding **down**.
///
/// Asymmetric with [`days_until`] on purpose: elapsed time must not
/// over-report urgency prematurely.
fn days_since(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((now - start).num_milliseconds() as f64 / MILLIS_PER_DAY).floor() as i64
}

/// Build expiration alerts for every ingredient carrying an expiration date.
///
/// Ingredients without one are untracked, not malformed: skipped silently.
/// Output is ordered soonest-expiring first; the ranked feed preserves that
/// order within an urgency tier.
pub fn expiration_alerts(ingredients: &[IngredientRecord], now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts: Vec<ExpiringAlert> = ingredients
        .iter()
        .filter_map(|rec| {
            let expires_at = rec.expires_at?;
            Some(ExpiringAlert::new(
                rec.id,
                rec.name.clone(),
                days_until(expires_at, now),
            ))
        })
        .collect();

    alerts.sort_by_key(|a| a.days_until_expiration);
    alerts.into_iter().map(Alert::Expiring).collect()
}

/// Build low-stock alerts for tracked ingredients below their par level.
///
/// The at-or-above-par guard lives here, not in the classifier, so the
/// classifier's arithmetic contract stays simple and total. Output is ordered
/// largest shortfall first.
pub fn low_stock_alerts(ingredients: &[IngredientRecord]) -> Vec<Alert> {
    let mut alerts: Vec<LowStockAlert> = Vec::new();

    for rec in ingredients {
        if !rec.track_stock {
            continue;
        }
        let Some(par_level) = rec.par_level else {
            continue;
        };
        if par_level <= 0.0 {
            warn!(ingredient_id = %rec.id, par_level, "skipping ingredient with non-positive par level");
            continue;
        }
        if rec.quantity >= par_level {
            continue;
        }
        alerts.push(LowStockAlert::new(rec.id, rec.name.clone(), rec.quantity, par_level));
    }

    alerts.sort_by(|a, b| b.percent_short().total_cmp(&a.percent_short()));
    alerts.into_iter().map(Alert::LowStock).collect()
}

/// Build dispute alerts for every unresolved dispute.
///
/// Output is ordered oldest dispute first.
pub fn dispute_alerts(disputes: &[DisputeRecord], now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts: Vec<DisputeAlert> = Vec::new();

    for rec in disputes {
        if rec.resolved {
            continue;
        }
        let Some(opened_at) = rec.opened_at else {
            warn!(dispute_id = %rec.id, "skipping dispute with missing opened date");
            continue;
        };
        alerts.push(DisputeAlert::new(
            rec.id,
            rec.supplier_id,
            rec.supplier_name.clone(),
            days_since(opened_at, now),
        ));
    }

    alerts.sort_by_key(|a| core::cmp::Reverse(a.days_since_opened));
    alerts.into_iter().map(Alert::Dispute).collect()
}
