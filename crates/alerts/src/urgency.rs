//! Urgency tiers and the per-domain classifiers.
//!
//! Thresholds are domain-tuned constants, kept named so the rule set stays
//! auditable and testable independent of the merge logic.

use serde::{Deserialize, Serialize};

/// Three-tier urgency driving both sort order and visual emphasis.
///
/// Variant order is the sort order: `High` is most urgent and compares
/// smallest, so a plain ascending sort puts it first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

impl core::fmt::Display for Urgency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days until expiration at or below which an item demands immediate action.
pub const EXPIRY_HIGH_MAX_DAYS: i64 = 2;
/// Upper bound (inclusive) of the medium expiration window.
pub const EXPIRY_MEDIUM_MAX_DAYS: i64 = 5;
/// Percent shortfall at or above which stock is critically low.
pub const SHORTFALL_HIGH_PCT: f64 = 80.0;
/// Percent shortfall at or above which stock is moderately low.
pub const SHORTFALL_MEDIUM_PCT: f64 = 50.0;
/// Dispute age in days at or above which resolution is overdue.
pub const DISPUTE_HIGH_MIN_DAYS: i64 = 7;
/// Dispute age in days at or above which a dispute needs follow-up.
pub const DISPUTE_MEDIUM_MIN_DAYS: i64 = 3;

/// Classify an ingredient by days remaining until it expires.
///
/// Negative values (already expired) classify as `High` along with the
/// about-to-expire window: both demand the same immediate action.
pub fn classify_expiration(days_until_expiration: i64) -> Urgency {
    if days_until_expiration <= EXPIRY_HIGH_MAX_DAYS {
        Urgency::High
    } else if days_until_expiration <= EXPIRY_MEDIUM_MAX_DAYS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Classify a stock shortfall as a percentage of the par level.
///
/// Quantity above par yields a negative shortfall and falls to `Low`.
///
/// # Panics
///
/// Panics if `par_level <= 0`. Filtering untracked items and items without a
/// meaningful par level is the builder's responsibility; reaching this
/// function with a non-positive par level means that guard was bypassed.
pub fn classify_low_stock(quantity: f64, par_level: f64) -> Urgency {
    assert!(
        par_level > 0.0,
        "classify_low_stock called with par_level <= 0: builder guard bypassed"
    );

    let percent_short = (par_level - quantity) / par_level * 100.0;
    if percent_short >= SHORTFALL_HIGH_PCT {
        Urgency::High
    } else if percent_short >= SHORTFALL_MEDIUM_PCT {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Classify an unresolved supplier dispute by whole days since it was opened.
pub fn classify_dispute(days_since_opened: i64) -> Urgency {
    if days_since_opened >= DISPUTE_HIGH_MIN_DAYS {
        Urgency::High
    } else if days_since_opened >= DISPUTE_MEDIUM_MIN_DAYS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}
