//! `larder-alerts` — unified alert prioritization for back-of-house operations.
//!
//! This crate turns three unrelated operational signals — ingredient
//! expirations, stock shortfalls, and unresolved supplier disputes — into one
//! urgency-ranked alert feed for the dashboard. It is implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage): callers supply
//! materialized record snapshots plus an explicit `now`, and get back a
//! disposable, ordered view.

pub mod alert;
pub mod builder;
pub mod presentation;
pub mod rank;
pub mod record;
pub mod summary;
pub mod urgency;

pub use alert::{Alert, AlertType, DisputeAlert, ExpiringAlert, LowStockAlert};
pub use builder::{dispute_alerts, expiration_alerts, low_stock_alerts};
pub use presentation::{color_class_for, icon_class_for};
pub use rank::{prioritized_alerts, rank};
pub use record::{DisputeRecord, IngredientRecord, OperationsSnapshot};
pub use summary::AlertSummary;
pub use urgency::{Urgency, classify_dispute, classify_expiration, classify_low_stock};
