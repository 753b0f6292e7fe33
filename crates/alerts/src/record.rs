//! Read-only collaborator records the engine consumes.
//!
//! The inventory, recipe, and dispute stores own these rows; the engine never
//! mutates them, it only derives a disposable alert view. Optional fields
//! encode "missing or unparseable upstream" — the builders decide per field
//! whether that means untracked (skip silently) or malformed (skip + warn).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::{DisputeId, IngredientId, SupplierId};

/// One inventory ingredient row as supplied by the inventory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: IngredientId,
    pub name: String,
    /// Current stock on hand, in the ingredient's storage unit.
    pub quantity: f64,
    /// Target stock level below which the item is under-stocked.
    /// `None` for items without a configured par.
    pub par_level: Option<f64>,
    /// Whether stock levels are monitored for this ingredient.
    pub track_stock: bool,
    /// `None` for non-perishables, or when the stored date failed upstream
    /// parsing.
    pub expires_at: Option<DateTime<Utc>>,
}

/// One delivery-bill dispute row as supplied by the dispute store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeRecord {
    pub id: DisputeId,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    /// `None` when the stored date failed upstream parsing.
    pub opened_at: Option<DateTime<Utc>>,
    pub resolved: bool,
}

/// One materialized view of all three signal sources, fetched fresh by the
/// caller for each prioritization pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationsSnapshot {
    pub ingredients: Vec<IngredientRecord>,
    pub disputes: Vec<DisputeRecord>,
}
