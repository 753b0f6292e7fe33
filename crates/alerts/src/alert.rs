//! The normalized alert model.
//!
//! One variant per monitored domain, each carrying only the payload its
//! classifier needs. Urgency is derived exactly once at construction and the
//! field stays private, so an alert's urgency can never drift from the signal
//! that produced it. Alerts are an outbound, ephemeral view: they serialize
//! for the dashboard but are never deserialized back.

use serde::Serialize;

use larder_core::{DisputeId, IngredientId, SupplierId};

use crate::presentation;
use crate::urgency::{Urgency, classify_dispute, classify_expiration, classify_low_stock};

/// The closed set of alert domains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertType {
    Expiring,
    LowStock,
    Dispute,
}

/// An ingredient approaching (or past) its expiration date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringAlert {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub days_until_expiration: i64,
    urgency: Urgency,
}

impl ExpiringAlert {
    pub fn new(ingredient_id: IngredientId, name: impl Into<String>, days_until_expiration: i64) -> Self {
        Self {
            ingredient_id,
            name: name.into(),
            days_until_expiration,
            urgency: classify_expiration(days_until_expiration),
        }
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

/// An ingredient stocked below its par level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockAlert {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub par_level: f64,
    urgency: Urgency,
}

impl LowStockAlert {
    /// # Panics
    ///
    /// Panics if `par_level <= 0` (see [`classify_low_stock`]).
    pub fn new(ingredient_id: IngredientId, name: impl Into<String>, quantity: f64, par_level: f64) -> Self {
        Self {
            ingredient_id,
            name: name.into(),
            quantity,
            par_level,
            urgency: classify_low_stock(quantity, par_level),
        }
    }

    /// Shortfall as a percentage of par level.
    pub fn percent_short(&self) -> f64 {
        (self.par_level - self.quantity) / self.par_level * 100.0
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

/// An unresolved supplier dispute aging since it was opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisputeAlert {
    pub dispute_id: DisputeId,
    /// Identity of the counterparty, so the dashboard can link the entry to
    /// the supplier's bill history.
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub days_since_opened: i64,
    urgency: Urgency,
}

impl DisputeAlert {
    pub fn new(
        dispute_id: DisputeId,
        supplier_id: SupplierId,
        supplier_name: impl Into<String>,
        days_since_opened: i64,
    ) -> Self {
        Self {
            dispute_id,
            supplier_id,
            supplier_name: supplier_name.into(),
            days_since_opened,
            urgency: classify_dispute(days_since_opened),
        }
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

/// A normalized, ephemeral alert in one of the three monitored domains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Alert {
    Expiring(ExpiringAlert),
    LowStock(LowStockAlert),
    Dispute(DisputeAlert),
}

impl Alert {
    pub fn alert_type(&self) -> AlertType {
        match self {
            Alert::Expiring(_) => AlertType::Expiring,
            Alert::LowStock(_) => AlertType::LowStock,
            Alert::Dispute(_) => AlertType::Dispute,
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Alert::Expiring(a) => a.urgency(),
            Alert::LowStock(a) => a.urgency(),
            Alert::Dispute(a) => a.urgency(),
        }
    }

    /// Display color token for the rendering surface.
    pub fn color_class(&self) -> &'static str {
        presentation::color_class_for(self.urgency(), self.alert_type())
    }

    /// Display icon token for the rendering surface.
    pub fn icon_class(&self) -> &'static str {
        presentation::icon_class_for(self.urgency(), self.alert_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn urgency_is_derived_from_the_payload_at_construction() {
        let expiring = ExpiringAlert::new(IngredientId::new(), "cream", 1);
        assert_eq!(expiring.urgency(), Urgency::High);

        let low_stock = LowStockAlert::new(IngredientId::new(), "flour", 6.0, 10.0);
        assert_eq!(low_stock.urgency(), Urgency::Low);

        let dispute = DisputeAlert::new(DisputeId::new(), SupplierId::new(), "Ocean Fresh", 8);
        assert_eq!(dispute.urgency(), Urgency::High);
    }

    #[test]
    fn serializes_with_a_camel_case_type_tag() {
        let id = IngredientId::new();
        let alert = Alert::LowStock(LowStockAlert::new(id, "butter", 2.0, 10.0));

        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "lowStock",
                "ingredient_id": id.to_string(),
                "name": "butter",
                "quantity": 2.0,
                "par_level": 10.0,
                "urgency": "high",
            })
        );
    }

    #[test]
    fn percent_short_reports_the_shortfall() {
        let alert = LowStockAlert::new(IngredientId::new(), "salt", 2.0, 10.0);
        assert!((alert.percent_short() - 80.0).abs() < f64::EPSILON);
    }
}
