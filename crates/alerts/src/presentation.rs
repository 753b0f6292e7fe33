//! Display attribute lookups for the rendering surface.
//!
//! Pure, total functions over the (urgency × type) product. The tokens are a
//! visual policy, not part of the algorithmic core — swap them freely as the
//! dashboard theme evolves.

use crate::alert::AlertType;
use crate::urgency::Urgency;

/// CSS color class for an alert entry.
///
/// Color tracks urgency across all three domains today; the type stays in
/// the signature so a theme can diverge per domain without an API change.
pub fn color_class_for(urgency: Urgency, alert_type: AlertType) -> &'static str {
    match (urgency, alert_type) {
        (Urgency::High, _) => "text-red-600",
        (Urgency::Medium, _) => "text-amber-500",
        (Urgency::Low, _) => "text-emerald-600",
    }
}

/// CSS icon class for an alert entry.
///
/// High-urgency entries use the filled icon variant.
pub fn icon_class_for(urgency: Urgency, alert_type: AlertType) -> &'static str {
    match (alert_type, urgency) {
        (AlertType::Expiring, Urgency::High) => "bi-alarm-fill",
        (AlertType::Expiring, _) => "bi-alarm",
        (AlertType::LowStock, Urgency::High) => "bi-box-seam-fill",
        (AlertType::LowStock, _) => "bi-box-seam",
        (AlertType::Dispute, Urgency::High) => "bi-receipt-cutoff",
        (AlertType::Dispute, _) => "bi-receipt",
    }
}
