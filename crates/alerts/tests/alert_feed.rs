//! End-to-end prioritization pass over a mixed back-of-house snapshot.

use chrono::{DateTime, Duration, TimeZone, Utc};

use larder_alerts::{
    Alert, AlertSummary, AlertType, DisputeRecord, IngredientRecord, OperationsSnapshot, Urgency,
    prioritized_alerts,
};
use larder_core::{DisputeId, IngredientId, SupplierId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn ingredient(
    name: &str,
    quantity: f64,
    par_level: Option<f64>,
    track_stock: bool,
    expires_in: Option<Duration>,
) -> IngredientRecord {
    IngredientRecord {
        id: IngredientId::new(),
        name: name.to_string(),
        quantity,
        par_level,
        track_stock,
        expires_at: expires_in.map(|d| now() + d),
    }
}

fn dispute(supplier: &str, opened_ago: Option<Duration>, resolved: bool) -> DisputeRecord {
    DisputeRecord {
        id: DisputeId::new(),
        supplier_id: SupplierId::new(),
        supplier_name: supplier.to_string(),
        opened_at: opened_ago.map(|ago| now() - ago),
        resolved,
    }
}

fn kitchen_snapshot() -> OperationsSnapshot {
    OperationsSnapshot {
        ingredients: vec![
            // Expires tomorrow: high. Also 90% short on stock: high.
            ingredient("cream", 1.0, Some(10.0), true, Some(Duration::hours(20))),
            // Expires in 4 days: medium.
            ingredient("basil", 3.0, None, false, Some(Duration::days(4))),
            // Expires in 10 days: low. 40% short: low.
            ingredient("stock base", 6.0, Some(10.0), true, Some(Duration::days(10))),
            // Above par, tracked: never alerts on stock; no expiration date.
            ingredient("salt", 50.0, Some(20.0), true, None),
            // Malformed par level: skipped, must not abort the pass.
            ingredient("broken row", 1.0, Some(0.0), true, None),
        ],
        disputes: vec![
            dispute("Ocean Fresh", Some(Duration::days(8)), false),
            dispute("Valley Produce", Some(Duration::days(1)), false),
            dispute("Mill & Co", Some(Duration::days(30)), true),
            dispute("missing date", None, false),
        ],
    }
}

#[test]
fn full_pass_produces_one_urgency_ranked_feed() {
    larder_observability::init();

    let feed = prioritized_alerts(&kitchen_snapshot(), now());

    // cream(expiring, high), cream(lowStock, high), Ocean Fresh(dispute, high),
    // basil(expiring, medium), stock base(expiring, low),
    // stock base(lowStock, low), Valley Produce(dispute, low).
    assert_eq!(feed.len(), 7);

    let urgencies: Vec<Urgency> = feed.iter().map(Alert::urgency).collect();
    assert_eq!(
        urgencies,
        vec![
            Urgency::High,
            Urgency::High,
            Urgency::High,
            Urgency::Medium,
            Urgency::Low,
            Urgency::Low,
            Urgency::Low,
        ]
    );

    // Within the high tier the builder concatenation order survives:
    // expiring before low-stock before dispute.
    let high_types: Vec<AlertType> = feed[..3].iter().map(Alert::alert_type).collect();
    assert_eq!(
        high_types,
        vec![AlertType::Expiring, AlertType::LowStock, AlertType::Dispute]
    );

    match &feed[2] {
        Alert::Dispute(d) => {
            assert_eq!(d.supplier_name, "Ocean Fresh");
            assert_eq!(d.days_since_opened, 8);
        }
        other => panic!("expected the aged dispute, got {other:?}"),
    }
}

#[test]
fn rerunning_the_pass_on_unchanged_input_is_identical() {
    let snapshot = kitchen_snapshot();
    let first = prioritized_alerts(&snapshot, now());
    let second = prioritized_alerts(&snapshot, now());
    assert_eq!(first, second);
}

#[test]
fn summary_counts_match_the_feed() {
    let feed = prioritized_alerts(&kitchen_snapshot(), now());
    let summary = AlertSummary::of(&feed);

    assert_eq!(summary, AlertSummary { high: 3, medium: 1, low: 3 });
    assert_eq!(summary.total(), feed.len());
}

#[test]
fn feed_serializes_with_display_attributes_for_the_dashboard() {
    let feed = prioritized_alerts(&kitchen_snapshot(), now());

    let json = serde_json::to_value(&feed).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), feed.len());
    assert_eq!(entries[0]["type"], "expiring");
    assert_eq!(entries[0]["urgency"], "high");

    assert_eq!(feed[0].color_class(), "text-red-600");
    assert_eq!(feed[0].icon_class(), "bi-alarm-fill");
}

#[test]
fn empty_snapshot_produces_an_empty_feed() {
    let feed = prioritized_alerts(&OperationsSnapshot::default(), now());
    assert!(feed.is_empty());
    assert_eq!(AlertSummary::of(&feed).total(), 0);
}
