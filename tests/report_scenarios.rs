//! End-to-end report scenarios.
//!
//! These tests drive the whole engine path the CLI uses — CSV text through
//! the normalizer into a snapshot, then `build_report` — without touching
//! the network. Adapter behavior against live endpoints is covered by the
//! `#[ignore]`d tests in `ingest::sheet` and `sync`.

use aquamon_service::ingest::sheet::{parse_history_csv, HistorySnapshot};
use aquamon_service::model::{Forecast, Reading, Tier};
use aquamon_service::report::{build_report, STATUS_SAFE, STATUS_UNSAFE};

fn live(ph: f64, tds: f64, turbidity: f64) -> Reading {
    Reading { ph, tds, turbidity, temperature: 25.0 }
}

// ---------------------------------------------------------------------------
// Healthy-trend scenario
// ---------------------------------------------------------------------------

#[test]
fn rising_but_clean_ph_history_stays_drinking_grade() {
    // History: pH 7.0, 7.1, 7.2, 7.3 — slope 0.1 per cycle, so the
    // next-cycle estimate is 7.40. Live reading is clean.
    let snapshot = parse_history_csv("pH\n7.0\n7.1\n7.2\n7.3\n")
        .expect("well-formed history should parse");

    let report = build_report(&live(7.2, 250.0, 2.0), &snapshot);

    assert_eq!(report.forecasts.ph, Forecast::Estimate(7.4));
    assert_eq!(report.classification.tier, Tier::Drinking);
    assert!(report.is_safe);
    assert_eq!(report.status_label, STATUS_SAFE);
    assert_eq!(report.final_remedy, "regular monitoring only");
}

// ---------------------------------------------------------------------------
// Degraded scenario: no history at all
// ---------------------------------------------------------------------------

#[test]
fn empty_history_with_acidic_loaded_sample_degrades_to_live_values() {
    // No history: every forecast is undefined and classification falls
    // back to the live reading. 700 ppm lands on AGRICULTURE via the TDS
    // ladder, the flag fails, and the acidity override beats the TDS
    // override.
    let report = build_report(&live(5.9, 700.0, 10.0), &HistorySnapshot::empty());

    assert_eq!(report.forecasts.ph, Forecast::InsufficientHistory);
    assert_eq!(report.forecasts.tds, Forecast::InsufficientHistory);
    assert_eq!(report.forecasts.turbidity, Forecast::InsufficientHistory);
    assert_eq!(report.forecasts.temperature, Forecast::InsufficientHistory);

    assert_eq!(report.classification.tier, Tier::Agriculture);
    assert!(!report.is_safe);
    assert_eq!(report.status_label, STATUS_UNSAFE);
    assert_eq!(report.final_remedy, "Deploy calcite neutralizing filter.");
}

#[test]
fn malformed_history_document_is_recoverable_as_zero_history() {
    // The caller maps any SnapshotError to the empty snapshot; the report
    // must come out identical to the genuinely-empty case.
    let err = parse_history_csv("<html>export link moved</html>")
        .expect_err("HTML body should not parse as history");
    let _ = err; // named, inspectable failure — not a panic

    let degraded = build_report(&live(7.0, 250.0, 2.0), &HistorySnapshot::empty());
    assert_eq!(degraded.classification.tier, Tier::Drinking);
    assert!(!degraded.forecasts.tds.is_defined());
}

// ---------------------------------------------------------------------------
// Independence of the safety flag and the tier ladder
// ---------------------------------------------------------------------------

#[test]
fn safety_flag_and_tier_are_independent_outputs() {
    // 450 ppm at neutral pH: acceptable for use (≤ 500) but beyond
    // drinking grade (> 300). Both verdicts must be surfaced as-is.
    let report = build_report(&live(7.0, 450.0, 2.0), &HistorySnapshot::empty());
    assert!(report.is_safe, "450 ppm is within the acceptability bound");
    assert_eq!(
        report.classification.tier,
        Tier::Domestic,
        "450 ppm is past the drinking-grade bound"
    );
}

// ---------------------------------------------------------------------------
// Messy real-world CSV
// ---------------------------------------------------------------------------

#[test]
fn sheet_export_quirks_do_not_disturb_the_forecast() {
    // Padded mixed-case headers, an uninterpreted extra column, a blank
    // line, and a blank TDS cell — the shape a hand-edited sheet actually
    // has. TDS rows 0-3 lie on y = 20x + 200 (row 2 is absent); forecast
    // position is x = 5 → 300. The forecast crossing neither bound keeps
    // the tier at DRINKING.
    let csv = " pH ,TDS, Notes \n\
               7.0,200,start\n\
               7.0,220,\n\
               7.0,,sensor swap\n\
               7.0,260,\n\
               \n\
               7.0,280,ok\n";
    let snapshot = parse_history_csv(csv).expect("messy but tabular CSV should parse");
    assert_eq!(snapshot.len(), 5);
    assert!(snapshot.has_column("notes"));

    let report = build_report(&live(7.1, 240.0, 1.5), &snapshot);
    assert_eq!(report.forecasts.tds, Forecast::Estimate(300.0));
    assert_eq!(report.forecasts.ph, Forecast::Estimate(7.0));
    // Turbidity and temperature never appeared in history.
    assert_eq!(report.forecasts.turbidity, Forecast::InsufficientHistory);
    assert_eq!(report.forecasts.temperature, Forecast::InsufficientHistory);
    assert_eq!(report.classification.tier, Tier::Drinking);
}

#[test]
fn forecast_beyond_a_bound_downgrades_the_tier_before_the_live_value_does() {
    // Live TDS is still drinking-grade, but the trend says next cycle
    // crosses 300 ppm: y = 40x + 180 at x = 4 → 340. The operator should
    // see the downgrade now, not after the excursion.
    let snapshot = parse_history_csv("tds\n180\n220\n260\n300\n").expect("should parse");
    let report = build_report(&live(7.0, 300.0, 2.0), &snapshot);

    assert_eq!(report.forecasts.tds, Forecast::Estimate(340.0));
    assert_eq!(report.classification.tier, Tier::Domestic);
    // Safety flag stays live-driven: 300 ppm live is acceptable.
    assert!(report.is_safe);
    assert_eq!(report.final_remedy, "use filtration before drinking");
}
