//! Integration tests for presets, TOML configuration, and CSV export.

mod common;

use slot_estimator::config::SiteConfig;
use slot_estimator::io::export::write_csv;

#[test]
fn every_preset_produces_a_full_report() {
    for name in SiteConfig::PRESETS {
        let site = SiteConfig::from_preset(name).expect("preset should load");
        let report = common::report_for(&site);
        assert_eq!(report.slots.len(), 6, "preset \"{name}\"");
        assert!(report.total_kwh > 0.0, "preset \"{name}\"");
    }
}

#[test]
fn always_on_preset_total_matches_fixture() {
    let site = SiteConfig::from_preset("always_on").expect("preset should load");
    let report = common::report_for(&site);
    // 691.2 + 432 + 5.4 + 14.112 + 0.12 + 36 = 1178.832 -> 1178.83
    assert_eq!(format!("{:.2}", report.total_kwh), "1178.83");
}

#[test]
fn always_on_consumes_more_than_office() {
    let office = common::report_for(&common::office_site());
    let site = SiteConfig::from_preset("always_on").expect("preset should load");
    let always_on = common::report_for(&site);
    assert!(always_on.total_kwh > office.total_kwh);
}

#[test]
fn toml_site_round_trips_through_the_estimator() {
    let toml = r#"
[[slot]]
title = "Airconds"
levels = ["20", "10", "6"]
power_kw = 0.8
hours = 9.0

[[slot]]
title = "Pendaflour"
levels = ["40", "30", "20"]
power_kw = 0.2
hours = 9.0

[[slot]]
title = "CCTV"
levels = ["5", "5", "5"]
power_kw = 0.015
hours = 24.0

[[slot]]
title = "Computer"
levels = ["5", "20", "3"]
power_kw = 0.021
hours = 9.5

[[slot]]
title = "Router/Modem"
levels = ["4", "4", "2"]
power_kw = 0.0005
hours = 24.0

[[slot]]
title = "Lift"
levels = ["3", "0", "0"]
power_kw = 0.5
hours = 24.0
"#;
    let site = SiteConfig::from_toml_str(toml).expect("TOML should parse");
    assert!(site.validate().is_empty());
    let report = common::report_for(&site);
    assert_eq!(format!("{:.2}", report.total_kwh), "468.31");
}

#[test]
fn hours_edits_change_only_the_edited_slot_contribution() {
    let mut site = common::office_site();
    let baseline = common::report_for(&site);

    // Halve Aircond hours: 9.0 -> 4.5
    site.slots[0].hours = 4.5;
    let edited = common::report_for(&site);

    assert!((edited.slots[0].energy_kwh - baseline.slots[0].energy_kwh / 2.0).abs() < 1e-3);
    for i in 1..6 {
        assert_eq!(edited.slots[i].energy_kwh, baseline.slots[i].energy_kwh);
    }
}

#[test]
fn csv_export_of_preset_report_is_complete() {
    let report = common::report_for(&common::office_site());
    let mut buf = Vec::new();
    write_csv(&report, &mut buf).expect("csv export should succeed");

    let csv = String::from_utf8(buf).expect("csv output should be valid UTF-8");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("slot,units,power_kw,hours,energy_kwh"));
    // 6 slot rows + total row
    assert_eq!(lines.count(), 7);
}
