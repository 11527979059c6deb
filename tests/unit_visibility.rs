use scope_tour::visibility::{AlarmedGauge, Announce, Beacon, Gauge, demonstrate};

#[test]
fn public_members_read_and_write_across_the_crate_boundary() {
    let mut gauge = Gauge::default();
    assert_eq!(gauge.reading, 0);

    gauge.reading = 7;
    assert_eq!(gauge.reading, 7);
    assert_eq!(gauge.describe(), "gauge reading 7");
}

#[test]
fn summary_reaches_private_state_through_the_public_path() {
    let gauge = Gauge::default();
    let summary = gauge.summary();

    assert!(summary.contains("enabled: true"));
    assert!(summary.contains("3.14"));
    assert!(summary.contains("celsius"));
}

#[test]
fn alarmed_gauge_announces_base_before_alarm() {
    let alarmed = AlarmedGauge::default();
    let lines = alarmed.announce();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("gauge online"));
    assert!(lines[1].contains("alarm armed"));
}

#[test]
fn base_gauge_announces_alone() {
    let gauge = Gauge::default();
    let lines = gauge.announce();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("gauge online"));
}

#[test]
fn beacon_is_fully_public() {
    let beacon = Beacon { signal: 42 };
    assert_eq!(beacon.signal, 42);
    assert!(beacon.emit().contains("42"));
}

#[test]
fn demonstration_walks_every_scope_in_order() {
    let lines = demonstrate();

    assert!(lines[0].contains("public reading: 0"));
    assert!(lines[1].contains("crate-visible unit"));
    assert!(lines[2].contains("module-visible calibration"));
    assert!(lines.iter().any(|line| line.contains("after write: 7")));

    // Override output: the base line precedes the alarm line.
    let base = lines
        .iter()
        .position(|line| line.contains("gauge online"))
        .expect("base announcement");
    let derived = lines
        .iter()
        .position(|line| line.contains("alarm armed"))
        .expect("alarm announcement");
    assert!(base < derived);
}
