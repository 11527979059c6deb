use scope_tour::{OutputFormat, Section, TourConfig, run_tour};

#[test]
fn full_tour_runs_sections_in_fixed_order() {
    let report = run_tour(&TourConfig::default());

    let order: Vec<Section> = report
        .sections
        .iter()
        .map(|section| section.section)
        .collect();
    assert_eq!(order, Section::ALL.to_vec());

    assert!(report.sections.iter().all(|s| !s.lines.is_empty()));
}

#[test]
fn selection_order_does_not_change_execution_order() {
    let config = TourConfig {
        sections: vec![Section::Closures, Section::Statics],
        output: OutputFormat::Text,
    };
    let report = run_tour(&config);

    let order: Vec<Section> = report
        .sections
        .iter()
        .map(|section| section.section)
        .collect();
    assert_eq!(order, vec![Section::Statics, Section::Closures]);
}

#[test]
fn report_lines_carry_the_contractual_values() {
    let report = run_tour(&TourConfig::default());
    let lines: Vec<&str> = report.lines().collect();

    assert!(lines.iter().any(|line| line.contains("25.0")));
    assert!(lines.iter().any(|line| line.ends_with(": 8")));
    assert!(lines.iter().any(|line| line.ends_with(": 12")));
    assert!(
        lines
            .iter()
            .any(|line| line.contains("references identical: true"))
    );
    assert!(
        lines
            .iter()
            .any(|line| line.contains("value through second reference: 42"))
    );
}

#[test]
fn report_serializes_to_json() {
    let config = TourConfig {
        sections: vec![Section::Statics],
        output: OutputFormat::Json,
    };
    let report = run_tour(&config);

    let value = serde_json::to_value(&report).expect("serialize");
    let sections = value["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["section"], "statics");
}
