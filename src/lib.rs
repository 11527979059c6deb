pub mod closures;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod singleton;
pub mod statics;
pub mod visibility;

pub use config::{CliArgs, OutputFormat, TourConfig};
pub use error::TourError;
pub use logging::{LoggingConfig, init_logging};
pub use model::{Section, SectionReport, TourReport};

use anyhow::Result;

/// Runs the enabled sections in their fixed order and collects their output.
///
/// Sections always execute in the order of [`Section::ALL`], regardless of
/// the order they were selected in.
pub fn run_tour(config: &TourConfig) -> TourReport {
    let sections = Section::ALL
        .iter()
        .copied()
        .filter(|section| config.sections.contains(section))
        .map(|section| {
            tracing::debug!(section = %section, "running section");
            SectionReport {
                section,
                lines: section_lines(section),
            }
        })
        .collect::<Vec<_>>();

    TourReport { sections }
}

fn section_lines(section: Section) -> Vec<String> {
    match section {
        Section::Visibility => visibility::demonstrate(),
        Section::Statics => statics::demonstrate(),
        Section::Singleton => singleton::demonstrate(),
        Section::Closures => closures::demonstrate(),
    }
}

/// Runs the tour and prints it to stdout in the configured format.
///
/// Progress logs go to the tracing subscriber (stderr by default) so the
/// demonstration output stays clean.
pub fn run(config: TourConfig) -> Result<()> {
    tracing::info!(
        sections = config.sections.len(),
        output = %config.output,
        "starting scope tour",
    );

    let report = run_tour(&config);

    match config.output {
        OutputFormat::Text => {
            for section in &report.sections {
                println!("== {} ==", section.section);
                for line in &section.lines {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    tracing::info!(sections = report.sections.len(), "tour complete");
    Ok(())
}
