use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::TourError;
use crate::model::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TourConfig {
    pub sections: Vec<Section>,
    pub output: OutputFormat,
}

impl TourConfig {
    /// Builds the effective configuration: CLI flags override the optional
    /// YAML config file, which overrides the defaults (all sections, text).
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            sections: cli_sections,
            output: cli_output,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            sections: file_sections,
            output: file_output,
        } = file_config;

        let file_sections = file_sections
            .map(|names| {
                names
                    .iter()
                    .map(|name| <Section as FromStr>::from_str(name))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let mut sections = cli_sections
            .or(file_sections)
            .unwrap_or_else(|| Section::ALL.to_vec());
        sections.dedup();

        let output = cli_output.or(file_output).unwrap_or(OutputFormat::Text);

        Ok(Self { sections, output })
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.sections.is_empty(),
            "at least one section must be selected"
        );
        Ok(())
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            output: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "scope-tour", version, about)]
pub struct CliArgs {
    /// Path to a YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated sections to run (default: all)
    #[arg(long, value_delimiter = ',')]
    pub sections: Option<Vec<Section>>,

    /// Output format for the demonstration report
    #[arg(long)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    sections: Option<Vec<String>>,
    output: Option<OutputFormat>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    let raw = fs::read_to_string(path).map_err(|source| TourError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = serde_yaml::from_str(&raw).map_err(|source| TourError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed)
}
