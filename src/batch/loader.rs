//! Load growth projection inputs from a CSV file
//!
//! Expected columns:
//! InitialAmount,Contribution,ContributionFrequency,Rate,Years,CompoundFrequency
//! with frequency columns spelled "Monthly" or "Annually".

use crate::growth::{CompoundFrequency, CompoundGrowthInput, ContributionFrequency};
use csv::Reader;
use log::{debug, info};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while loading a batch input file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read batch file: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unknown {column} value '{value}'")]
    Field {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Raw CSV row matching the batch input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InitialAmount")]
    initial_amount: f64,
    #[serde(rename = "Contribution")]
    contribution: f64,
    #[serde(rename = "ContributionFrequency")]
    contribution_frequency: String,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "CompoundFrequency")]
    compound_frequency: String,
}

impl CsvRow {
    fn to_input(self, row: usize) -> Result<CompoundGrowthInput, LoadError> {
        let contribution_frequency = match self.contribution_frequency.as_str() {
            "Monthly" => ContributionFrequency::Monthly,
            "Annually" => ContributionFrequency::Annually,
            other => {
                return Err(LoadError::Field {
                    row,
                    column: "ContributionFrequency",
                    value: other.to_string(),
                })
            }
        };

        let compound_frequency = match self.compound_frequency.as_str() {
            "Monthly" => CompoundFrequency::Monthly,
            "Annually" => CompoundFrequency::Annually,
            other => {
                return Err(LoadError::Field {
                    row,
                    column: "CompoundFrequency",
                    value: other.to_string(),
                })
            }
        };

        Ok(CompoundGrowthInput {
            initial_amount: self.initial_amount,
            periodic_contribution: self.contribution,
            contribution_frequency,
            annual_rate_percent: self.rate,
            years: self.years,
            compound_frequency,
        })
    }
}

/// Read every row of `path` into a typed growth input
pub fn load_growth_inputs(path: &Path) -> Result<Vec<CompoundGrowthInput>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut inputs = Vec::new();

    for (i, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        debug!("row {}: {:?}", i + 1, row);
        inputs.push(row.to_input(i + 1)?);
    }

    info!("loaded {} growth inputs from {}", inputs.len(), path.display());
    Ok(inputs)
}
