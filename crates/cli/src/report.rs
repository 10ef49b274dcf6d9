use anyhow::{Context, Result};
use lamprey_core::Regime;
use lamprey_solvers::{Record, Run};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};

use crate::config::Scenario;

/// Trajectory report consumed by plotting tools.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub scenario: &'a Scenario,
    /// Largest total parasite, host or predator population, for axis scaling.
    pub peak_population: Option<f64>,
    pub records: Vec<RecordReport>,
}

/// One output time point. `male_fraction` is `null` when there are no parasites.
#[derive(Debug, Serialize)]
pub struct RecordReport {
    pub time: f64,
    pub level: f64,
    pub regime: Regime,
    pub males: f64,
    pub females: f64,
    pub host: f64,
    pub predator: f64,
    pub total: f64,
    pub male_fraction: Option<f64>,
}

impl From<Record> for RecordReport {
    fn from(record: Record) -> Self {
        let Record {
            time,
            level,
            regime,
            populations,
            total,
            male_fraction,
        } = record;
        Self {
            time,
            level,
            regime,
            males: populations.males,
            females: populations.females,
            host: populations.host,
            predator: populations.predator,
            total,
            male_fraction,
        }
    }
}

impl<'a> Report<'a> {
    pub fn new(scenario: &'a Scenario, run: &Run) -> Self {
        Self {
            scenario,
            peak_population: run.peak_population(),
            records: run.records().map(RecordReport::from).collect(),
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let writer = BufWriter::new(
            File::create(file).with_context(|| format!("failed to create {file:?}"))?,
        );
        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("failed to write {file:?}"))?;
        Ok(())
    }
}
