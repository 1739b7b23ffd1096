//! Averages across the runs of an experiment file.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use isim_model::Approach;

use crate::{OutputError, OutputResult, RunRecord};

/// Cross-run means for one approach.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproachSummary {
    pub approach:          Approach,
    pub mean_arrivals:     f64,
    /// Mean over the runs that had a defined average wait; `None` if none did.
    pub mean_average_wait: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentSummary {
    pub runs:       usize,
    pub approaches: Vec<ApproachSummary>,
}

/// Read the experiment file at `path` and average it per approach.
pub fn summarize(path: &Path) -> OutputResult<ExperimentSummary> {
    let file = File::open(path)?;
    summarize_reader(file)
}

/// As [`summarize`], from any reader.  The first line must be the header.
pub fn summarize_reader<R: Read>(reader: R) -> OutputResult<ExperimentSummary> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let records = rdr
        .deserialize::<RunRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(OutputError::Parse("no run records found".into()));
    }

    let runs = records.len();
    let approaches = Approach::ALL
        .iter()
        .map(|&approach| {
            let total: u64 = records.iter().map(|r| r.arrivals(approach)).sum();
            let waits: Vec<f64> = records.iter().filter_map(|r| r.average_wait(approach)).collect();
            ApproachSummary {
                approach,
                mean_arrivals: total as f64 / runs as f64,
                mean_average_wait: (!waits.is_empty())
                    .then(|| waits.iter().sum::<f64>() / waits.len() as f64),
            }
        })
        .collect();

    Ok(ExperimentSummary { runs, approaches })
}

impl ExperimentSummary {
    pub fn approach(&self, approach: Approach) -> Option<&ApproachSummary> {
        self.approaches.iter().find(|s| s.approach == approach)
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Experiment summary over {} run(s):", self.runs)?;
        writeln!(f, "  {:<11} {:>14} {:>17}", "approach", "mean arrivals", "mean average wait")?;
        for s in &self.approaches {
            let wait = s
                .mean_average_wait
                .map_or_else(|| "-".to_string(), |w| format!("{w:.3}"));
            writeln!(f, "  {:<11} {:>14.1} {:>17}", s.approach.code(), s.mean_arrivals, wait)?;
        }
        Ok(())
    }
}
