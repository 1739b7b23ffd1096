//! `isim-output` — per-run result files and experiment summaries.
//!
//! Each run appends one [`RunRecord`] line to a CSV file: the five inputs
//! that vary between experiments, then arrival counts and average waits for
//! the six approaches.  The header is written only when the file is empty,
//! so repeated runs accumulate into one experiment file.
//!
//! [`RunOutputObserver`] implements `isim_sim::SimObserver` and writes the
//! record when a run ends.  [`summarize`] reads an experiment file back and
//! averages it per approach.
//!
//! # Usage
//!
//! ```rust,ignore
//! use isim_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::append(Path::new("results.csv"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::RunRecord;
pub use summary::{summarize, summarize_reader, ApproachSummary, ExperimentSummary};
pub use writer::OutputWriter;
