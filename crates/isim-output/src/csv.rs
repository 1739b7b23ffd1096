//! CSV output backend.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use log::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunRecord};

/// Appends run records to a CSV file.
pub struct CsvWriter {
    path:    PathBuf,
    writer:  Writer<File>,
    written: u64,
}

impl CsvWriter {
    /// Open `path` for appending, creating it if needed.  The header row is
    /// written with the first record only if the file is empty.
    pub fn append(path: &Path) -> OutputResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;
        debug!("appending run records to {} (header: {needs_header})", path.display());
        let writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        Ok(Self {
            path: path.to_path_buf(),
            writer,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records written through this writer (not counting earlier contents).
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl OutputWriter for CsvWriter {
    fn write_run(&mut self, record: &RunRecord) -> OutputResult<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
