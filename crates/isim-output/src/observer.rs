//! `RunOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use isim_sim::{RunStatistics, SimObserver};

use crate::{OutputError, OutputResult, OutputWriter, RunRecord};

/// A [`SimObserver`] that writes one [`RunRecord`] per finished run.
///
/// One observer can be reused across the runs of an experiment; each
/// `on_sim_end` appends a record and flushes.  Errors are stored because
/// `SimObserver` methods have no return value; check
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RunOutputObserver<W> {
    fn on_sim_end(&mut self, stats: &RunStatistics) {
        let record = RunRecord::from_stats(stats);
        let result = self
            .writer
            .write_run(&record)
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
