//! The `OutputWriter` trait implemented by run-record backends.

use crate::{OutputResult, RunRecord};

/// A sink for one record per run.
///
/// Errors are stored by [`RunOutputObserver`][crate::RunOutputObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Append one run's record.
    fn write_run(&mut self, record: &RunRecord) -> OutputResult<()>;

    /// Flush buffered records to the underlying file.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
