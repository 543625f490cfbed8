/// Default reporting cadence: one progress report per 100,000 parsed records
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Sink for periodic progress reports during a dump traversal
///
/// Injected into [`Records`](crate::reader::dump::Records) so that progress
/// reporting is observable in tests without capturing global logger state.
pub trait ProgressSink {
    /// Called with the cumulative record count each time it reaches a
    /// multiple of the traversal's progress interval
    fn processed(&mut self, count: u64);
}

/// Default sink: writes one line per report to stderr
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn processed(&mut self, count: u64) {
        eprintln!("Processed: {} lines", count);
    }
}
