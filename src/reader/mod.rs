pub mod dump;
pub mod progress;

pub use dump::{DumpReader, Records};
pub use progress::{PROGRESS_INTERVAL, ProgressSink, StderrProgress};
