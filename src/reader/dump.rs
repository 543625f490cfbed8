use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bzip2::read::MultiBzDecoder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::reader::progress::{PROGRESS_INTERVAL, ProgressSink, StderrProgress};

/// Handle to a bzip2-compressed Wikidata-style JSON dump
///
/// The dump is a single JSON array split one element per line: it opens with
/// `{\n`, each record line ends with a comma except the last, and a closing
/// `}` follows the final record. [`DumpReader`] only stores the path; every
/// call to [`records`](DumpReader::records) reopens the file, so the same
/// reader can be traversed any number of times and always yields the same
/// sequence.
pub struct DumpReader {
    path: PathBuf,
    progress_interval: u64,
}

impl DumpReader {
    /// Create a reader for the dump file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), progress_interval: PROGRESS_INTERVAL }
    }

    /// Override the progress reporting interval (0 disables reporting)
    ///
    /// Mainly useful in tests, where exercising the default 100,000-record
    /// cadence would need an unreasonably large fixture.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Path to the underlying dump file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a traversal yielding one [`Value`] per well-formed record line
    ///
    /// Progress is reported to stderr via [`StderrProgress`].
    ///
    /// # Errors
    ///
    /// Returns an error if the dump file cannot be opened or its compression
    /// header cannot be read. Read errors encountered mid-traversal are
    /// yielded as `Err` items by the returned iterator instead.
    pub fn records(&self) -> Result<Records> {
        self.open(Box::new(StderrProgress))
    }

    /// Start a traversal with an injected progress sink
    pub fn records_with_sink(&self, sink: Box<dyn ProgressSink>) -> Result<Records> {
        self.open(sink)
    }

    /// Start a traversal deserializing each record line into `T`
    ///
    /// Lines that are valid JSON but do not match `T` are skipped, same as
    /// syntactically malformed lines.
    pub fn records_as<T: DeserializeOwned>(&self) -> Result<Records<T>> {
        self.open(Box::new(StderrProgress))
    }

    fn open<T>(&self, sink: Box<dyn ProgressSink>) -> Result<Records<T>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open dump file: {}", self.path.display()))?;
        let mut reader = BufReader::new(MultiBzDecoder::new(file));

        // Discard the leading "{\n" framing bytes unconditionally. A stream
        // shorter than two bytes just hits EOF here and yields no records.
        io::copy(&mut (&mut reader).take(2), &mut io::sink())
            .with_context(|| format!("Failed to read dump header: {}", self.path.display()))?;

        Ok(Records {
            lines: reader.lines(),
            emitted: 0,
            interval: self.progress_interval,
            sink,
            _record: PhantomData,
        })
    }
}

/// Lazy, single-pass iterator over the records of one dump traversal
///
/// Owns the open decompression stream; dropping the iterator (completion,
/// early break, or unwind) closes the underlying file.
pub struct Records<T = Value> {
    lines: Lines<BufReader<MultiBzDecoder<File>>>,
    emitted: u64,
    interval: u64,
    sink: Box<dyn ProgressSink>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Records<T> {
    /// Number of records emitted so far in this traversal
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl<T: DeserializeOwned> Iterator for Records<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(
                        anyhow::Error::new(e).context("Failed to read line from dump stream")
                    ));
                }
            };

            // Record lines are comma-terminated JSON array elements, except
            // possibly the last one.
            let payload = line.trim_end_matches(',');

            match serde_json::from_str::<T>(payload) {
                Ok(record) => {
                    self.emitted += 1;
                    if self.interval > 0 && self.emitted % self.interval == 0 {
                        self.sink.processed(self.emitted);
                    }
                    return Some(Ok(record));
                }
                // Malformed or partial line (e.g. the dump's closing "}"):
                // skip it and keep going.
                Err(_) => continue,
            }
        }
    }
}
