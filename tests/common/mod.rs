//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use bzip2::Compression;
use bzip2::write::BzEncoder;
use tempfile::NamedTempFile;
use wiki_dump_reader::ProgressSink;

/// Builder for synthetic bzip2-compressed dump files
///
/// Reproduces the Wikidata dump framing: a leading `{` line, one
/// comma-terminated JSON record per line, and a closing `}` line.
pub struct DumpBuilder {
    lines: Vec<String>,
}

impl DumpBuilder {
    /// Create an empty dump
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a record line (the trailing comma is added automatically)
    pub fn record(mut self, json: &str) -> Self {
        self.lines.push(format!("{},", json));
        self
    }

    /// Append a verbatim line, e.g. malformed content
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append `count` generated entity records with sequential ids
    pub fn generated_records(mut self, count: usize) -> Self {
        for i in 0..count {
            self.lines.push(format!(
                r#"{{"id":"Q{}","type":"item","labels":{{"en":{{"language":"en","value":"entity {}"}}}}}},"#,
                i, i
            ));
        }
        self
    }

    /// Compress the dump and write it to a temporary file
    pub fn build(self) -> NamedTempFile {
        let mut content = String::from("{\n");
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str("}\n");

        let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).expect("Failed to compress dump");
        let compressed = encoder.finish().expect("Failed to finish compression");

        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&compressed).expect("Failed to write dump file");
        file.flush().expect("Failed to flush dump file");
        file
    }
}

/// Progress sink that records every reported count into shared storage
pub struct RecordingSink(pub Arc<Mutex<Vec<u64>>>);

impl RecordingSink {
    pub fn shared() -> (Self, Arc<Mutex<Vec<u64>>>) {
        let counts = Arc::new(Mutex::new(Vec::new()));
        (Self(Arc::clone(&counts)), counts)
    }
}

impl ProgressSink for RecordingSink {
    fn processed(&mut self, count: u64) {
        self.0.lock().unwrap().push(count);
    }
}
