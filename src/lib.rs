//! Wiki Dump Reader - Stream records out of compressed Wikidata-style dumps
//!
//! This library provides a lazy iterator over the entities in a
//! bzip2-compressed JSON dump. The dump format is a giant JSON array split
//! one element per line, so the reader decompresses the file as a stream,
//! strips the array framing, and parses each line independently. It supports:
//!
//! - Streaming decompression of `.json.bz2` dumps without buffering the file
//! - Skipping malformed or partial lines without aborting the traversal
//! - Periodic progress reporting through an injectable sink
//! - Deserializing lines into caller-provided types via serde
//!
//! # Example
//!
//! ```no_run
//! use wiki_dump_reader::DumpReader;
//!
//! let reader = DumpReader::new("latest-all.json.bz2");
//! for record in reader.records()? {
//!     let value = record?;
//!     println!("{}", value["id"]);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod reader;
pub mod utils;

// Re-export commonly used types
pub use reader::dump::{DumpReader, Records};
pub use reader::progress::{PROGRESS_INTERVAL, ProgressSink, StderrProgress};
pub use utils::titles::normalize_title;
