//! Splits a byte stream that concatenates an unknown number of
//! self-delimited documents — XML, JSON, or UBJSON — into the exact byte
//! range of each complete top-level document, as soon as it is available.
//!
//! ```
//! use docsplit::{split, Format, SplitConfig};
//!
//! let data = b"{\"a\":3}{\"b\":3}".as_slice();
//! let docs: Vec<_> = split(data, SplitConfig::new(Format::Json))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(docs, vec![b"{\"a\":3}".to_vec(), b"{\"b\":3}".to_vec()]);
//! ```
//!
//! The splitter reads from any [`std::io::Read`] in bounded-size chunks
//! (`bufsize`) and drives one of three hand-written, resumable byte-at-a-time
//! recognizers — no part of an input document needs to be buffered in its
//! entirety before its boundary can be found, so arbitrarily large documents
//! split in bounded memory, and the result is identical no matter how the
//! input happens to be chunked.

mod buffer;
mod config;
mod engine;
mod error;
mod recognizer;

pub use config::{Format, SplitConfig};
pub use engine::Splitter;
pub use error::{ConfigError, ParseError, Result, SplitError};

use std::io::Read;

/// Splits `reader` according to `config`, returning an iterator of document
/// byte ranges.
///
/// Fails synchronously with [`SplitError::Configuration`] if `config` is
/// invalid (for example `bufsize == 0`); all other errors surface lazily
/// from the returned iterator, at the point in the stream where they occur.
pub fn split<R: Read>(reader: R, config: SplitConfig) -> Result<Splitter<R>> {
    Splitter::new(reader, config)
}
