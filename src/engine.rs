//! The split engine: drives a [`Recognizer`] over a [`Read`] source, one
//! byte at a time, and yields complete document byte ranges as they close.

use std::io::Read;

use crate::buffer::ByteBuffer;
use crate::config::{Format, SplitConfig};
use crate::error::{ParseError, Result, SplitError};
use crate::recognizer::json::JsonRecognizer;
use crate::recognizer::ubjson::UbjsonRecognizer;
use crate::recognizer::xml::XmlRecognizer;
use crate::recognizer::{Recognizer, Transition};

enum AnyRecognizer {
    Xml(XmlRecognizer),
    Json(JsonRecognizer),
    Ubjson(UbjsonRecognizer),
}

impl AnyRecognizer {
    fn for_format(format: Format) -> Self {
        match format {
            Format::Xml => AnyRecognizer::Xml(XmlRecognizer::new()),
            Format::Json => AnyRecognizer::Json(JsonRecognizer::new()),
            Format::Ubjson => AnyRecognizer::Ubjson(UbjsonRecognizer::new()),
        }
    }
}

impl Recognizer for AnyRecognizer {
    fn depth(&self) -> usize {
        match self {
            AnyRecognizer::Xml(r) => r.depth(),
            AnyRecognizer::Json(r) => r.depth(),
            AnyRecognizer::Ubjson(r) => r.depth(),
        }
    }

    fn at_rest(&self) -> bool {
        match self {
            AnyRecognizer::Xml(r) => r.at_rest(),
            AnyRecognizer::Json(r) => r.at_rest(),
            AnyRecognizer::Ubjson(r) => r.at_rest(),
        }
    }

    fn pending(&self) -> bool {
        match self {
            AnyRecognizer::Xml(r) => r.pending(),
            AnyRecognizer::Json(r) => r.pending(),
            AnyRecognizer::Ubjson(r) => r.pending(),
        }
    }

    fn set_pending(&mut self, pending: bool) {
        match self {
            AnyRecognizer::Xml(r) => r.set_pending(pending),
            AnyRecognizer::Json(r) => r.set_pending(pending),
            AnyRecognizer::Ubjson(r) => r.set_pending(pending),
        }
    }

    fn step(&mut self, byte: u8, offset: u64) -> std::result::Result<(), ParseError> {
        match self {
            AnyRecognizer::Xml(r) => r.step(byte, offset),
            AnyRecognizer::Json(r) => r.step(byte, offset),
            AnyRecognizer::Ubjson(r) => r.step(byte, offset),
        }
    }
}

/// Splits a byte stream of concatenated documents into exact byte ranges,
/// one per complete top-level document, in the order they close.
///
/// Created by [`split`](crate::split). Implements [`Iterator`], yielding
/// `Ok(Vec<u8>)` for each document and stopping (returning `None`) after
/// the first error or at a clean end of stream.
pub struct Splitter<R> {
    reader: R,
    buf: ByteBuffer,
    recognizer: AnyRecognizer,
    startdepth: usize,
    bufsize: usize,
    strict: bool,
    base_offset: u64,
    read_chunk: Vec<u8>,
    eof: bool,
    done: bool,
}

impl<R: Read> Splitter<R> {
    pub(crate) fn new(reader: R, config: SplitConfig) -> Result<Self> {
        config.validate()?;
        let mut buf = ByteBuffer::new();
        buf.extend(config.preamble_bytes());
        Ok(Self {
            reader,
            buf,
            recognizer: AnyRecognizer::for_format(config.format()),
            startdepth: config.startdepth_value(),
            bufsize: config.bufsize_value(),
            strict: config.is_strict(),
            base_offset: 0,
            read_chunk: vec![0u8; config.bufsize_value()],
            eof: false,
            done: false,
        })
    }

    fn fill_buffer(&mut self) -> std::io::Result<()> {
        let discarded = self.buf.compact();
        self.base_offset += discarded as u64;
        self.buf.reserve(self.bufsize);
        let n = self.reader.read(&mut self.read_chunk)?;
        if n == 0 {
            self.eof = true;
        } else {
            self.buf.extend(&self.read_chunk[..n]);
        }
        Ok(())
    }
}

impl<R: Read> Iterator for Splitter<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if !self.buf.has_next() {
                if self.eof {
                    self.done = true;
                    // `depth` legitimately ends up below `startdepth` once a
                    // wrapper used only to reach a nonzero `startdepth` has
                    // fully closed; only a depth still *above* `startdepth`
                    // means a document was left open.
                    if self.recognizer.depth() > self.startdepth {
                        if self.strict {
                            let offset = self.base_offset + self.buf.anchor() as u64;
                            return Some(Err(SplitError::from(ParseError::UnexpectedEof { offset })));
                        }
                    }
                    return None;
                }
                if let Err(e) = self.fill_buffer() {
                    self.done = true;
                    return Some(Err(SplitError::from(e)));
                }
                continue;
            }

            let pos = self.buf.cursor();
            let byte = self.buf.advance().expect("checked has_next above");
            let offset = self.base_offset + pos as u64;

            match self.recognizer.feed(byte, offset, self.startdepth) {
                Ok(Transition::Opened) => {}
                Ok(Transition::Closed) => {
                    let doc = self.buf.anchored_slice().to_vec();
                    self.buf.set_anchor_to_cursor();
                    return Some(Ok(doc));
                }
                Ok(Transition::None) => {
                    if self.recognizer.is_idle(self.startdepth) {
                        self.buf.set_anchor_to_cursor();
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(SplitError::from(e)));
                }
            }
        }
    }
}
