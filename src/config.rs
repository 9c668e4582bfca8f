//! Split configuration.

use crate::error::ConfigError;

/// The document format a [`Splitter`](crate::engine::Splitter) should recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Well-formed XML documents, one top-level element each.
    Xml,
    /// JSON values (objects, arrays, or any scalar nested inside one of those).
    Json,
    /// Universal Binary JSON values.
    Ubjson,
}

/// Settings that control how [`split`](crate::split) finds document boundaries.
///
/// Values are validated when the configuration is used to build a
/// [`Splitter`](crate::engine::Splitter), not at each setter call, mirroring
/// how the reader this crate is modeled on defers validation to first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    format: Format,
    bufsize: usize,
    startdepth: usize,
    preamble: Vec<u8>,
    strict: bool,
}

impl SplitConfig {
    /// Creates a configuration for `format` with all other values defaulted:
    /// `bufsize = 4096`, `startdepth = 0`, no preamble, `strict = false`.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            bufsize: 4096,
            startdepth: 0,
            preamble: Vec::new(),
            strict: false,
        }
    }

    /// Sets the internal read buffer size, in bytes. Must be at least 1.
    pub fn bufsize(mut self, bufsize: usize) -> Self {
        self.bufsize = bufsize;
        self
    }

    /// Sets the nesting depth at which a document is considered to start.
    ///
    /// A `startdepth` of `0` splits top-level documents. A nonzero value
    /// extracts repeated children out of a constant wrapper, treating the
    /// wrapper's own markup as unsplit context.
    pub fn startdepth(mut self, startdepth: usize) -> Self {
        self.startdepth = startdepth;
        self
    }

    /// Bytes logically prepended to the stream before any bytes read from
    /// the reader, useful for re-injecting a wrapper opening tag that was
    /// consumed elsewhere.
    pub fn preamble(mut self, preamble: impl Into<Vec<u8>>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// When `false` (the default), a document left incomplete at
    /// end-of-stream is silently dropped. Set to `true` to opt into
    /// surfacing this as a [`ParseError::UnexpectedEof`](crate::error::ParseError::UnexpectedEof)
    /// instead.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.bufsize == 0 {
            return Err(ConfigError::ZeroBufsize);
        }
        Ok(())
    }

    pub(crate) fn format(&self) -> Format {
        self.format
    }

    pub(crate) fn bufsize_value(&self) -> usize {
        self.bufsize
    }

    pub(crate) fn startdepth_value(&self) -> usize {
        self.startdepth
    }

    pub(crate) fn preamble_bytes(&self) -> &[u8] {
        &self.preamble
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SplitConfig::new(Format::Json);
        assert_eq!(cfg.format(), Format::Json);
        assert_eq!(cfg.bufsize_value(), 4096);
        assert_eq!(cfg.startdepth_value(), 0);
        assert!(cfg.preamble_bytes().is_empty());
        assert!(!cfg.is_strict());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_bufsize_rejected() {
        let cfg = SplitConfig::new(Format::Xml).bufsize(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroBufsize));
    }

    #[test]
    fn builder_chaining() {
        let cfg = SplitConfig::new(Format::Ubjson)
            .bufsize(1)
            .startdepth(1)
            .preamble(b"<logfile>".to_vec())
            .strict(false);
        assert_eq!(cfg.bufsize_value(), 1);
        assert_eq!(cfg.startdepth_value(), 1);
        assert_eq!(cfg.preamble_bytes(), b"<logfile>");
        assert!(!cfg.is_strict());
    }
}
