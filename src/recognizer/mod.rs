//! Per-format incremental recognizers.
//!
//! Each recognizer consumes one byte at a time and tracks a nesting `depth`.
//! A document boundary is purely a function of how `depth` moves relative to
//! the configured `startdepth`: crossing from `startdepth` to `startdepth + 1`
//! opens a document, crossing back down closes it. This model is shared
//! across XML, JSON and UBJSON; only the byte-level state machine that
//! decides *when* depth changes differs per format.

pub(crate) mod json;
pub(crate) mod ubjson;
pub(crate) mod xml;

use crate::error::ParseError;

/// What happened to the nesting depth as a result of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Depth did not cross the `startdepth` boundary.
    None,
    /// Depth rose from `startdepth` to `startdepth + 1`: a document starts
    /// at this byte.
    Opened,
    /// Depth fell from `startdepth + 1` to `startdepth`: a document ends
    /// at this byte, inclusive.
    Closed,
}

/// A single-byte-at-a-time recognizer for one document format.
///
/// Implementors only need to track `depth` and advance their internal state
/// machine in [`step`](Recognizer::step); boundary detection is handled once,
/// generically, by the default [`feed`](Recognizer::feed) method.
pub(crate) trait Recognizer {
    /// Current nesting depth. Starts at `0` and must change by at most one
    /// per call to [`step`](Recognizer::step).
    fn depth(&self) -> usize;

    /// Whether the recognizer is in a state with no partially-committed
    /// markup (for XML: plain text, not mid-tag/comment/CDATA/DOCTYPE).
    /// JSON and UBJSON have no such ambiguous state and always return
    /// `true`.
    fn at_rest(&self) -> bool;

    /// Advances the state machine by one byte found at stream `offset`.
    fn step(&mut self, byte: u8, offset: u64) -> Result<(), ParseError>;

    /// Whether a run of non-depth-changing markup (an XML comment, PI or
    /// `DOCTYPE`) was seen at `startdepth` since the last document closed.
    /// Such markup must stay attached as a prefix of whatever document
    /// follows it rather than be skipped, even once the recognizer has
    /// returned to rest. JSON and UBJSON have no such markup and never set
    /// this, so the default no-op is correct for them.
    fn pending(&self) -> bool {
        false
    }

    /// Sets or clears the pending-attachment flag described on
    /// [`pending`](Recognizer::pending). No-op for recognizers that never
    /// set it.
    fn set_pending(&mut self, _pending: bool) {}

    /// True when the recognizer is not currently anchoring a potential
    /// document start, i.e. bytes fed now may be safely skipped if no
    /// document boundary results.
    fn is_idle(&self, startdepth: usize) -> bool {
        self.depth() < startdepth || (self.depth() == startdepth && self.at_rest() && !self.pending())
    }

    /// Feeds one byte and reports whether it opened or closed a document at
    /// `startdepth`.
    fn feed(&mut self, byte: u8, offset: u64, startdepth: usize) -> Result<Transition, ParseError> {
        let before_depth = self.depth();
        let before_rest = self.at_rest();
        self.step(byte, offset)?;
        let after_depth = self.depth();

        let transition = if before_depth == startdepth && after_depth == startdepth + 1 {
            Transition::Opened
        } else if before_depth == startdepth + 1 && after_depth == startdepth {
            Transition::Closed
        } else {
            Transition::None
        };

        match transition {
            // A document just closed: the next run of plain filler before
            // whatever follows is skippable again.
            Transition::Closed => self.set_pending(false),
            // Left rest at startdepth without opening a document: this is a
            // comment/PI/DOCTYPE excursion that must stay attached to the
            // document that eventually follows it.
            Transition::None if before_depth == startdepth && before_rest && !self.at_rest() => {
                self.set_pending(true);
            }
            _ => {}
        }

        Ok(transition)
    }
}
