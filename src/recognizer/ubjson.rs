//! Incremental UBJSON (Universal Binary JSON) recognizer.
//!
//! Every value is introduced by a one-byte marker. Containers (`{`/`[`) are
//! the only markers that change nesting depth; every other marker consumes
//! a fixed or length-prefixed run of opaque payload bytes that are never
//! reinterpreted as markers themselves, even if they happen to contain
//! bytes like `{` or `}`. Optimized, count-and-type containers (`#`/`$`)
//! are not recognized.

use crate::error::ParseError;
use crate::recognizer::Recognizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting a marker byte, a container open/close, or skippable noise.
    Ready,
    /// Skipping `remaining` more raw payload bytes.
    Skip(u32),
    /// Just saw `S` or `H`, expecting the nested numeric marker that gives
    /// the byte width of the following length field.
    LengthMarker,
    /// Accumulating a big-endian length value. `remaining` counts down to 0.
    LengthBytes { remaining: u8, acc: u64 },
}

fn fixed_width(marker: u8) -> Option<u32> {
    match marker {
        b'i' | b'U' | b'C' => Some(1),
        b'I' => Some(2),
        b'l' | b'd' => Some(4),
        b'L' | b'D' => Some(8),
        _ => None,
    }
}

fn length_marker_width(marker: u8) -> Option<u8> {
    match marker {
        b'i' | b'U' => Some(1),
        b'I' => Some(2),
        b'l' => Some(4),
        b'L' => Some(8),
        _ => None,
    }
}

pub(crate) struct UbjsonRecognizer {
    state: State,
    depth: usize,
}

impl UbjsonRecognizer {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Ready,
            depth: 0,
        }
    }
}

impl Recognizer for UbjsonRecognizer {
    fn depth(&self) -> usize {
        self.depth
    }

    fn at_rest(&self) -> bool {
        matches!(self.state, State::Ready)
    }

    fn step(&mut self, byte: u8, offset: u64) -> Result<(), ParseError> {
        match self.state {
            State::Skip(remaining) => {
                self.state = if remaining <= 1 {
                    State::Ready
                } else {
                    State::Skip(remaining - 1)
                };
            }
            State::LengthMarker => match length_marker_width(byte) {
                Some(width) => {
                    self.state = State::LengthBytes { remaining: width, acc: 0 };
                }
                None => return Err(ParseError::InvalidMarker { offset, marker: byte }),
            },
            State::LengthBytes { remaining, acc } => {
                let acc = (acc << 8) | byte as u64;
                if remaining <= 1 {
                    self.state = if acc == 0 {
                        State::Ready
                    } else {
                        State::Skip(acc as u32)
                    };
                } else {
                    self.state = State::LengthBytes { remaining: remaining - 1, acc };
                }
            }
            State::Ready => match byte {
                b'{' | b'[' => self.depth += 1,
                b'}' | b']' => {
                    if self.depth == 0 {
                        return Err(ParseError::UnexpectedByte { offset, byte });
                    }
                    self.depth -= 1;
                }
                b'Z' | b'N' | b'T' | b'F' => {}
                b'S' | b'H' => self.state = State::LengthMarker,
                _ => match fixed_width(byte) {
                    Some(width) => self.state = State::Skip(width),
                    // Outside of any container, a byte that is not a
                    // recognized marker is tolerated as padding (the original
                    // implementation's test suite interleaves literal
                    // whitespace between documents as filler). Inside a
                    // container such a byte cannot be safely skipped, since
                    // its width is unknown, so it is a real error.
                    None if self.depth == 0 => {}
                    None => return Err(ParseError::InvalidMarker { offset, marker: byte }),
                },
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Transition;

    fn run(bytes: &[u8]) -> (usize, Vec<Transition>) {
        let mut r = UbjsonRecognizer::new();
        let mut out = Vec::new();
        for (i, &b) in bytes.iter().enumerate() {
            out.push(r.feed(b, i as u64, 0).unwrap());
        }
        (r.depth(), out)
    }

    #[test]
    fn single_scalar_does_not_open() {
        let (depth, t) = run(b"[T]");
        assert_eq!(depth, 0);
        assert_eq!(t[0], Transition::Opened);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }

    #[test]
    fn one_byte_payload_consumes_structural_looking_bytes() {
        // "{C{C{}" is a complete document: the 'C' markers each consume the
        // following byte (even `{`) as opaque payload.
        let (depth, t) = run(b"{C{C{}");
        assert_eq!(depth, 0);
        assert_eq!(t[0], Transition::Opened);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }

    #[test]
    fn length_prefixed_string_payload_is_opaque() {
        // S i 0x07 <7 bytes, here '}' repeated> then a real closing '}'.
        let mut data = vec![b'{', b'C', b'{', b'S', b'i', 0x07];
        data.extend(std::iter::repeat(b'}').take(7));
        data.push(b'}');
        let (depth, t) = run(&data);
        assert_eq!(depth, 0);
        assert_eq!(t[0], Transition::Opened);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }

    #[test]
    fn bare_top_level_scalar_never_opens() {
        let mut r = UbjsonRecognizer::new();
        let t = r.feed(b'T', 0, 0).unwrap();
        assert_eq!(t, Transition::None);
        assert_eq!(r.depth(), 0);
    }
}
