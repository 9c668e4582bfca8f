//! Incremental JSON recognizer.
//!
//! Only `{` and `[` raise nesting depth, and only their matching `}`/`]`
//! lower it again; everything else (numbers, `true`/`false`/`null`,
//! whitespace, string contents) leaves depth untouched. A bare top-level
//! scalar therefore never opens a document on its own — only a container
//! opener does, which keeps the model identical to the UBJSON recognizer.

use crate::error::ParseError;
use crate::recognizer::Recognizer;

pub(crate) struct JsonRecognizer {
    depth: usize,
    in_string: bool,
    escape: bool,
}

impl JsonRecognizer {
    pub(crate) fn new() -> Self {
        Self {
            depth: 0,
            in_string: false,
            escape: false,
        }
    }
}

impl Recognizer for JsonRecognizer {
    fn depth(&self) -> usize {
        self.depth
    }

    fn at_rest(&self) -> bool {
        true
    }

    fn step(&mut self, byte: u8, offset: u64) -> Result<(), ParseError> {
        if self.in_string {
            if self.escape {
                self.escape = false;
            } else if byte == b'\\' {
                self.escape = true;
            } else if byte == b'"' {
                self.in_string = false;
            }
            return Ok(());
        }

        match byte {
            b'"' => self.in_string = true,
            b'{' | b'[' => self.depth += 1,
            b'}' | b']' => {
                if self.depth == 0 {
                    return Err(ParseError::UnexpectedByte { offset, byte });
                }
                self.depth -= 1;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Transition;

    fn run(bytes: &[u8]) -> (usize, Vec<Transition>) {
        let mut r = JsonRecognizer::new();
        let mut out = Vec::new();
        for (i, &b) in bytes.iter().enumerate() {
            out.push(r.feed(b, i as u64, 0).unwrap());
        }
        (r.depth(), out)
    }

    #[test]
    fn object_opens_and_closes() {
        let (depth, t) = run(br#"{"a":[true,2,"3",[4,1.0,-1,-1.0],[],{}]}"#);
        assert_eq!(depth, 0);
        assert_eq!(t[0], Transition::Opened);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }

    #[test]
    fn escaped_quote_and_brace_inside_string_are_ignored() {
        let (depth, t) = run(br#"{"a}":3}"#);
        assert_eq!(depth, 0);
        assert_eq!(t[0], Transition::Opened);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }

    #[test]
    fn escaped_backslash_quote_in_string() {
        let (depth, t) = run(br#"{"b\"}":3}"#);
        assert_eq!(depth, 0);
        assert_eq!(*t.last().unwrap(), Transition::Closed);
    }
}
