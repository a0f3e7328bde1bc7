//! Slice literal parser — converts `start:stop:step` text into a descriptor
//!
//! Handles: empty endpoints, signed decimal integers, symbolic names
//! (`s0`) and specialized symbols (`s0=4`). Whitespace around endpoints
//! is ignored.
//!
//! Guarantees:
//! - Deterministic: same input always produces the same descriptor
//! - Error positions: 1-based column for every error

use crate::slice::{Endpoint, SliceDescriptor};
use crate::symint::SymVar;
use crate::{Error, Result};

/// Parse slice literal text into a descriptor
///
/// # Errors
/// Returns `Parse` with the offending column for syntax violations.
///
/// # Example
/// ```
/// use symslice_core::literal::parse_slice;
/// use symslice_core::slice::Endpoint;
///
/// let desc = parse_slice("::-1").unwrap();
/// assert_eq!(desc.step, Endpoint::Index(-1));
/// ```
pub fn parse_slice(text: &str) -> Result<SliceDescriptor<SymVar>> {
    SliceParser::new(text).parse()
}

struct SliceParser {
    input: Vec<char>,
    position: usize,
}

impl SliceParser {
    fn new(text: &str) -> Self {
        SliceParser {
            input: text.chars().collect(),
            position: 0,
        }
    }

    fn parse(&mut self) -> Result<SliceDescriptor<SymVar>> {
        let start = self.endpoint()?;
        self.expect_colon()?;
        let stop = self.endpoint()?;

        let step = if self.peek() == Some(':') {
            self.advance();
            self.endpoint()?
        } else {
            Endpoint::Absent
        };

        if let Some(c) = self.peek() {
            return Err(Error::parse(
                self.column(),
                format!("Unexpected character '{}' after slice", c),
            ));
        }

        Ok(SliceDescriptor { start, stop, step })
    }

    // ── Character helpers ──────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    fn column(&self) -> usize {
        self.position + 1
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn expect_colon(&mut self) -> Result<()> {
        match self.peek() {
            Some(':') => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(Error::parse(
                self.column(),
                format!("Expected ':' but found '{}'", c),
            )),
            None => Err(Error::parse(
                self.column(),
                "Expected ':' but reached end of input",
            )),
        }
    }

    // ── Endpoints ──────────────────────────────────────────

    fn endpoint(&mut self) -> Result<Endpoint<SymVar>> {
        self.skip_whitespace();
        let endpoint = match self.peek() {
            None | Some(':') => Endpoint::Absent,
            Some(c) if c == '+' || c == '-' || c.is_ascii_digit() => {
                Endpoint::Index(self.integer()?)
            }
            Some(c) if c == '_' || c.is_ascii_alphabetic() => Endpoint::Symbolic(self.symbol()?),
            Some(c) => {
                return Err(Error::parse(
                    self.column(),
                    format!("Unexpected character '{}'", c),
                ))
            }
        };
        self.skip_whitespace();
        Ok(endpoint)
    }

    fn integer(&mut self) -> Result<i128> {
        let column = self.column();
        let mut text = String::new();
        if let Some(sign @ ('+' | '-')) = self.peek() {
            text.push(sign);
            self.advance();
        }
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance();
        }
        if !text.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(Error::parse(column, "Expected digits after sign"));
        }
        text.parse::<i128>()
            .map_err(|_| Error::parse(column, format!("Integer literal {} is too large", text)))
    }

    fn symbol(&mut self) -> Result<SymVar> {
        let mut name = String::new();
        while let Some(c) = self
            .peek()
            .filter(|c| *c == '_' || c.is_ascii_alphanumeric())
        {
            name.push(c);
            self.advance();
        }

        if self.peek() != Some('=') {
            return Ok(SymVar::new(name));
        }
        self.advance();
        let column = self.column();
        if !self
            .peek()
            .is_some_and(|c| c == '+' || c == '-' || c.is_ascii_digit())
        {
            return Err(Error::parse(
                column,
                format!("Expected a value for symbol '{}'", name),
            ));
        }
        let value = self.integer()?;
        let value = isize::try_from(value).map_err(|_| {
            Error::parse(
                column,
                format!("Value {} for symbol '{}' is out of range", value, name),
            )
        })?;
        Ok(SymVar::specialized(name, value))
    }
}
