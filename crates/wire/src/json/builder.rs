//! Append-only builder for nested JSON arrays of raw scalars
//!
//! All bracket and separator placement for the log data wire form lives
//! here. Callers feed a token stream and get back either one balanced array
//! or an error; a partially written string never escapes.
//!
//! ## Separator rules
//!
//! | Before | Separator (if not first in its array) |
//! |--------|---------------------------------------|
//! | `[`    | `,`                                   |
//! | scalar | `, `                                  |
//!
//! Scalars are copied verbatim. The builder never quotes or re-formats them.

use super::error::TranscodeError;

/// One step of the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `[`
    Open,
    /// `]`
    Close,
    /// Raw scalar text
    Scalar(&'a str),
}

/// Builds exactly one nested array from a stream of [`Token`]s
#[derive(Debug, Default)]
pub struct NestedArrayBuilder {
    out: String,
    // One entry per open array: whether it already holds an element.
    open: Vec<bool>,
    done: bool,
}

impl NestedArrayBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` bytes of output
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append one token
    pub fn push(&mut self, token: Token<'_>) -> Result<(), TranscodeError> {
        match token {
            Token::Open => self.open(),
            Token::Close => self.close(),
            Token::Scalar(raw) => self.scalar(raw),
        }
    }

    /// Append every token of `tokens` in order
    pub fn extend<'a, I>(&mut self, tokens: I) -> Result<(), TranscodeError>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        tokens.into_iter().try_for_each(|token| self.push(token))
    }

    /// Open a nested array
    pub fn open(&mut self) -> Result<(), TranscodeError> {
        if self.done {
            return Err(TranscodeError::Unbalanced("array opened after the outer array closed"));
        }
        if self.mark_element() {
            self.out.push(',');
        }
        self.out.push('[');
        self.open.push(false);
        Ok(())
    }

    /// Close the innermost open array
    pub fn close(&mut self) -> Result<(), TranscodeError> {
        if self.open.pop().is_none() {
            return Err(TranscodeError::Unbalanced("close without a matching open"));
        }
        self.out.push(']');
        if self.open.is_empty() {
            self.done = true;
        }
        Ok(())
    }

    /// Append a raw scalar to the innermost open array
    pub fn scalar(&mut self, raw: &str) -> Result<(), TranscodeError> {
        if self.open.is_empty() {
            return Err(TranscodeError::Unbalanced("scalar outside of any array"));
        }
        if self.mark_element() {
            self.out.push_str(", ");
        }
        self.out.push_str(raw);
        Ok(())
    }

    /// Number of arrays currently open
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Return the finished array
    pub fn finish(self) -> Result<String, TranscodeError> {
        if !self.done {
            return Err(TranscodeError::Unbalanced("outer array was never closed"));
        }
        Ok(self.out)
    }

    // Records an element in the innermost array; true if a separator is due.
    fn mark_element(&mut self) -> bool {
        match self.open.last_mut() {
            Some(has_element) => std::mem::replace(has_element, true),
            None => false,
        }
    }
}
