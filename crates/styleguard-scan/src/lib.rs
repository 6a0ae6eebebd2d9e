//! Source scanner: turns a text buffer into line records for rule evaluation.
//!
//! The scanner never rejects input. Every buffer, however malformed, is treated
//! as opaque text and split on `\n`. Iteration is lazy and restartable: each call
//! to [`Source::lines`] starts again from the first line.

#![forbid(unsafe_code)]

mod bindings;
mod lexer;
mod suppress;

#[cfg(test)]
mod proptest;

use bindings::DeclarationTracker;
use lexer::Lexer;
use std::iter::FusedIterator;

pub use bindings::Binding;
pub use suppress::{parse_directive, Directive, DirectiveKind};

/// A borrowed text buffer ready to be scanned.
#[derive(Clone, Copy, Debug)]
pub struct Source<'a> {
    text: &'a str,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Iterate over line records from the start of the buffer.
    pub fn lines(&self) -> LineRecords<'a> {
        LineRecords {
            rest: self.text,
            number: 0,
            lexer: Lexer::default(),
            declarations: DeclarationTracker::default(),
        }
    }
}

impl<'a> IntoIterator for &Source<'a> {
    type Item = LineRecord<'a>;
    type IntoIter = LineRecords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Leading-whitespace composition of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indentation {
    pub tabs: u32,
    pub spaces: u32,
    /// Any other Unicode whitespace (no-break space, BOM-adjacent oddities, ...).
    pub other: u32,
}

impl Indentation {
    pub fn of(text: &str) -> Self {
        let mut indent = Indentation::default();
        for c in text.chars() {
            match c {
                '\t' => indent.tabs += 1,
                ' ' => indent.spaces += 1,
                c if c.is_whitespace() => indent.other += 1,
                _ => break,
            }
        }
        indent
    }

    /// Number of leading whitespace characters.
    pub fn width(&self) -> u32 {
        self.tabs + self.spaces + self.other
    }

    pub fn is_mixed(&self) -> bool {
        self.tabs > 0 && self.spaces > 0
    }
}

/// One line of the scanned buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// 1-based line number.
    pub number: u32,
    /// Line content without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
    pub indent: Indentation,
    /// `text` with comment bodies and string-literal contents replaced by spaces.
    /// Always has the same number of characters as `text`.
    pub code: String,
    /// Whether the line was ended by `\n`. Only the last line of a buffer can be unterminated.
    pub terminated: bool,
    /// Inline suppression directive carried by this line, if any.
    pub directive: Option<Directive>,
    /// Names declared on this line, in order. Offsets index into `code`.
    pub bindings: Vec<Binding>,
}

impl<'a> LineRecord<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of characters in the line.
    pub fn char_len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    /// 1-based column of a byte offset into [`LineRecord::code`].
    pub fn code_column(&self, byte_offset: usize) -> u32 {
        let end = byte_offset.min(self.code.len());
        self.code[..end].chars().count() as u32 + 1
    }

    /// 1-based column of a byte offset into [`LineRecord::text`].
    pub fn text_column(&self, byte_offset: usize) -> u32 {
        let end = byte_offset.min(self.text.len());
        self.text[..end].chars().count() as u32 + 1
    }

    /// Slice of the raw text starting at a 1-based `column`, `len` characters long.
    ///
    /// Out-of-range requests are clamped to the end of the line.
    pub fn snippet(&self, column: u32, len: usize) -> &'a str {
        let text: &'a str = self.text;
        let skip = column.saturating_sub(1) as usize;
        let mut indices = text.char_indices().map(|(i, _)| i).skip(skip);
        let Some(start) = indices.next() else {
            return "";
        };
        let end = text[start..]
            .char_indices()
            .nth(len)
            .map(|(i, _)| start + i)
            .unwrap_or(text.len());
        &text[start..end]
    }
}

/// Lazy iterator over the lines of a [`Source`].
#[derive(Clone, Debug)]
pub struct LineRecords<'a> {
    rest: &'a str,
    number: u32,
    lexer: Lexer,
    declarations: DeclarationTracker,
}

impl<'a> Iterator for LineRecords<'a> {
    type Item = LineRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (text, terminated) = match self.rest.find('\n') {
            Some(i) => {
                let raw = &self.rest[..i];
                self.rest = &self.rest[i + 1..];
                (raw.strip_suffix('\r').unwrap_or(raw), true)
            }
            None => {
                let raw = self.rest;
                self.rest = "";
                (raw, false)
            }
        };

        self.number += 1;
        let code = self.lexer.mask_line(text);
        let bindings = self.declarations.scan_line(&code);
        Some(LineRecord {
            number: self.number,
            text,
            indent: Indentation::of(text),
            code,
            terminated,
            directive: parse_directive(text),
            bindings,
        })
    }
}

impl FusedIterator for LineRecords<'_> {}
