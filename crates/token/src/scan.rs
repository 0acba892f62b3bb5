// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Left-to-right template scanner emitting literal and token segments.
//!
//! Recognizes the bare `$NAME` and braced `${NAME, key="value"}` forms.
//! Everything else flows through as literal text: a `$` before a non-name
//! character, an unterminated `${`, a braced body without a well-formed
//! name. Backslashes have no structural meaning here; a token right after
//! one still expands, with the backslash carried through. The scanner never
//! fails.

use crate::span::Span;

/// One scanned piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any token, passed through verbatim.
    Literal(&'a str),
    /// A macro reference.
    Token(Token<'a>),
}

impl<'a> Segment<'a> {
    /// The raw source text this segment covers.
    pub fn raw(&self) -> &'a str {
        match self {
            Segment::Literal(text) => text,
            Segment::Token(token) => token.raw,
        }
    }
}

/// A `$NAME` or `${NAME, ...}` reference found in template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Macro name; never empty.
    pub name: &'a str,
    /// Unparsed argument text between the name and the closing brace.
    /// Empty for the bare form.
    pub args_src: &'a str,
    /// Full source slice of the token, from `$` through the last name
    /// character or the closing brace.
    pub raw: &'a str,
    /// Byte span of `raw` in the scanned input.
    pub span: Span,
}

/// Lazy scanner over one template string.
///
/// Alternates literal and token segments; the concatenation of all segments'
/// raw text reproduces the input exactly.
pub struct TokenScanner<'a> {
    input: &'a str,
    /// Byte offset of the scan frontier.
    pos: usize,
    /// Token found while a literal run was still open.
    pending: Option<Token<'a>>,
}

impl<'a> TokenScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0, pending: None }
    }

    /// Try to read a token starting at the `$` at byte offset `dollar`.
    ///
    /// Returns None when the `$` does not open a token; the caller then
    /// treats it as one literal character and keeps scanning after it.
    fn token_at(&self, dollar: usize) -> Option<Token<'a>> {
        let after = &self.input[dollar + 1..];
        match after.chars().next() {
            Some('{') => self.braced_at(dollar),
            Some(ch) if is_name_start(ch) => Some(self.bare_at(dollar)),
            _ => None,
        }
    }

    /// Bare form: `$NAME`. The first name character is already validated.
    fn bare_at(&self, dollar: usize) -> Token<'a> {
        let name_start = dollar + 1;
        let rest = &self.input[name_start..];
        let name_len = rest
            .char_indices()
            .find(|&(_, ch)| !is_name_char(ch))
            .map_or(rest.len(), |(offset, _)| offset);
        let end = name_start + name_len;
        Token {
            name: &self.input[name_start..end],
            args_src: "",
            raw: &self.input[dollar..end],
            span: Span::new(dollar, end),
        }
    }

    /// Braced form: `${NAME ...}`.
    ///
    /// Whitespace around the name is insignificant. The argument text is
    /// left unparsed for the argument parser. Returns None when there is no
    /// closing brace or no well-formed name.
    fn braced_at(&self, dollar: usize) -> Option<Token<'a>> {
        let inner_start = dollar + 2;
        let close = inner_start + find_closing_brace(&self.input[inner_start..])?;
        let inner = &self.input[inner_start..close];

        let name_offset = inner.len() - inner.trim_start().len();
        let name_len = leading_name_len(&inner[name_offset..]);
        if name_len == 0 {
            return None;
        }

        let name_start = inner_start + name_offset;
        let end = close + 1;
        Some(Token {
            name: &self.input[name_start..name_start + name_len],
            args_src: &self.input[name_start + name_len..close],
            raw: &self.input[dollar..end],
            span: Span::new(dollar, end),
        })
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(Segment::Token(token));
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let literal_start = self.pos;
        for (offset, ch) in self.input[literal_start..].char_indices() {
            if ch != '$' {
                continue;
            }
            let dollar = literal_start + offset;
            let Some(token) = self.token_at(dollar) else {
                // Literal `$`, keep scanning after it
                continue;
            };
            self.pos = token.span.end;
            if dollar > literal_start {
                self.pending = Some(token);
                return Some(Segment::Literal(&self.input[literal_start..dollar]));
            }
            return Some(Segment::Token(token));
        }

        self.pos = self.input.len();
        Some(Segment::Literal(&self.input[literal_start..]))
    }
}

/// Byte offset of the first `}` outside double quotes, if any.
///
/// Braces inside quoted argument values do not close the token; an input
/// with no unquoted `}` has no braced token at all.
fn find_closing_brace(s: &str) -> Option<usize> {
    let mut quote = QuoteState::default();
    for (offset, ch) in s.char_indices() {
        if quote.process(ch) {
            continue;
        }
        if ch == '}' {
            return Some(offset);
        }
    }
    None
}

/// Track double-quote state during the closing-brace search.
#[derive(Default)]
struct QuoteState {
    in_quote: bool,
    escaped: bool,
}

impl QuoteState {
    /// Process a character, updating quote state.
    /// Returns true if the character belongs to quoting (a quote mark, an
    /// escape, or anything inside quotes) and must not close the token.
    fn process(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return true;
        }
        match ch {
            '\\' if self.in_quote => {
                self.escaped = true;
                true
            }
            '"' => {
                self.in_quote = !self.in_quote;
                true
            }
            _ => self.in_quote,
        }
    }
}

/// Byte length of a leading macro name in `s`, 0 if none.
fn leading_name_len(s: &str) -> usize {
    match s.chars().next() {
        Some(ch) if is_name_start(ch) => {}
        _ => return 0,
    }
    s.char_indices().find(|&(_, ch)| !is_name_char(ch)).map_or(s.len(), |(offset, _)| offset)
}

/// Names start with a letter or underscore so literal text like `$69.99`
/// or `$40,000` is never mistaken for a token.
pub(crate) fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub(crate) fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
