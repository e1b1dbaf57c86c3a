//! CSS selector parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{
    Combinator, ComplexSelector, CompoundSelector, ParseError, SelectorList, SimpleSelector,
};
use core::mem::take;

/// Internal tokenizer token kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok {
    /// An explicit child combinator `>`.
    Child,
    /// Whitespace that implies a descendant combinator.
    DescendantWS,
    /// A simple selector token (type, class, id, attribute, universal).
    Simple(SimpleSelector),
}

/// Tokenizer over a selector string.
struct SelectorTokenizer<'input> {
    input_bytes: &'input [u8],
    /// Current cursor index into `input_bytes`.
    index: usize,
    /// Whether a descendant whitespace token is owed on the next `next()` call.
    pending_whitespace: bool,
}

impl<'input> SelectorTokenizer<'input> {
    fn new(input: &'input str) -> Self {
        Self {
            input_bytes: input.as_bytes(),
            index: 0,
            pending_whitespace: false,
        }
    }

    /// Return the next selector token, if any. Whitespace between tokens
    /// is emitted as a descendant combinator before the token after it.
    fn next(&mut self) -> Result<Option<Tok>, ParseError> {
        self.skip_whitespace_descendant();
        if self.pending_whitespace {
            self.pending_whitespace = false;
            return Ok(Some(Tok::DescendantWS));
        }
        let Some(&current) = self.input_bytes.get(self.index) else {
            return Ok(None);
        };
        match current {
            b'*' => {
                self.index += 1;
                Ok(Some(Tok::Simple(SimpleSelector::Universal)))
            }
            b'.' => {
                self.index += 1;
                Ok(Some(Tok::Simple(SimpleSelector::Class(
                    self.consume_ident()?,
                ))))
            }
            b'#' => {
                self.index += 1;
                Ok(Some(Tok::Simple(SimpleSelector::Id(
                    self.consume_ident()?,
                ))))
            }
            b'[' => Ok(Some(Tok::Simple(self.consume_attr()?))),
            b'>' => {
                self.index += 1;
                // Whitespace after '>' is not a second combinator.
                self.skip_whitespace_descendant();
                self.pending_whitespace = false;
                Ok(Some(Tok::Child))
            }
            byte if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' => Ok(Some(
                Tok::Simple(SimpleSelector::Type(self.consume_ident()?)),
            )),
            other => Err(ParseError::UnexpectedChar {
                at: self.index,
                found: char::from(other),
            }),
        }
    }

    /// Skip whitespace and mark that a descendant combinator should be emitted next.
    fn skip_whitespace_descendant(&mut self) {
        let mut saw = false;
        while self
            .input_bytes
            .get(self.index)
            .is_some_and(u8::is_ascii_whitespace)
        {
            saw = true;
            self.index += 1;
        }
        if saw {
            self.pending_whitespace = true;
        }
    }

    /// Consume an identifier of ASCII alphanumerics, '-' and '_', lowercased.
    fn consume_ident(&mut self) -> Result<String, ParseError> {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                self.index += 1;
            } else {
                break;
            }
        }
        if self.index == start {
            return Err(ParseError::UnexpectedChar {
                at: start,
                found: self
                    .input_bytes
                    .get(start)
                    .map_or(' ', |&byte| char::from(byte)),
            });
        }
        let slice = &self.input_bytes[start..self.index];
        Ok(String::from_utf8_lossy(slice).to_ascii_lowercase())
    }

    /// Parse `[name]` and `[name=value]` (quoted or unquoted) after '['.
    fn consume_attr(&mut self) -> Result<SimpleSelector, ParseError> {
        // skip '['
        self.index += 1;
        self.skip_spaces();
        let name = self.consume_ident()?;
        self.skip_spaces();
        let selector = if self.input_bytes.get(self.index) == Some(&b'=') {
            self.index += 1;
            self.skip_spaces();
            let value = match self.input_bytes.get(self.index) {
                Some(&quote @ (b'"' | b'\'')) => {
                    self.index += 1;
                    self.consume_quoted_attr_value(quote)?
                }
                _ => self.consume_unquoted_attr_value(),
            };
            SimpleSelector::AttrEquals { name, value }
        } else {
            SimpleSelector::AttrExists(name)
        };
        self.skip_spaces();
        if self.input_bytes.get(self.index) != Some(&b']') {
            return Err(ParseError::UnclosedAttribute);
        }
        self.index += 1;
        Ok(selector)
    }

    /// Consume an unquoted attribute value until whitespace or a closing bracket.
    fn consume_unquoted_attr_value(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_whitespace() || byte == b']' {
                break;
            }
            self.index += 1;
        }
        String::from_utf8_lossy(&self.input_bytes[start..self.index]).to_string()
    }

    /// Consume a quoted attribute value until the matching quote byte.
    fn consume_quoted_attr_value(&mut self, quote: u8) -> Result<String, ParseError> {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(&byte) if byte != quote) {
            self.index += 1;
        }
        if self.input_bytes.get(self.index).is_none() {
            return Err(ParseError::UnclosedAttribute);
        }
        let out = String::from_utf8_lossy(&self.input_bytes[start..self.index]).to_string();
        self.index += 1;
        Ok(out)
    }

    /// Skip ASCII whitespace without recording a descendant combinator.
    fn skip_spaces(&mut self) {
        while self
            .input_bytes
            .get(self.index)
            .is_some_and(u8::is_ascii_whitespace)
        {
            self.index += 1;
        }
    }
}

/// Parse a comma-separated selector list.
/// Spec: Section 4
pub fn parse_selector_list(input: &str) -> Result<SelectorList, ParseError> {
    let mut list = SelectorList::default();
    for part in input.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        list.selectors.push(parse_complex_selector(trimmed)?);
    }
    if list.selectors.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(list)
}

/// Parse one complex selector.
/// Spec: Section 5–8, 11
pub fn parse_complex_selector(input: &str) -> Result<ComplexSelector, ParseError> {
    let mut tokens = SelectorTokenizer::new(input);
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    let mut combinators: Vec<Combinator> = Vec::new();
    let mut current = CompoundSelector::default();
    let mut pending: Option<Combinator> = None;

    while let Some(token) = tokens.next()? {
        match token {
            Tok::Child => {
                if current.simples.is_empty() && compounds.is_empty() {
                    return Err(ParseError::DanglingCombinator);
                }
                if !current.simples.is_empty() {
                    compounds.push(take(&mut current));
                }
                pending = Some(Combinator::Child);
            }
            Tok::DescendantWS => {
                if !current.simples.is_empty() {
                    compounds.push(take(&mut current));
                    if pending.is_none() {
                        pending = Some(Combinator::Descendant);
                    }
                }
            }
            Tok::Simple(simple) => {
                if current.simples.is_empty() && !compounds.is_empty() {
                    combinators.push(pending.take().unwrap_or(Combinator::Descendant));
                }
                current.simples.push(simple);
            }
        }
    }

    if current.simples.is_empty() {
        if compounds.is_empty() {
            return Err(ParseError::Empty);
        }
        // Trailing whitespace is harmless; a trailing '>' is not.
        if pending == Some(Combinator::Child) {
            return Err(ParseError::DanglingCombinator);
        }
    } else {
        compounds.push(current);
    }

    let mut iter = compounds.into_iter();
    let first = iter.next().unwrap_or_default();
    let rest = combinators.into_iter().zip(iter).collect();
    Ok(ComplexSelector { first, rest })
}
