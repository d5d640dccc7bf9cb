// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::arena::Arena;
use super::constants::*;
use super::cursor::Cursor;
use super::error::ParseErrorCode;
use super::error::Result;
use super::node::NodeId;
use super::node::NodeValue;
use super::value::Document;

/// How strictly the JSON text is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Strings end at the first `"` and are not checked for UTF-8, numbers
    /// follow the float parser's grammar, input after the root value is
    /// ignored.
    #[default]
    Extended,
    /// Backslashes escape the next byte inside strings, strings must be
    /// UTF-8, numbers follow the JSON grammar and nothing but whitespace may
    /// follow the root value.
    Standard,
}

/// Parse JSON text into a tree whose strings borrow `buf`.
pub fn parse_value(buf: &[u8]) -> Result<Document<'_>> {
    parse_document(buf, ParseMode::Extended)
}

/// Parse JSON text with standard JSON restrictions.
pub fn parse_value_standard_mode(buf: &[u8]) -> Result<Document<'_>> {
    parse_document(buf, ParseMode::Standard)
}

fn parse_document(buf: &[u8], mode: ParseMode) -> Result<Document<'_>> {
    let mut arena = Arena::new();
    let root = parse_into(&mut arena, buf, mode)?;
    Ok(Document::new(arena, root))
}

pub(crate) fn parse_into<'a>(arena: &mut Arena<'a>, buf: &'a [u8], mode: ParseMode) -> Result<NodeId> {
    let mut parser = Parser::new(buf, arena, mode);
    parser.parse()
}

struct Parser<'a, 'b> {
    cursor: Cursor<'a>,
    arena: &'b mut Arena<'a>,
    mode: ParseMode,
}

impl<'a, 'b> Parser<'a, 'b> {
    fn new(buf: &'a [u8], arena: &'b mut Arena<'a>, mode: ParseMode) -> Parser<'a, 'b> {
        Self {
            cursor: Cursor::new(buf),
            arena,
            mode,
        }
    }

    fn parse(&mut self) -> Result<NodeId> {
        let root = self.arena.alloc();
        self.parse_json_value(root)?;
        if self.mode == ParseMode::Standard {
            self.cursor.skip_whitespace();
            if !self.cursor.is_eof() {
                return Err(self.cursor.error(ParseErrorCode::TrailingCharacters));
            }
        }
        Ok(root)
    }

    fn parse_json_value(&mut self, node: NodeId) -> Result<()> {
        let c = self.cursor.next_significant_char()?;
        self.dispatch(c, node)
    }

    /// Parses the value whose first character `c` was already consumed.
    fn dispatch(&mut self, c: u8, node: NodeId) -> Result<()> {
        match c {
            b'{' => self.parse_json_container(node, true),
            b'[' => self.parse_json_container(node, false),
            b'"' => {
                let s = self.parse_json_string()?;
                self.arena.node_mut(node).value = NodeValue::String(s);
                Ok(())
            }
            b'+' | b'-' | b'0'..=b'9' => self.parse_json_number(node),
            b't' | b'f' | b'n' => self.parse_json_literal(c, node),
            _ => Err(self.cursor.error(ParseErrorCode::UnexpectedCharacter)),
        }
    }

    /// Parses the members of an object (`keyed`) or the elements of an array,
    /// the opening bracket already consumed.
    ///
    /// Children are linked as they are allocated, so a failure midway leaves
    /// the container with the children parsed so far plus one blank child.
    fn parse_json_container(&mut self, node: NodeId, keyed: bool) -> Result<()> {
        let terminator = if keyed {
            self.arena.node_mut(node).value = NodeValue::Object;
            b'}'
        } else {
            self.arena.node_mut(node).value = NodeValue::Array;
            b']'
        };

        let mut prev = None;
        loop {
            let c = self.cursor.next_significant_char()?;
            if c == terminator {
                if prev.is_none() {
                    return Ok(());
                }
                // `,` directly followed by the terminator
                return Err(self.cursor.error(ParseErrorCode::MalformedContainer));
            }

            let child = self.arena.append_child(node, prev);
            prev = Some(child);

            if keyed {
                if c != b'"' {
                    return Err(self.cursor.error(ParseErrorCode::MalformedContainer));
                }
                let key = self.parse_json_string()?;
                self.arena.node_mut(child).key = Some(key);

                if self.cursor.next_significant_char()? != b':' {
                    return Err(self.cursor.error(ParseErrorCode::MalformedContainer));
                }
                self.parse_json_value(child)?;
            } else {
                self.dispatch(c, child)?;
            }

            match self.cursor.next_significant_char()? {
                b',' => continue,
                c if c == terminator => return Ok(()),
                _ => return Err(self.cursor.error(ParseErrorCode::MalformedContainer)),
            }
        }
    }

    /// Returns the bytes up to the closing quote, the opening quote already
    /// consumed. Escapes are never decoded.
    fn parse_json_string(&mut self) -> Result<&'a [u8]> {
        let start = self.cursor.position();
        match self.mode {
            ParseMode::Extended => match self.cursor.remaining().iter().position(|c| *c == b'"') {
                Some(len) => {
                    self.cursor.step_by(len + 1);
                    Ok(self.cursor.slice(start, start + len))
                }
                None => {
                    let rest = self.cursor.remaining().len();
                    self.cursor.step_by(rest);
                    Err(self.cursor.error(ParseErrorCode::UnexpectedEndOfInput))
                }
            },
            ParseMode::Standard => {
                loop {
                    match self.cursor.next_char()? {
                        b'"' => break,
                        b'\\' => {
                            self.cursor.next_char()?;
                        }
                        _ => {}
                    }
                }
                let data = self.cursor.slice(start, self.cursor.position() - 1);
                if std::str::from_utf8(data).is_err() {
                    return Err(self.cursor.error(ParseErrorCode::InvalidString));
                }
                Ok(data)
            }
        }
    }

    /// Parses a number whose sign or first digit was already consumed.
    fn parse_json_number(&mut self, node: NodeId) -> Result<()> {
        // rewind over the byte the dispatcher consumed
        let start = self.cursor.position() - 1;
        let text = self.cursor.slice(start, usize::MAX);

        let (value, consumed) = match self.mode {
            ParseMode::Extended => match fast_float2::parse_partial::<f64, _>(text) {
                Ok((value, consumed)) if consumed > 0 => (value, consumed),
                _ => return Err(self.cursor.error(ParseErrorCode::InvalidNumber)),
            },
            ParseMode::Standard => {
                let len = standard_number_len(text)
                    .ok_or_else(|| self.cursor.error(ParseErrorCode::InvalidNumber))?;
                let value = fast_float2::parse::<f64, _>(&text[..len])
                    .map_err(|_| self.cursor.error(ParseErrorCode::InvalidNumber))?;
                (value, len)
            }
        };

        self.cursor.step_by(consumed - 1);
        self.arena.node_mut(node).value = NodeValue::Number(value);
        Ok(())
    }

    /// Matches the rest of `true`, `false` or `null` after its first byte.
    fn parse_json_literal(&mut self, first: u8, node: NodeId) -> Result<()> {
        let (tail, value) = match first {
            b't' => (TRUE_TAIL, NodeValue::Bool(true)),
            b'f' => (FALSE_TAIL, NodeValue::Bool(false)),
            _ => (NULL_TAIL, NodeValue::Null),
        };
        let range = self.cursor.take_range(tail.len())?;
        if range != tail {
            return Err(self.cursor.error(ParseErrorCode::InvalidLiteral));
        }
        self.arena.node_mut(node).value = value;
        Ok(())
    }
}

/// Length of the longest prefix of `s` that is a JSON number, or `None` if
/// the prefix breaks the grammar before it is complete.
fn standard_number_len(s: &[u8]) -> Option<usize> {
    let digits = |from: usize| s[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut idx = 0;
    if s.first() == Some(&b'-') {
        idx += 1;
    }
    match s.get(idx) {
        Some(b'0') => {
            idx += 1;
            if s.get(idx).is_some_and(|c| c.is_ascii_digit()) {
                return None;
            }
        }
        Some(c) if c.is_ascii_digit() => idx += digits(idx),
        _ => return None,
    }
    if s.get(idx) == Some(&b'.') {
        idx += 1;
        let len = digits(idx);
        if len == 0 {
            return None;
        }
        idx += len;
    }
    if matches!(s.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(s.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let len = digits(idx);
        if len == 0 {
            return None;
        }
        idx += len;
    }
    Some(idx)
}
