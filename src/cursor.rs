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

use super::constants::is_whitespace;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;

/// A read position over a fully materialized input buffer.
///
/// Every slice handed out borrows the buffer, never the cursor, so callers
/// can keep them after the cursor has moved on. There is no way to move
/// backwards; a parser that needs the byte it just consumed computes the
/// token start from `position()` itself.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Cursor<'a> {
        Self { buf, idx: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.idx
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.idx >= self.buf.len()
    }

    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.buf[self.idx.min(self.buf.len())..]
    }

    /// Returns `buf[start..end]`, clamped to the buffer.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.buf.len());
        &self.buf[start.min(end)..end]
    }

    #[inline]
    pub(crate) fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while self.idx < self.buf.len() && is_whitespace(self.buf[self.idx]) {
            self.idx += 1;
        }
    }

    /// Consumes and returns the next byte without skipping whitespace.
    #[inline]
    pub(crate) fn next_char(&mut self) -> Result<u8> {
        match self.buf.get(self.idx) {
            Some(c) => {
                self.idx += 1;
                Ok(*c)
            }
            None => Err(self.error(ParseErrorCode::UnexpectedEndOfInput)),
        }
    }

    /// Skips insignificant whitespace, then consumes and returns the next byte.
    #[inline]
    pub(crate) fn next_significant_char(&mut self) -> Result<u8> {
        self.skip_whitespace();
        self.next_char()
    }

    /// Consumes the next `n` bytes and returns them as a borrowed slice.
    pub(crate) fn take_range(&mut self, n: usize) -> Result<&'a [u8]> {
        let start = self.idx;
        match start.checked_add(n) {
            Some(end) if end <= self.buf.len() => {
                self.idx = end;
                Ok(&self.buf[start..end])
            }
            _ => Err(Error::Syntax(
                ParseErrorCode::UnexpectedEndOfInput,
                self.buf.len(),
            )),
        }
    }

    pub(crate) fn error(&self, code: ParseErrorCode) -> Error {
        Error::Syntax(code, self.idx)
    }
}
