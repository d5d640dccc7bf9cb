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

//! Key paths select a value below a node, e.g. `{pairs, 0, x0}` or
//! `{"first name", -1}`.
//!
//! A path is a list of steps between braces, separated by commas. A step is
//! an array position, negative positions counting from the end, or a member
//! name. Bare names consist of ASCII letters, digits, `_` and non-ASCII bytes
//! and must not start like a number; any other name is written between double
//! quotes and taken verbatim up to the next `"`. Names are compared byte for
//! byte with member keys.
//!
//! Steps are parsed one at a time while the tree is walked, so selecting
//! never allocates.

use std::iter::FusedIterator;

use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::character::complete::i64 as position;
use nom::character::complete::multispace0;
use nom::combinator::map;
use nom::sequence::delimited;
use nom::IResult;
use nom::Parser;

use crate::arena::Arena;
use crate::error::Error;
use crate::error::Result;
use crate::node::NodeId;
use crate::node::NodeKind;

/// One step of a key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<'p> {
    /// An object member, by its raw key bytes.
    Member(&'p [u8]),
    /// An array element. `-1` is the last one.
    Index(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Next,
    Done,
}

/// The steps of a key path, parsed lazily.
///
/// A malformed path yields the steps before the defect, then one
/// [`Error::InvalidKeyPath`] carrying the offset of the defect, then nothing.
#[derive(Debug, Clone)]
pub struct Steps<'p> {
    path: &'p [u8],
    rest: &'p [u8],
    state: State,
}

impl<'p> Steps<'p> {
    pub fn new(path: &'p [u8]) -> Self {
        Self {
            path,
            rest: path,
            state: State::Open,
        }
    }

    fn next_step(&mut self) -> Result<Option<Step<'p>>> {
        match self.state {
            State::Done => return Ok(None),
            State::Open => self.rest = self.expect(open)?,
            State::Next => {}
        }

        if let Ok((rest, _)) = close(self.rest) {
            self.state = State::Done;
            self.rest = rest;
            if !rest.is_empty() {
                return Err(self.error());
            }
            return Ok(None);
        }
        if self.state == State::Next {
            self.rest = self.expect(separator)?;
        }

        let (rest, step) = step(self.rest).map_err(|_| self.error())?;
        self.rest = rest;
        self.state = State::Next;
        Ok(Some(step))
    }

    fn expect(&self, token: fn(&'p [u8]) -> IResult<&'p [u8], char>) -> Result<&'p [u8]> {
        token(self.rest)
            .map(|(rest, _)| rest)
            .map_err(|_| self.error())
    }

    // offset of the first unconsumed byte that is not whitespace
    fn error(&self) -> Error {
        let blank = self
            .rest
            .iter()
            .take_while(|c| matches!(**c, b' ' | b'\t' | b'\r' | b'\n'))
            .count();
        Error::InvalidKeyPath(self.path.len() - self.rest.len() + blank)
    }
}

impl<'p> Iterator for Steps<'p> {
    type Item = Result<Step<'p>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_step() {
            Ok(step) => step.map(Ok),
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Steps<'_> {}

fn open(input: &[u8]) -> IResult<&[u8], char> {
    delimited(multispace0, char('{'), multispace0).parse(input)
}

fn separator(input: &[u8]) -> IResult<&[u8], char> {
    delimited(multispace0, char(','), multispace0).parse(input)
}

fn close(input: &[u8]) -> IResult<&[u8], char> {
    delimited(multispace0, char('}'), multispace0).parse(input)
}

fn step(input: &[u8]) -> IResult<&[u8], Step<'_>> {
    alt((
        map(position, Step::Index),
        map(
            delimited(char('"'), take_while(|c: u8| c != b'"'), char('"')),
            Step::Member,
        ),
        map(take_while1(is_name_byte), Step::Member),
    ))
    .parse(input)
}

fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c >= 0x80
}

/// Follows `path` from `id`. A step that does not fit the tree gives
/// `Ok(None)`, but the rest of the path is still checked for syntax.
pub(crate) fn select(arena: &Arena<'_>, id: NodeId, path: &[u8]) -> Result<Option<NodeId>> {
    let mut current = arena.get(id).map(|_| id);
    for step in Steps::new(path) {
        let step = step?;
        current = current.and_then(|id| walk(arena, id, step));
    }
    Ok(current)
}

fn walk(arena: &Arena<'_>, id: NodeId, step: Step<'_>) -> Option<NodeId> {
    match (step, arena.get(id)?.kind()) {
        (Step::Member(name), NodeKind::Object) => arena.find_member(id, name),
        (Step::Index(idx), NodeKind::Array) => {
            let idx = if idx < 0 {
                let back = usize::try_from(idx.unsigned_abs()).ok()?;
                arena.length(id).checked_sub(back)?
            } else {
                usize::try_from(idx).ok()?
            };
            arena.iter_begin(id).nth(idx).map(|child| child.id())
        }
        _ => None,
    }
}
