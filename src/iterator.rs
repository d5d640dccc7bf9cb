// Copyright 2024 Datafuse Labs.
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

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::node::NodeId;
use crate::value::NodeRef;

/// Walks the direct children of an object or array in insertion order.
///
/// It can be driven explicitly with [`is_valid`](Children::is_valid),
/// [`current`](Children::current) and [`advance`](Children::advance), or used
/// as a plain [`Iterator`].
#[derive(Debug, Clone)]
pub struct Children<'t, 'a> {
    arena: &'t Arena<'a>,
    current: Option<NodeId>,
}

impl<'t, 'a> Children<'t, 'a> {
    pub(crate) fn new(arena: &'t Arena<'a>, first: Option<NodeId>) -> Self {
        Self {
            arena,
            current: first,
        }
    }

    /// Whether the iterator points at an existing child.
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<NodeRef<'t, 'a>> {
        self.current.map(|id| NodeRef::new(self.arena, id))
    }

    /// Moves to the next sibling. Does nothing once the iterator is invalid.
    pub fn advance(&mut self) {
        if let Some(id) = self.current {
            self.current = self.arena.node(id).next;
        }
    }
}

impl<'t, 'a> Iterator for Children<'t, 'a> {
    type Item = NodeRef<'t, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.advance();
        Some(item)
    }
}

impl FusedIterator for Children<'_, '_> {}
