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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::arena::Arena;
use crate::iterator::Children;
use crate::error::Result;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::NodeKind;
use crate::node::NodeValue;

/// A parsed JSON text: the arena holding its nodes and the id of the root.
///
/// All strings in the tree borrow the input buffer, so the document cannot
/// outlive it.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    arena: Arena<'a>,
    root: NodeId,
}

impl<'a> Document<'a> {
    pub(crate) fn new(arena: Arena<'a>, root: NodeId) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> NodeRef<'_, 'a> {
        NodeRef::new(&self.arena, self.root)
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn arena(&self) -> &Arena<'a> {
        &self.arena
    }

    /// Gives the arena back, e.g. to parse more documents into it.
    pub fn into_arena(self) -> Arena<'a> {
        self.arena
    }

    /// Total number of values in the document, containers included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

/// A node together with the arena it lives in.
///
/// `'t` is the borrow of the arena, `'a` the lifetime of the input buffer.
/// Strings read through a `NodeRef` carry `'a`, so they stay usable after
/// the handle is gone.
#[derive(Clone, Copy)]
pub struct NodeRef<'t, 'a> {
    arena: &'t Arena<'a>,
    id: NodeId,
}

impl<'t, 'a> NodeRef<'t, 'a> {
    pub(crate) fn new(arena: &'t Arena<'a>, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'t Node<'a> {
        self.arena.node(self.id)
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    pub fn value(&self) -> NodeValue<'a> {
        self.node().value()
    }

    pub fn key(&self) -> Option<&'a [u8]> {
        self.node().key()
    }

    /// The member name as UTF-8, if present and valid.
    pub fn key_str(&self) -> Option<&'a str> {
        self.key().and_then(|k| std::str::from_utf8(k).ok())
    }

    pub fn is_null(&self) -> bool {
        self.node().is_null()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.node().as_bool()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.node().as_f64()
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        self.node().as_bytes()
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.node().as_str()
    }

    pub fn get_by_key(&self, name: &str) -> Option<NodeRef<'t, 'a>> {
        self.arena
            .get_by_key(self.id, name)
            .map(|id| NodeRef::new(self.arena, id))
    }

    /// The `index`-th child of an object or array.
    pub fn get_by_index(&self, index: usize) -> Option<NodeRef<'t, 'a>> {
        self.children().nth(index)
    }

    /// Follows a key path such as `{pairs,0,x0}` from this node.
    pub fn select(&self, path: &[u8]) -> Result<Option<NodeRef<'t, 'a>>> {
        let id = self.arena.select(self.id, path)?;
        Ok(id.map(|id| NodeRef::new(self.arena, id)))
    }

    pub fn children(&self) -> Children<'t, 'a> {
        self.arena.iter_begin(self.id)
    }

    /// Number of direct children, `0` for scalars.
    pub fn len(&self) -> usize {
        self.arena.length(self.id)
    }

    pub fn is_empty(&self) -> bool {
        !self.children().is_valid()
    }
}

impl Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("NodeRef");
        debug.field("id", &self.id.index());
        if let Some(key) = self.key() {
            debug.field("key", &String::from_utf8_lossy(key));
        }
        match self.value() {
            NodeValue::String(v) => debug.field("value", &String::from_utf8_lossy(v)),
            NodeValue::Object | NodeValue::Array => debug
                .field("kind", &self.kind())
                .field("len", &self.len()),
            v => debug.field("value", &v),
        };
        debug.finish()
    }
}
