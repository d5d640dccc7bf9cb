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

use crate::error::Result;
use crate::iterator::Children;
use crate::keypath;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::NodeKind;
use crate::parser::parse_into;
use crate::parser::ParseMode;
use crate::value::NodeRef;

/// Backing storage for every node of one or more parses.
///
/// Nodes are only ever appended. They are released together when the arena
/// is dropped, never one by one, and every string they hold borrows an input
/// buffer that lives at least as long as `'a`.
///
/// A parse that fails leaves the nodes it already allocated in place. They
/// are well formed but incomplete, and are unreachable from any id the caller
/// holds.
#[derive(Debug, Default, Clone)]
pub struct Arena<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Arena<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Pre-sizes the arena. Parsing a document with at most `capacity`
    /// values into it performs no heap allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Parses `buf` into this arena and returns the id of the root node.
    pub fn parse(&mut self, buf: &'a [u8]) -> Result<NodeId> {
        self.parse_with_mode(buf, ParseMode::Extended)
    }

    /// Like [`Arena::parse`], with standard JSON restrictions.
    pub fn parse_standard_mode(&mut self, buf: &'a [u8]) -> Result<NodeId> {
        self.parse_with_mode(buf, ParseMode::Standard)
    }

    pub fn parse_with_mode(&mut self, buf: &'a [u8], mode: ParseMode) -> Result<NodeId> {
        parse_into(self, buf, mode)
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this arena.
    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<'a>> {
        self.nodes.get(id.0)
    }

    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, 'a> {
        NodeRef::new(self, id)
    }

    /// Finds the first member of object `id` whose key equals `name`.
    ///
    /// Returns `None` when `id` is not an object of this arena or has no such
    /// member.
    pub fn get_by_key(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.find_member(id, name.as_bytes())
    }

    /// Positions an iterator at the first child of `id`.
    ///
    /// The iterator is invalid from the start if `id` is empty, not a
    /// container or not a node of this arena.
    pub fn iter_begin(&self, id: NodeId) -> Children<'_, 'a> {
        let first = self
            .get(id)
            .filter(|node| node.kind().is_container())
            .and_then(|node| node.first_child);
        Children::new(self, first)
    }

    /// Number of direct children of `id`, `0` for scalars.
    pub fn length(&self, id: NodeId) -> usize {
        self.iter_begin(id).count()
    }

    /// Follows a key path such as `{pairs,0,x0}` from `id`.
    ///
    /// Returns `Ok(None)` when the path does not match the tree and
    /// [`Error::InvalidKeyPath`](crate::Error::InvalidKeyPath) when it is
    /// malformed. See [`keypath`](crate::keypath) for the syntax.
    pub fn select(&self, id: NodeId, path: &[u8]) -> Result<Option<NodeId>> {
        keypath::select(self, id, path)
    }

    pub(crate) fn find_member(&self, id: NodeId, name: &[u8]) -> Option<NodeId> {
        if self.get(id)?.kind() != NodeKind::Object {
            return None;
        }
        self.iter_begin(id)
            .map(|child| child.id())
            .find(|child| self.node(*child).key == Some(name))
    }

    pub(crate) fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        id
    }

    /// Allocates a child of `parent` and links it after `prev`, or as the
    /// first child when `prev` is `None`.
    pub(crate) fn append_child(&mut self, parent: NodeId, prev: Option<NodeId>) -> NodeId {
        let child = self.alloc();
        match prev {
            Some(prev) => self.nodes[prev.0].next = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        child
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<'a> {
        &mut self.nodes[id.0]
    }
}
