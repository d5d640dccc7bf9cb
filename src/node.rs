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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::constants::*;

/// Index of a node inside the [`Arena`](crate::Arena) that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    String,
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Null => TYPE_NULL,
            NodeKind::Boolean => TYPE_BOOLEAN,
            NodeKind::Object => TYPE_OBJECT,
            NodeKind::Array => TYPE_ARRAY,
            NodeKind::Number => TYPE_NUMBER,
            NodeKind::String => TYPE_STRING,
        };
        f.write_str(name)
    }
}

/// The payload of a node. The variant doubles as the node's kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NodeValue<'a> {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    /// The raw bytes between the quotes, borrowed from the input.
    String(&'a [u8]),
    Object,
    Array,
}

/// One parsed JSON value linked into its parent's child list.
///
/// A freshly allocated node is `Null` with no key and no links, which is
/// also what a sub-parse that failed midway leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node<'a> {
    pub(crate) key: Option<&'a [u8]>,
    pub(crate) value: NodeValue<'a>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self.value {
            NodeValue::Null => NodeKind::Null,
            NodeValue::Bool(_) => NodeKind::Boolean,
            NodeValue::Number(_) => NodeKind::Number,
            NodeValue::String(_) => NodeKind::String,
            NodeValue::Object => NodeKind::Object,
            NodeValue::Array => NodeKind::Array,
        }
    }

    /// The member name, present only when the parent is an object.
    pub fn key(&self) -> Option<&'a [u8]> {
        self.key
    }

    pub fn value(&self) -> NodeValue<'a> {
        self.value
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            NodeValue::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            NodeValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.value {
            NodeValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// The string value, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_bytes().and_then(|v| std::str::from_utf8(v).ok())
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, NodeValue::Null)
    }
}
