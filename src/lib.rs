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

//! `jsontree` is a minimal, zero-copy `JSON` parser. It turns a byte buffer into a tree of typed nodes stored in an arena, without copying any string data, and offers key lookup, child iteration and child counts over that tree.
//!
//! ## Features
//!
//! - Zero copy: string values and object keys are slices of the input buffer, and the borrow checker keeps the tree from outliving it.
//! - Arena allocation: every node of a parse lives in one [`Arena`] and is released with it. Parsing into a pre-sized arena does not allocate.
//! - Two modes: the default mode is permissive and fast, [`parse_value_standard_mode`] adds standard `JSON` checks.
//! - Key paths: paths like `{pairs,0,x0}` select nested values, see [`keypath`].
//!
//! ## Tree layout
//!
//! Each [`Node`] carries its kind and value, an optional key, a link to its first child and a link to its next sibling. Children of a container therefore form a singly linked list in document order.
//!
//! ```text
//! // JSON value
//! {"a": [1, 2], "b": null}
//!
//! // nodes
//! 0  object             first_child: 1
//! 1  array   key "a"    first_child: 2   next: 4
//! 2  number  1                           next: 3
//! 3  number  2
//! 4  null    key "b"
//! ```
//!
//! ## Limitations
//!
//! The default mode does not decode escape sequences, so a `\"` inside a string ends it. It accepts
//! whatever the float parser accepts as a number (a leading `+`, `inf`, `nan`), does not validate
//! `UTF-8` and ignores input after the root value. Duplicate keys are kept; lookup returns the
//! first one.
//!
//! Objects and arrays are parsed recursively, so nesting depth is bounded only by the stack of
//! the parsing thread. Input nested deeper than the stack allows aborts the process.
//!
//! ## Example
//!
//! ```rust
//! let doc = jsontree::parse_value(br#"{"pairs": [{"x0": 1.5, "y0": -2}]}"#).unwrap();
//! let pairs = doc.root().get_by_key("pairs").unwrap();
//! assert_eq!(pairs.len(), 1);
//! for pair in pairs.children() {
//!     assert_eq!(pair.get_by_key("x0").and_then(|n| n.as_f64()), Some(1.5));
//! }
//!
//! let y0 = doc.root().select(b"{pairs, -1, y0}").unwrap();
//! assert_eq!(y0.and_then(|n| n.as_f64()), Some(-2.0));
//! ```

#![allow(clippy::uninlined_format_args)]

mod arena;
mod constants;
mod cursor;
mod error;
mod iterator;
pub mod keypath;
mod node;
mod parser;
mod value;

pub use arena::Arena;
pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use iterator::Children;
pub use node::Node;
pub use node::NodeId;
pub use node::NodeKind;
pub use node::NodeValue;
pub use parser::parse_value;
pub use parser::parse_value_standard_mode;
pub use parser::ParseMode;
pub use value::Document;
pub use value::NodeRef;
