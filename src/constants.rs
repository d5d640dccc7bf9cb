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

// JSON text insignificant whitespace
pub(crate) const SP: u8 = b' ';
pub(crate) const HT: u8 = b'\t';
pub(crate) const LF: u8 = b'\n';
pub(crate) const CR: u8 = b'\r';

// JSON literal tails, the first character is consumed by the dispatcher
pub(crate) const TRUE_TAIL: &[u8] = b"rue";
pub(crate) const FALSE_TAIL: &[u8] = b"alse";
pub(crate) const NULL_TAIL: &[u8] = b"ull";

pub(crate) const TYPE_STRING: &str = "string";
pub(crate) const TYPE_NULL: &str = "null";
pub(crate) const TYPE_BOOLEAN: &str = "boolean";
pub(crate) const TYPE_NUMBER: &str = "number";
pub(crate) const TYPE_ARRAY: &str = "array";
pub(crate) const TYPE_OBJECT: &str = "object";

#[inline]
pub(crate) fn is_whitespace(c: u8) -> bool {
    matches!(c, SP | HT | LF | CR)
}
