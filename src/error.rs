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

/// The reason a JSON text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// The input ended while a token was still expected.
    UnexpectedEndOfInput,
    /// No value production starts with the character found.
    UnexpectedCharacter,
    /// A separator or terminator inside an object or array did not match.
    MalformedContainer,
    /// `true`, `false` or `null` was misspelled.
    InvalidLiteral,
    /// No characters could be converted to a number.
    InvalidNumber,
    /// A string is not valid UTF-8 (standard mode only).
    InvalidString,
    /// Non-whitespace input follows the root value (standard mode only).
    TrailingCharacters,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorCode::UnexpectedEndOfInput => f.write_str("EOF while parsing a value"),
            ParseErrorCode::UnexpectedCharacter => f.write_str("expected value"),
            ParseErrorCode::MalformedContainer => f.write_str("malformed object or array"),
            ParseErrorCode::InvalidLiteral => f.write_str("invalid literal"),
            ParseErrorCode::InvalidNumber => f.write_str("invalid number"),
            ParseErrorCode::InvalidString => f.write_str("invalid string value"),
            ParseErrorCode::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A syntax error and the byte offset at which it was detected.
    Syntax(ParseErrorCode, usize),
    /// A malformed key path and the offset of the first byte that does not fit.
    InvalidKeyPath(usize),
}

impl Error {
    /// Returns the syntax error code, if this is a syntax error.
    pub fn code(&self) -> Option<ParseErrorCode> {
        match self {
            Error::Syntax(code, _) => Some(*code),
            _ => None,
        }
    }

    /// Returns the byte offset of the error in the parsed text or path.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax(_, pos) | Error::InvalidKeyPath(pos) => Some(*pos),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
            Error::InvalidKeyPath(pos) => write!(f, "invalid key path, pos {}", pos),
        }
    }
}

impl std::error::Error for Error {}
