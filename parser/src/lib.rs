// Copyright (C) 2022-2026 The Trellis Developers.
// This file is part of the Trellis library.

// The Trellis library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Trellis library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Trellis library. If not, see <https://www.gnu.org/licenses/>.

//! The parser to convert Trellis template text into an AST.
//!
//! This crate contains the [`parse()`] method which drives the tokenizer
//! and the recursive-descent [`ParserContext`] to build a new template AST.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::{Lexer, SpannedToken, Tags, Token};

pub mod extension;
pub use extension::*;

pub mod parser;
pub use parser::*;

use trellis_ast::Ast;
use trellis_errors::Result;

/// Creates a new AST wrapper from the given template source.
pub fn parse_ast(source: &str) -> Result<Ast> {
    Ok(Ast::new(parse(source)?))
}
