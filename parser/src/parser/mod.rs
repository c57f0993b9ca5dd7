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

//! The parser to convert template text into a [`Template`] AST.
//!
//! This module contains the [`parse()`] entry point and the
//! [`ParserContext`] recursive-descent driver.

use crate::{extension::Extension, tokenizer::*};

use trellis_ast::*;
use trellis_errors::{ParserError, Result};
use trellis_span::Span;

use std::rc::Rc;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;

/// Creates a new [`Template`] AST from the given template source.
pub fn parse(source: &str) -> Result<Template> {
    parse_with_extensions(source, Vec::new())
}

/// As [`parse`], with plug-in block tags.
pub fn parse_with_extensions(
    source: &str,
    extensions: Vec<Rc<dyn Extension>>,
) -> Result<Template> {
    parse_with_options(source, extensions, Tags::default())
}

/// As [`parse`], with plug-in block tags and custom delimiters.
pub fn parse_with_options(
    source: &str,
    extensions: Vec<Rc<dyn Extension>>,
    tags: Tags,
) -> Result<Template> {
    let mut context = ParserContext::new(Lexer::new(source, tags), extensions);
    context.parse_template()
}
