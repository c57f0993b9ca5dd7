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

//! The abstract syntax tree (AST) for a Trellis template.
//!
//! This module contains the [`Ast`] type, a wrapper around the [`Template`]
//! type. The [`Ast`] is what the parser produces and what a compiler or
//! renderer consumes. Nodes exclusively own their children; the tree is
//! rooted in a [`Template`].

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod expressions;
pub use self::expressions::*;

pub mod statements;
pub use self::statements::*;

pub mod template;
pub use self::template::*;

use trellis_errors::{AstError, Result};

/// The abstract syntax tree for a template, a thin wrapper around the
/// [`Template`] root with serialization helpers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ast {
    pub ast: Template,
}

impl Ast {
    /// Creates a new AST from a given template tree.
    pub fn new(template: Template) -> Self {
        Self { ast: template }
    }

    /// Returns a reference to the inner template root.
    pub fn as_repr(&self) -> &Template {
        &self.ast
    }

    /// Consumes the wrapper and returns the inner template root.
    pub fn into_repr(self) -> Template {
        self.ast
    }

    /// Serializes the AST into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json(e))?)
    }

    /// Deserializes a JSON string into an AST.
    pub fn from_json_string(json: &str) -> Result<Self> {
        let ast: Template =
            serde_json::from_str(json).map_err(|e| AstError::failed_to_read_json_string_to_ast(e))?;
        Ok(Self { ast })
    }
}
