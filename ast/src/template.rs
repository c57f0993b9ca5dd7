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

use crate::{simple_node_impl, Node, Statement};
use trellis_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The root of a parsed template.
///
/// The root is synthetic (it has no token of its own), so its span is the
/// dummy position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// The template's top-level statements in source order.
    pub statements: Vec<Statement>,
    pub span: Span,
}

simple_node_impl!(Template);

impl Template {
    /// Creates a root from the collected top-level statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements, span: Span::dummy() }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}
