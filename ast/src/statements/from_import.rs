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

use super::*;
use crate::{simple_node_impl, Expression};

/// One imported name in a `from` statement, with its optional alias.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportName {
    /// The exported name in the source template.
    pub name: Expression,
    /// The local alias introduced by `as`, if any.
    pub alias: Option<Expression>,
    pub span: Span,
}

simple_node_impl!(ImportName);

impl fmt::Display for ImportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {}", self.name, alias),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A `{% from … import … %}` statement binding selected exports directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FromImportStatement {
    /// The expression yielding the source template reference.
    pub template: Expression,
    /// The imported names in source order. Never empty.
    pub names: Vec<ImportName>,
    /// `Some(true)` for `with context`, `Some(false)` for
    /// `without context`, `None` when no clause was written.
    pub with_context: Option<bool>,
    pub span: Span,
}

simple_node_impl!(FromImportStatement);

impl fmt::Display for FromImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% from {} import ", self.template)?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        fmt_with_context(f, self.with_context)?;
        write!(f, " %}}")
    }
}
