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

/// Renders an optional `with context` / `without context` clause.
pub(crate) fn fmt_with_context(f: &mut fmt::Formatter<'_>, with_context: Option<bool>) -> fmt::Result {
    match with_context {
        Some(true) => write!(f, " with context"),
        Some(false) => write!(f, " without context"),
        None => Ok(()),
    }
}

/// An `{% import … as … %}` statement binding a template's exported macros
/// and variables to a name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// The expression yielding the imported template reference.
    pub template: Expression,
    /// The binding target.
    pub target: Expression,
    /// `Some(true)` for `with context`, `Some(false)` for
    /// `without context`, `None` when no clause was written.
    pub with_context: Option<bool>,
    pub span: Span,
}

simple_node_impl!(ImportStatement);

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% import {} as {}", self.template, self.target)?;
        fmt_with_context(f, self.with_context)?;
        write!(f, " %}}")
    }
}
