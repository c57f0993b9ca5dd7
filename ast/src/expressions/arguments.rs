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
use crate::simple_node_impl;

/// A parsed signature: the argument list of a call, filter, macro
/// definition, or `call` tag.
///
/// Positional arguments come first in source order; `name=value` entries are
/// collected into `keywords`, which also doubles as the macro definition's
/// defaulted parameters. An empty `keywords` means no keyword-argument
/// container was present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    /// The positional arguments in source order.
    pub positional: Vec<Expression>,
    /// The keyword arguments in source order.
    pub keywords: Vec<Pair>,
    pub span: Span,
}

simple_node_impl!(Arguments);

impl Arguments {
    /// Returns an empty signature at the given position.
    pub fn empty(span: Span) -> Self {
        Self { positional: Vec::new(), keywords: Vec::new(), span }
    }

    /// Returns true if the signature has no arguments of either kind.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for argument in &self.positional {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{argument}")?;
        }
        for keyword in &self.keywords {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", keyword.key, keyword.value)?;
        }
        Ok(())
    }
}
