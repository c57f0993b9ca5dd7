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

/// A filter application, e.g. `name | upper` or `text | wordwrap(40)`.
///
/// The filtered expression is the first positional argument; explicit
/// arguments from the template follow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    /// The filter name, possibly dotted.
    pub name: Identifier,
    /// The arguments, with the filtered expression first.
    pub arguments: Arguments,
    pub span: Span,
}

simple_node_impl!(FilterExpression);

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arguments.positional.split_first() {
            Some((operand, rest)) if rest.is_empty() && self.arguments.keywords.is_empty() => {
                write!(f, "{} | {}", operand, self.name)
            }
            Some((operand, rest)) => {
                write!(f, "{} | {}(", operand, self.name)?;
                let mut first = true;
                for argument in rest {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{argument}")?;
                }
                for keyword in &self.arguments.keywords {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}={}", keyword.key, keyword.value)?;
                }
                write!(f, ")")
            }
            None => write!(f, "| {}", self.name),
        }
    }
}
