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

fn fmt_comma_separated(f: &mut fmt::Formatter<'_>, elements: &[Expression]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{element}")?;
    }
    Ok(())
}

/// An array literal, e.g. `[1, 2, 3]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    /// The elements in source order.
    pub elements: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(ArrayExpression);

impl fmt::Display for ArrayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt_comma_separated(f, &self.elements)?;
        write!(f, "]")
    }
}

/// A parenthesized group, e.g. `(a + b)` or `(a, b)`.
///
/// A group keeps its own node even around a single element; consumers that
/// do not care about grouping can look through `elements[0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupExpression {
    /// The grouped expressions in source order.
    pub elements: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(GroupExpression);

impl fmt::Display for GroupExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_comma_separated(f, &self.elements)?;
        write!(f, ")")
    }
}

/// A dict literal, e.g. `{"a": 1, "b": 2}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictExpression {
    /// The key/value pairs in source order.
    pub pairs: Vec<Pair>,
    pub span: Span,
}

simple_node_impl!(DictExpression);

impl fmt::Display for DictExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "}}")
    }
}
