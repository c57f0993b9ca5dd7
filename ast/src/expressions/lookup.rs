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

/// A subscript or member access, e.g. `user["name"]` or `user.name`.
///
/// Member access is normalized at parse time: `user.name` carries the member
/// name as a string literal index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupExpression {
    /// The expression being indexed.
    pub target: Box<Expression>,
    /// The index expression.
    pub index: Box<Expression>,
    pub span: Span,
}

simple_node_impl!(LookupExpression);

impl fmt::Display for LookupExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.target, self.index)
    }
}
