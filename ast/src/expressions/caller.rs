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
use crate::{simple_node_impl, Block};

/// The body of a `call` tag, passed into the called macro as the `caller`
/// keyword argument. Behaves like an anonymous macro when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallerExpression {
    /// Always the synthetic name `caller`.
    pub name: Identifier,
    /// The formal arguments the call block accepts.
    pub arguments: Arguments,
    /// The call block's body.
    pub body: Block,
    pub span: Span,
}

simple_node_impl!(CallerExpression);

impl fmt::Display for CallerExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}
