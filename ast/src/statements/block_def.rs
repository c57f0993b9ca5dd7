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
use crate::{simple_node_impl, Identifier};

/// A named `{% block … %}` region that a child template can override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    /// The block's name.
    pub name: Identifier,
    /// The default content of the block.
    pub body: Block,
    pub span: Span,
}

simple_node_impl!(BlockStatement);

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% block {} %}}{}{{% endblock %}}", self.name, self.body)
    }
}
