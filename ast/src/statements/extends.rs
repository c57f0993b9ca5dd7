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

/// An `{% extends … %}` statement naming the parent template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendsStatement {
    /// The expression yielding the parent template reference.
    pub template: Expression,
    pub span: Span,
}

simple_node_impl!(ExtendsStatement);

impl fmt::Display for ExtendsStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% extends {} %}}", self.template)
    }
}
