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

use crate::{simple_node_impl, Node};
use trellis_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier in a template: a variable, a tag argument, a filter name.
///
/// Filter names may be dotted (`foo.bar`); the dots are part of the name.
#[derive(Clone, Serialize, Deserialize)]
pub struct Identifier {
    /// The name the template author wrote, e.g. `item`.
    pub name: String,
    /// A span locating where the identifier occurred in the source.
    pub span: Span,
}

simple_node_impl!(Identifier);

impl Identifier {
    /// Constructs a new identifier with `name` at the given position.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }

    /// Check if the identifier name matches the other name.
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.span == other.span
    }
}
