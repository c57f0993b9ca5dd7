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

/// A run of literal text from the template, emitted verbatim when rendering.
///
/// Whitespace control has already been applied to the value by the parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    /// The text to emit.
    pub value: String,
    pub span: Span,
}

simple_node_impl!(TemplateData);

impl fmt::Display for TemplateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
