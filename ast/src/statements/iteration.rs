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

/// How a loop walks its iterable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationMode {
    /// A plain `for` loop.
    For,
    /// An `asyncAll` loop: iterations render concurrently.
    AsyncAll,
    /// An `asyncEach` loop: iterations render sequentially but may await.
    AsyncEach,
}

impl IterationMode {
    /// The tag that closes a loop of this mode.
    pub fn end_tag(&self) -> &'static str {
        match self {
            Self::For => "endfor",
            Self::AsyncAll => "endall",
            Self::AsyncEach => "endeach",
        }
    }

    /// The tag that opens a loop of this mode.
    pub fn start_tag(&self) -> &'static str {
        match self {
            Self::For => "for",
            Self::AsyncAll => "asyncAll",
            Self::AsyncEach => "asyncEach",
        }
    }
}

/// A `{% for … in … %}` loop in any of its three iteration modes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationStatement {
    /// The iteration mode the opening tag selected.
    pub mode: IterationMode,
    /// The loop variable: a single identifier, or an array of targets for
    /// unpacking (`for k, v in d`).
    pub name: Expression,
    /// The expression yielding the iterable.
    pub iterable: Expression,
    /// The statements rendered per iteration.
    pub body: Block,
    /// The `{% else %}` branch rendered when the iterable is empty.
    pub otherwise: Option<Block>,
    pub span: Span,
}

simple_node_impl!(IterationStatement);

impl fmt::Display for IterationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unpacking targets render without the array brackets.
        write!(f, "{{% {} ", self.mode.start_tag())?;
        match &self.name {
            Expression::Array(targets) => {
                for (i, target) in targets.elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{target}")?;
                }
            }
            name => write!(f, "{name}")?,
        }
        write!(f, " in {} %}}{}", self.iterable, self.body)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, "{{% else %}}{otherwise}")?;
        }
        write!(f, "{{% {} %}}", self.mode.end_tag())
    }
}
