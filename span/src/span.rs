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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The position of a token or node in a template source.
///
/// Both coordinates are 0-based internally; [`fmt::Display`] renders them
/// 1-based, which is what error messages and tooling expect.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The line the token starts on.
    pub line: usize,
    /// The column of the token's first character within that line.
    pub col: usize,
}

impl Span {
    /// Returns a new span at the given 0-based coordinates.
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Returns the span used for synthetic nodes such as the template root.
    pub const fn dummy() -> Self {
        Self { line: 0, col: 0 }
    }

    /// The 1-based line number reported to users.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// The 1-based column number reported to users.
    pub fn column_number(&self) -> usize {
        self.col + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        assert_eq!(Span::new(0, 0).to_string(), "1:1");
        assert_eq!(Span::new(2, 7).to_string(), "3:8");
        assert_eq!(Span::dummy().line_number(), 1);
    }
}
