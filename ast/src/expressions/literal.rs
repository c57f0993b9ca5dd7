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

/// A literal value written directly in a template expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// A boolean literal, either `true` or `false`.
    Boolean(bool, Span),
    /// A float literal, e.g. `3.14`.
    Float(f64, Span),
    /// An integer literal, e.g. `42`. Always base 10.
    Integer(i64, Span),
    /// The absent value, written `none` or `null`.
    None(Span),
    /// A regular expression literal, e.g. `r/ab+c/i`.
    Regex {
        /// The pattern between the slashes.
        body: String,
        /// The flag characters after the closing slash.
        flags: String,
        span: Span,
    },
    /// A string literal, e.g. `"hello"`.
    Str(String, Span),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(boolean, _) => write!(f, "{boolean}"),
            Self::Float(float, _) => write!(f, "{float}"),
            Self::Integer(integer, _) => write!(f, "{integer}"),
            Self::None(_) => write!(f, "none"),
            Self::Regex { body, flags, .. } => write!(f, "r/{body}/{flags}"),
            Self::Str(string, _) => write!(f, "\"{string}\""),
        }
    }
}

impl Node for Literal {
    fn span(&self) -> Span {
        match self {
            Self::Boolean(_, span)
            | Self::Float(_, span)
            | Self::Integer(_, span)
            | Self::None(span)
            | Self::Regex { span, .. }
            | Self::Str(_, span) => *span,
        }
    }

    fn set_span(&mut self, new_span: Span) {
        match self {
            Self::Boolean(_, span)
            | Self::Float(_, span)
            | Self::Integer(_, span)
            | Self::None(span)
            | Self::Regex { span, .. }
            | Self::Str(_, span) => *span = new_span,
        }
    }
}
