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

/// Contains the AST error definitions.
pub mod ast;
pub use self::ast::*;

/// Contains the parser error definitions.
pub mod parser;
pub use self::parser::*;

/// The top-level error type of the Trellis engine. Every crate-level error
/// converts into this type, which is what the public entry points return.
#[derive(Clone, Debug, thiserror::Error)]
pub enum TemplateError {
    /// Represents an AST error.
    #[error(transparent)]
    AstError(#[from] AstError),

    /// Represents a parser error.
    #[error(transparent)]
    ParserError(#[from] ParserError),
}

impl TemplateError {
    /// The stable code of the wrapped error, e.g. `EPAR0370003`.
    pub fn error_code(&self) -> String {
        match self {
            Self::AstError(error) => error.error_code(),
            Self::ParserError(error) => error.error_code(),
        }
    }

    /// The numeric code of the wrapped error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AstError(error) => error.exit_code(),
            Self::ParserError(error) => error.exit_code(),
        }
    }
}

/// A result type with the Trellis error as its default error.
pub type Result<T, E = TemplateError> = core::result::Result<T, E>;
