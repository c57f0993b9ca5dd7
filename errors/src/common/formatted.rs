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

use crate::Backtraced;

use trellis_span::Span;

use colored::Colorize;
use std::fmt;

/// An error anchored at a position in the template source.
///
/// Rendered as:
///
/// ```text
/// Error [EPAR0370003]: unexpected token: '}'
///     --> 2:9
/// ```
///
/// with coordinates reported 1-based.
#[derive(Clone, Debug)]
pub struct Formatted {
    /// The position the error points at.
    pub span: Span,
    /// The message, help text, and code.
    pub backtrace: Backtraced,
}

impl Formatted {
    /// Creates a formatted error from its parts and the offending span.
    pub fn new_from_span(
        message: impl ToString,
        help: Option<String>,
        exit_code: i32,
        code_identifier: impl ToString,
        span: Span,
    ) -> Self {
        Self {
            span,
            backtrace: Backtraced::new_from_backtrace(message, help, exit_code, code_identifier),
        }
    }

    /// The stable code shown in messages, e.g. `EPAR0370003`.
    pub fn error_code(&self) -> String {
        self.backtrace.error_code()
    }

    /// The numeric code, suitable for a process exit status.
    pub fn exit_code(&self) -> i32 {
        self.backtrace.exit_code()
    }

    /// The message without the code or position decoration.
    pub fn message(&self) -> &str {
        &self.backtrace.message
    }

    /// The position the error points at.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = "Error".bold().red();
        write!(
            f,
            "{} [{}]: {}\n    --> {}",
            label,
            self.error_code(),
            self.backtrace.message,
            self.span,
        )?;
        if let Some(help) = &self.backtrace.help {
            write!(f, "\n     = {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Formatted {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_code_and_position() {
        colored::control::set_override(false);
        let err = Formatted::new_from_span(
            "unexpected token: '}'",
            Some("remove the stray brace".to_string()),
            370_003,
            "PAR",
            Span::new(1, 8),
        );

        assert_eq!(err.error_code(), "EPAR0370003");
        assert_eq!(
            err.to_string(),
            vec![
                "Error [EPAR0370003]: unexpected token: '}'",
                "    --> 2:9",
                "     = remove the stray brace",
            ]
            .join("\n")
        );
    }
}
