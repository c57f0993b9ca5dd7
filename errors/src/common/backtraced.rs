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

use backtrace::Backtrace;
use colored::Colorize;
use std::fmt;

/// An error that has no position in a template: misuse of an API, a failed
/// conversion, and the like. Captures a backtrace at construction time so the
/// failing call site can be recovered when needed.
#[derive(Clone, Debug)]
pub struct Backtraced {
    /// The error message.
    pub message: String,
    /// An optional remediation hint shown under the message.
    pub help: Option<String>,
    /// The numeric error code.
    pub exit_code: i32,
    /// The short catalog identifier, e.g. `PAR`.
    pub code_identifier: String,
    /// Where the error was constructed.
    pub backtrace: Backtrace,
}

impl Backtraced {
    /// Creates a backtraced error from its parts, capturing the backtrace.
    pub fn new_from_backtrace(
        message: impl ToString,
        help: Option<String>,
        exit_code: i32,
        code_identifier: impl ToString,
    ) -> Self {
        Self {
            message: message.to_string(),
            help,
            exit_code,
            code_identifier: code_identifier.to_string(),
            backtrace: Backtrace::new(),
        }
    }

    /// The stable code shown in messages, e.g. `EPAR0370003`.
    pub fn error_code(&self) -> String {
        format!("E{}{:0>7}", self.code_identifier, self.exit_code)
    }

    /// The numeric code, suitable for a process exit status.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for Backtraced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = "Error".bold().red();
        write!(f, "{} [{}]: {}", label, self.error_code(), self.message)?;
        if let Some(help) = &self.help {
            write!(f, "\n     = {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Backtraced {}
