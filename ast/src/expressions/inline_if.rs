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

/// An inline conditional, e.g. `a if cond else b`.
///
/// The `else` arm is optional; without it the expression renders nothing
/// when the condition is false.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineIfExpression {
    /// The condition deciding which arm is used.
    pub condition: Box<Expression>,
    /// The value when the condition holds.
    pub body: Box<Expression>,
    /// The value when the condition does not hold.
    pub otherwise: Option<Box<Expression>>,
    pub span: Span,
}

simple_node_impl!(InlineIfExpression);

impl fmt::Display for InlineIfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} if {}", self.body, self.condition)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " else {otherwise}")?;
        }
        Ok(())
    }
}
