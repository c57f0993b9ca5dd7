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

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-x`.
    Neg,
    /// Logical negation, i.e. `not x`.
    Not,
    /// Arithmetic identity, i.e. `+x`.
    Pos,
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Neg => "-",
            Self::Not => "not",
            Self::Pos => "+",
        })
    }
}

/// A unary expression, e.g. `not done` or `-total`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operand the operator applies to.
    pub operand: Box<Expression>,
    /// The operator.
    pub op: UnaryOperation,
    pub span: Span,
}

simple_node_impl!(UnaryExpression);

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            UnaryOperation::Not => write!(f, "not {}", self.operand),
            _ => write!(f, "{}{}", self.op, self.operand),
        }
    }
}
