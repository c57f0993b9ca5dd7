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

/// A binary operator.
///
/// Precedence is defined in the parser; every operator here is
/// left-associative, including `**`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Addition, i.e. `+`.
    Add,
    /// Logical AND, i.e. `and`.
    And,
    /// String concatenation, i.e. `~`.
    Concat,
    /// Division, i.e. `/`.
    Div,
    /// Floor division, i.e. `//`.
    FloorDiv,
    /// Containment, i.e. `in`.
    In,
    /// Arithmetic modulo, i.e. `%`.
    Mod,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Logical OR, i.e. `or`.
    Or,
    /// Exponentiation, i.e. `**`.
    Pow,
    /// Subtraction, i.e. `-`.
    Sub,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Add => "+",
            Self::And => "and",
            Self::Concat => "~",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::In => "in",
            Self::Mod => "%",
            Self::Mul => "*",
            Self::Or => "or",
            Self::Pow => "**",
            Self::Sub => "-",
        })
    }
}

/// A binary expression, e.g. `price * count`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand.
    pub left: Box<Expression>,
    /// The right operand.
    pub right: Box<Expression>,
    /// The operator joining the operands.
    pub op: BinaryOperation,
    pub span: Span,
}

simple_node_impl!(BinaryExpression);

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
