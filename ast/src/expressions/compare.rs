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

/// A comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperation {
    /// Loose equality, i.e. `==`.
    Eq,
    /// Greater-than, i.e. `>`.
    Gt,
    /// Greater-or-equal, i.e. `>=`.
    GtEq,
    /// Less-than, i.e. `<`.
    Lt,
    /// Less-or-equal, i.e. `<=`.
    LtEq,
    /// Loose inequality, i.e. `!=`.
    NotEq,
    /// Strict equality, i.e. `===`.
    StrictEq,
    /// Strict inequality, i.e. `!==`.
    StrictNotEq,
}

impl fmt::Display for ComparisonOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::NotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
        })
    }
}

/// One link of a comparison chain: the operator and its right operand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompareOperand {
    /// The operator joining this operand to the one before it.
    pub op: ComparisonOperation,
    /// The operand expression.
    pub expr: Expression,
    pub span: Span,
}

simple_node_impl!(CompareOperand);

impl fmt::Display for CompareOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.expr)
    }
}

/// An n-ary comparison chain, e.g. `a < b <= c`.
///
/// The chain is ordered: each operand compares against the expression to its
/// left.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompareExpression {
    /// The leftmost expression.
    pub left: Box<Expression>,
    /// The ordered comparison links. Never empty.
    pub chain: Vec<CompareOperand>,
    pub span: Span,
}

simple_node_impl!(CompareExpression);

impl fmt::Display for CompareExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.left)?;
        for operand in &self.chain {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
