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
use crate::{simple_node_impl, CaptureExpression, Expression};

/// What a `set` statement binds to its targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SetValue {
    /// An inline value, e.g. `{% set x = 1 %}`.
    Value(Expression),
    /// A captured body, e.g. `{% set x %}…{% endset %}`.
    Capture(CaptureExpression),
}

/// A `{% set … %}` statement binding one or more targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetStatement {
    /// The assignment targets in source order.
    pub targets: Vec<Expression>,
    /// The bound value, inline or captured.
    pub value: SetValue,
    pub span: Span,
}

simple_node_impl!(SetStatement);

impl fmt::Display for SetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{% set ")?;
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{target}")?;
        }
        match &self.value {
            SetValue::Value(value) => write!(f, " = {value} %}}"),
            SetValue::Capture(capture) => write!(f, " %}}{capture}{{% endset %}}"),
        }
    }
}
