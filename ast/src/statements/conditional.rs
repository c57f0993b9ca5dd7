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
use crate::{simple_node_impl, Expression};

/// Whether a conditional renders its branches synchronously or awaits them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionalMode {
    /// A plain `if` tag.
    If,
    /// An `ifAsync` tag.
    IfAsync,
}

/// The `else` arm of a conditional: either a chained `elif`/`elseif`
/// conditional or a plain branch body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ElseBranch {
    /// A chained conditional, e.g. `{% elif … %}`.
    Elif(Box<ConditionalStatement>),
    /// A plain `{% else %}` branch.
    Else(Block),
}

impl fmt::Display for ElseBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The chained conditional renders its own `{% endif %}`.
            Self::Elif(chained) => {
                write!(f, "{{% elif {} %}}{}", chained.condition, chained.body)?;
                match &chained.otherwise {
                    Some(otherwise) => otherwise.fmt(f),
                    None => write!(f, "{{% endif %}}"),
                }
            }
            Self::Else(block) => write!(f, "{{% else %}}{block}{{% endif %}}"),
        }
    }
}

/// An `{% if … %}` statement, e.g. `{% if done %}…{% else %}…{% endif %}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    /// Sync or async rendering.
    pub mode: ConditionalMode,
    /// The branch condition.
    pub condition: Expression,
    /// The statements rendered when the condition holds.
    pub body: Block,
    /// The `elif`/`else` continuation, if any.
    pub otherwise: Option<ElseBranch>,
    pub span: Span,
}

simple_node_impl!(ConditionalStatement);

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.mode {
            ConditionalMode::If => "if",
            ConditionalMode::IfAsync => "ifAsync",
        };
        write!(f, "{{% {tag} {} %}}{}", self.condition, self.body)?;
        match &self.otherwise {
            Some(otherwise) => otherwise.fmt(f),
            None => write!(f, "{{% endif %}}"),
        }
    }
}
