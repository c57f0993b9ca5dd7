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

use crate::Node;
use trellis_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod block;
pub use block::*;

mod block_def;
pub use block_def::*;

mod conditional;
pub use conditional::*;

mod extends;
pub use extends::*;

mod from_import;
pub use from_import::*;

mod import;
pub use import::*;

mod include;
pub use include::*;

mod iteration;
pub use iteration::*;

mod macro_def;
pub use macro_def::*;

mod output;
pub use output::*;

mod set;
pub use set::*;

/// A top-level node of a template: literal output, an interpolation, or a
/// control-flow tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// A `{% block … %}` definition.
    Block(BlockStatement),
    /// An `{% if … %}` statement, sync or async.
    Conditional(ConditionalStatement),
    /// An `{% extends … %}` statement.
    Extends(ExtendsStatement),
    /// A `{% from … import … %}` statement.
    FromImport(FromImportStatement),
    /// An `{% import … as … %}` statement.
    Import(ImportStatement),
    /// An `{% include … %}` statement.
    Include(IncludeStatement),
    /// A `{% for … %}` loop in any of its three iteration modes.
    Iteration(Box<IterationStatement>),
    /// A `{% macro … %}` definition.
    Macro(MacroStatement),
    /// An expression or literal text emitted into the rendered output.
    Output(OutputStatement),
    /// A `{% set … %}` statement.
    Set(SetStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Block(x) => x.fmt(f),
            Statement::Conditional(x) => x.fmt(f),
            Statement::Extends(x) => x.fmt(f),
            Statement::FromImport(x) => x.fmt(f),
            Statement::Import(x) => x.fmt(f),
            Statement::Include(x) => x.fmt(f),
            Statement::Iteration(x) => x.fmt(f),
            Statement::Macro(x) => x.fmt(f),
            Statement::Output(x) => x.fmt(f),
            Statement::Set(x) => x.fmt(f),
        }
    }
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Block(n) => n.span(),
            Statement::Conditional(n) => n.span(),
            Statement::Extends(n) => n.span(),
            Statement::FromImport(n) => n.span(),
            Statement::Import(n) => n.span(),
            Statement::Include(n) => n.span(),
            Statement::Iteration(n) => n.span(),
            Statement::Macro(n) => n.span(),
            Statement::Output(n) => n.span(),
            Statement::Set(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Statement::Block(n) => n.set_span(span),
            Statement::Conditional(n) => n.set_span(span),
            Statement::Extends(n) => n.set_span(span),
            Statement::FromImport(n) => n.set_span(span),
            Statement::Import(n) => n.set_span(span),
            Statement::Include(n) => n.set_span(span),
            Statement::Iteration(n) => n.set_span(span),
            Statement::Macro(n) => n.set_span(span),
            Statement::Output(n) => n.set_span(span),
            Statement::Set(n) => n.set_span(span),
        }
    }
}
