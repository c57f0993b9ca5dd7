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

use crate::{Identifier, Node};
use trellis_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod aggregate;
pub use aggregate::*;

mod arguments;
pub use arguments::*;

mod binary;
pub use binary::*;

mod call;
pub use call::*;

mod caller;
pub use caller::*;

mod capture;
pub use capture::*;

mod compare;
pub use compare::*;

mod filter;
pub use filter::*;

mod inline_if;
pub use inline_if::*;

mod literal;
pub use literal::*;

mod lookup;
pub use lookup::*;

mod pair;
pub use pair::*;

mod template_data;
pub use template_data::*;

mod unary;
pub use unary::*;

/// Expression that evaluates to a value when the template is rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// An array literal, e.g. `[1, 2, 3]`.
    Array(ArrayExpression),
    /// A binary expression, e.g. `price * count`.
    Binary(BinaryExpression),
    /// A function or macro call, e.g. `greet(name)`.
    Call(CallExpression),
    /// The body of a `call` tag, injected as the `caller` keyword argument.
    Caller(CallerExpression),
    /// A subtree whose rendered output is captured as a string value.
    Capture(CaptureExpression),
    /// An n-ary comparison chain, e.g. `a < b <= c`.
    Compare(CompareExpression),
    /// A dict literal, e.g. `{"a": 1}`.
    Dict(DictExpression),
    /// A filter application, e.g. `name | upper`.
    Filter(FilterExpression),
    /// A parenthesized group, e.g. `(a, b)`.
    Group(GroupExpression),
    /// A variable reference.
    Identifier(Identifier),
    /// An inline conditional, e.g. `a if cond else b`.
    InlineIf(InlineIfExpression),
    /// A literal value.
    Literal(Literal),
    /// A subscript or member access, e.g. `user["name"]` or `user.name`.
    Lookup(LookupExpression),
    /// A run of literal template text.
    TemplateData(TemplateData),
    /// A unary expression, e.g. `not done` or `-total`.
    Unary(UnaryExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Array(n) => n.span(),
            Binary(n) => n.span(),
            Call(n) => n.span(),
            Caller(n) => n.span(),
            Capture(n) => n.span(),
            Compare(n) => n.span(),
            Dict(n) => n.span(),
            Filter(n) => n.span(),
            Group(n) => n.span(),
            Identifier(n) => n.span(),
            InlineIf(n) => n.span(),
            Literal(n) => n.span(),
            Lookup(n) => n.span(),
            TemplateData(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Array(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Call(n) => n.set_span(span),
            Caller(n) => n.set_span(span),
            Capture(n) => n.set_span(span),
            Compare(n) => n.set_span(span),
            Dict(n) => n.set_span(span),
            Filter(n) => n.set_span(span),
            Group(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            InlineIf(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Lookup(n) => n.set_span(span),
            TemplateData(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Array(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            Call(n) => n.fmt(f),
            Caller(n) => n.fmt(f),
            Capture(n) => n.fmt(f),
            Compare(n) => n.fmt(f),
            Dict(n) => n.fmt(f),
            Filter(n) => n.fmt(f),
            Group(n) => n.fmt(f),
            Identifier(n) => n.fmt(f),
            InlineIf(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Lookup(n) => n.fmt(f),
            TemplateData(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
        }
    }
}
