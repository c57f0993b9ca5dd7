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

use trellis_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents all valid Trellis template tokens.
///
/// Marker tokens carry their whitespace-control flag: the flag is true when
/// a `-` was attached inside the marker (`{%-`, `-%}`, and so on).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Token {
    // Template stream
    /// A run of literal template text, emitted verbatim.
    Data(String),
    /// `{%`, opening a block tag.
    BlockStart { trim: bool },
    /// `%}`, closing a block tag.
    BlockEnd { trim: bool },
    /// `{{`, opening an interpolation.
    VariableStart { trim: bool },
    /// `}}`, closing an interpolation.
    VariableEnd { trim: bool },
    /// A whole `{# … #}` comment.
    Comment { trim_start: bool, trim_end: bool },

    // Literals
    Ident(String),
    Str(String),
    Int(String),
    Float(String),
    Regex { body: String, flags: String },
    True,
    False,
    None,
    WhiteSpace,

    // Punctuation
    Pipe,
    Tilde,
    Comma,
    Colon,
    Dot,
    Assign,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Minus,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Exp,
    LeftParen,
    RightParen,
    LeftSquare,
    RightSquare,
    LeftCurly,
    RightCurly,

    // Keywords that take part in the expression grammar
    If,
    Else,
    For,
    In,
    And,
    Or,
    Not,
}

impl Token {
    /// The tag-name view of a token: the identifier text, or the keyword's
    /// spelling for keywords that double as tag names (`if`, `else`, …).
    ///
    /// Block-tag dispatch and `break_on_blocks` matching go through this.
    pub fn symbol_name(&self) -> Option<&str> {
        Some(match self {
            Token::Ident(name) => name.as_str(),
            Token::If => "if",
            Token::Else => "else",
            Token::For => "for",
            Token::In => "in",
            Token::And => "and",
            Token::Or => "or",
            Token::Not => "not",
            Token::True => "true",
            Token::False => "false",
            Token::None => "none",
            _ => return Option::None,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Data(data) => write!(f, "{data}"),
            BlockStart { trim: false } => write!(f, "{{%"),
            BlockStart { trim: true } => write!(f, "{{%-"),
            BlockEnd { trim: false } => write!(f, "%}}"),
            BlockEnd { trim: true } => write!(f, "-%}}"),
            VariableStart { trim: false } => write!(f, "{{{{"),
            VariableStart { trim: true } => write!(f, "{{{{-"),
            VariableEnd { trim: false } => write!(f, "}}}}"),
            VariableEnd { trim: true } => write!(f, "-}}}}"),
            Comment { .. } => write!(f, "comment"),

            Ident(name) => write!(f, "{name}"),
            Str(value) => write!(f, "\"{value}\""),
            Int(value) => write!(f, "{value}"),
            Float(value) => write!(f, "{value}"),
            Regex { body, flags } => write!(f, "r/{body}/{flags}"),
            True => write!(f, "true"),
            False => write!(f, "false"),
            None => write!(f, "none"),
            WhiteSpace => write!(f, "whitespace"),

            Pipe => write!(f, "|"),
            Tilde => write!(f, "~"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Dot => write!(f, "."),
            Assign => write!(f, "="),
            Eq => write!(f, "=="),
            StrictEq => write!(f, "==="),
            NotEq => write!(f, "!="),
            StrictNotEq => write!(f, "!=="),
            Lt => write!(f, "<"),
            LtEq => write!(f, "<="),
            Gt => write!(f, ">"),
            GtEq => write!(f, ">="),
            Add => write!(f, "+"),
            Minus => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            FloorDiv => write!(f, "//"),
            Mod => write!(f, "%"),
            Exp => write!(f, "**"),
            LeftParen => write!(f, "("),
            RightParen => write!(f, ")"),
            LeftSquare => write!(f, "["),
            RightSquare => write!(f, "]"),
            LeftCurly => write!(f, "{{"),
            RightCurly => write!(f, "}}"),

            If => write!(f, "if"),
            Else => write!(f, "else"),
            For => write!(f, "for"),
            In => write!(f, "in"),
            And => write!(f, "and"),
            Or => write!(f, "or"),
            Not => write!(f, "not"),
        }
    }
}

/// A token paired with the position it starts at.
#[derive(Clone, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ {}", self.token, self.span)
    }
}

impl fmt::Debug for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <SpannedToken as fmt::Display>::fmt(self, f)
    }
}
