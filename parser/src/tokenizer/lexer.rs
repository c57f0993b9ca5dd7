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

use crate::tokenizer::{SpannedToken, Token};

use trellis_errors::{ParserError, Result};
use trellis_span::Span;

use regex::Regex;

/// The delimiter strings a template is lexed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tags {
    pub block_start: String,
    pub block_end: String,
    pub variable_start: String,
    pub variable_end: String,
    pub comment_start: String,
    pub comment_end: String,
}

impl Default for Tags {
    fn default() -> Self {
        Self {
            block_start: "{%".to_string(),
            block_end: "%}".to_string(),
            variable_start: "{{".to_string(),
            variable_end: "}}".to_string(),
            comment_start: "{#".to_string(),
            comment_end: "#}".to_string(),
        }
    }
}

/// The groups of one raw-block scan match.
#[derive(Clone, Debug)]
pub(crate) struct RawMatch {
    /// The whole matched text, terminator included.
    pub all: String,
    /// The text before the matched `{% raw %}`/`{% endraw %}` marker.
    pub pre: String,
    /// The matched tag name.
    pub name: String,
}

/// A streaming tokenizer over a template source.
///
/// The lexer is modal: outside of markers it scans literal template text,
/// inside `{% … %}` and `{{ … }}` it scans expression tokens. Whitespace in
/// code mode is emitted as [`Token::WhiteSpace`] runs; the parser's cursor
/// filters them.
pub struct Lexer<'a> {
    src: &'a str,
    tags: Tags,
    /// Byte offset of the next unread character.
    index: usize,
    /// 0-based line of the next unread character.
    line: usize,
    /// 0-based column of the next unread character.
    col: usize,
    /// True between an opening block/variable marker and its closer.
    in_code: bool,
}

impl<'a> Lexer<'a> {
    /// Returns a new lexer over `src` using the given delimiters.
    pub fn new(src: &'a str, tags: Tags) -> Self {
        Self { src, tags, index: 0, line: 0, col: 0, in_code: false }
    }

    /// The delimiters this lexer was configured with.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The position of the next unread character.
    pub fn position(&self) -> Span {
        Span::new(self.line, self.col)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.index..]
    }

    /// Consumes `len` bytes, keeping the line/column in step.
    fn advance(&mut self, len: usize) {
        for character in self.src[self.index..self.index + len].chars() {
            if character == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.index += len;
    }

    /// Rewinds the input by `len` bytes, recomputing the line/column.
    pub(crate) fn back_n(&mut self, len: usize) {
        self.index -= len;
        let prefix = &self.src[..self.index];
        let line_start = prefix.rfind('\n').map(|at| at + 1).unwrap_or(0);
        self.line = prefix.matches('\n').count();
        self.col = prefix[line_start..].chars().count();
    }

    /// Applies `pattern` to the remaining input. On a match the lexer
    /// advances past it and the groups are returned; otherwise the input is
    /// left untouched.
    ///
    /// This is the escape hatch the `raw`/`verbatim` tags scan with; the
    /// pattern's lazy prefix group makes the match start at the current
    /// position.
    pub(crate) fn extract_regex(&mut self, pattern: &Regex) -> Option<RawMatch> {
        let captures = pattern.captures(self.rest())?;
        let all = captures.get(0)?;
        let matched = RawMatch {
            all: all.as_str().to_string(),
            pre: captures.get(1).map(|group| group.as_str().to_string()).unwrap_or_default(),
            name: captures.get(2).map(|group| group.as_str().to_string()).unwrap_or_default(),
        };
        self.advance(all.end());
        Some(matched)
    }

    /// Returns the next token, or nothing at the end of the template.
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>> {
        if self.index >= self.src.len() {
            return Ok(None);
        }
        let span = self.position();
        let token = if self.in_code { self.next_code_token()? } else { self.next_data_token()? };
        Ok(Some(SpannedToken { token, span }))
    }

    fn next_data_token(&mut self) -> Result<Token> {
        let rest = self.rest();

        if rest.starts_with(self.tags.comment_start.as_str()) {
            return self.lex_comment();
        }
        if rest.starts_with(self.tags.variable_start.as_str()) {
            let trim = rest[self.tags.variable_start.len()..].starts_with('-');
            self.advance(self.tags.variable_start.len() + usize::from(trim));
            self.in_code = true;
            return Ok(Token::VariableStart { trim });
        }
        if rest.starts_with(self.tags.block_start.as_str()) {
            let trim = rest[self.tags.block_start.len()..].starts_with('-');
            self.advance(self.tags.block_start.len() + usize::from(trim));
            self.in_code = true;
            return Ok(Token::BlockStart { trim });
        }

        // Literal text runs to the earliest opening marker.
        let mut end = rest.len();
        for marker in [&self.tags.comment_start, &self.tags.variable_start, &self.tags.block_start] {
            if let Some(found) = rest.find(marker.as_str()) {
                end = end.min(found);
            }
        }
        let data = rest[..end].to_string();
        self.advance(end);
        Ok(Token::Data(data))
    }

    fn lex_comment(&mut self) -> Result<Token> {
        let rest = self.rest();
        let open_len = self.tags.comment_start.len();
        let trim_start = rest[open_len..].starts_with('-');
        let content_from = open_len + usize::from(trim_start);
        match rest[content_from..].find(self.tags.comment_end.as_str()) {
            Some(found) => {
                let trim_end = rest[content_from..content_from + found].ends_with('-');
                self.advance(content_from + found + self.tags.comment_end.len());
                Ok(Token::Comment { trim_start, trim_end })
            }
            None => Err(ParserError::lexer_comment_not_closed(self.position()).into()),
        }
    }

    fn next_code_token(&mut self) -> Result<Token> {
        let rest = self.rest();

        // Closing markers end code mode; an attached `-` is whitespace
        // control. Checked before operators so `%}` never lexes as `%`.
        if rest.starts_with(self.tags.variable_end.as_str()) {
            self.advance(self.tags.variable_end.len());
            self.in_code = false;
            return Ok(Token::VariableEnd { trim: false });
        }
        if rest.starts_with('-') && rest[1..].starts_with(self.tags.variable_end.as_str()) {
            self.advance(1 + self.tags.variable_end.len());
            self.in_code = false;
            return Ok(Token::VariableEnd { trim: true });
        }
        if rest.starts_with(self.tags.block_end.as_str()) {
            self.advance(self.tags.block_end.len());
            self.in_code = false;
            return Ok(Token::BlockEnd { trim: false });
        }
        if rest.starts_with('-') && rest[1..].starts_with(self.tags.block_end.as_str()) {
            self.advance(1 + self.tags.block_end.len());
            self.in_code = false;
            return Ok(Token::BlockEnd { trim: true });
        }

        let first = match rest.chars().next() {
            Some(character) => character,
            None => return Err(ParserError::unexpected_eof(self.position()).into()),
        };

        if first.is_whitespace() {
            self.advance(rest.len() - rest.trim_start().len());
            return Ok(Token::WhiteSpace);
        }
        if first == '"' || first == '\'' {
            return self.lex_string(first);
        }
        if first.is_ascii_digit() {
            return Ok(self.lex_number());
        }
        if first == 'r' && rest[1..].starts_with('/') {
            return self.lex_regex();
        }
        if first.is_ascii_alphabetic() || first == '_' || first == '$' {
            let ident = self.eat_identifier();
            return Ok(match ident.as_str() {
                "true" => Token::True,
                "false" => Token::False,
                "none" | "null" => Token::None,
                "if" => Token::If,
                "else" => Token::Else,
                "for" => Token::For,
                "in" => Token::In,
                "and" => Token::And,
                "or" => Token::Or,
                "not" => Token::Not,
                _ => Token::Ident(ident),
            });
        }

        // Longest operators first, so `**` never lexes as two `*`.
        for (pattern, token) in [
            ("===", Token::StrictEq),
            ("==", Token::Eq),
            ("=", Token::Assign),
            ("!==", Token::StrictNotEq),
            ("!=", Token::NotEq),
            ("<=", Token::LtEq),
            (">=", Token::GtEq),
            ("<", Token::Lt),
            (">", Token::Gt),
            ("**", Token::Exp),
            ("*", Token::Mul),
            ("//", Token::FloorDiv),
            ("/", Token::Div),
            ("%", Token::Mod),
            ("+", Token::Add),
            ("-", Token::Minus),
            ("~", Token::Tilde),
            ("|", Token::Pipe),
            (",", Token::Comma),
            (":", Token::Colon),
            (".", Token::Dot),
            ("(", Token::LeftParen),
            (")", Token::RightParen),
            ("[", Token::LeftSquare),
            ("]", Token::RightSquare),
            ("{", Token::LeftCurly),
            ("}", Token::RightCurly),
        ] {
            if rest.starts_with(pattern) {
                self.advance(pattern.len());
                return Ok(token);
            }
        }

        Err(ParserError::lexer_unexpected_character(first, self.position()).into())
    }

    /// Eats an identifier matching `[A-Za-z_$][A-Za-z0-9_$]*`.
    fn eat_identifier(&mut self) -> String {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        let ident = rest[..len].to_string();
        self.advance(len);
        ident
    }

    fn lex_string(&mut self, quote: char) -> Result<Token> {
        let rest = self.rest();
        let mut value = String::new();
        let mut characters = rest.char_indices();
        characters.next(); // the opening quote
        let mut closed_at = Option::<usize>::None;
        while let Some((at, character)) = characters.next() {
            if character == quote {
                closed_at = Some(at + character.len_utf8());
                break;
            }
            if character == '\\' {
                match characters.next() {
                    Some((_, escaped)) => value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        other => other,
                    }),
                    None => break,
                }
            } else {
                value.push(character);
            }
        }
        match closed_at {
            Some(end) => {
                self.advance(end);
                Ok(Token::Str(value))
            }
            None => Err(ParserError::lexer_string_not_closed(value, self.position()).into()),
        }
    }

    fn lex_number(&mut self) -> Token {
        let rest = self.rest();
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let mut end = digits_end;
        let mut float = false;
        if let Some(fraction) = rest[digits_end..].strip_prefix('.') {
            let fraction_len = fraction.find(|c: char| !c.is_ascii_digit()).unwrap_or(fraction.len());
            if fraction_len > 0 {
                float = true;
                end = digits_end + 1 + fraction_len;
            }
        }
        let text = rest[..end].to_string();
        self.advance(end);
        if float {
            Token::Float(text)
        } else {
            Token::Int(text)
        }
    }

    fn lex_regex(&mut self) -> Result<Token> {
        let rest = self.rest();
        // Past the `r/` opener.
        match rest[2..].find('/') {
            Some(found) => {
                let body = rest[2..2 + found].to_string();
                let flags_start = 2 + found + 1;
                let flags_len = rest[flags_start..]
                    .find(|c: char| !matches!(c, 'g' | 'i' | 'm' | 'y'))
                    .unwrap_or(rest.len() - flags_start);
                let flags = rest[flags_start..flags_start + flags_len].to_string();
                self.advance(flags_start + flags_len);
                Ok(Token::Regex { body, flags })
            }
            None => Err(ParserError::lexer_regex_not_closed(self.position()).into()),
        }
    }
}
