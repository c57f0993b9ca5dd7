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

use crate::{
    extension::Extension,
    tokenizer::{Lexer, RawMatch, SpannedToken, Token},
};

use trellis_ast::Identifier;
use trellis_errors::{ParserError, Result};
use trellis_span::Span;

use indexmap::IndexSet;
use regex::Regex;
use std::rc::Rc;

/// Stores the token stream of a template plus the parser's mutable state.
///
/// The cursor has single-token lookahead: `peeked` is the one-slot pushback
/// buffer. Pushing a second token before the first is read is a parser bug
/// and panics.
pub struct ParserContext<'a> {
    /// The streaming token source.
    lexer: Lexer<'a>,
    /// The one-slot pushback buffer.
    peeked: Option<SpannedToken>,
    /// The span of the most recently consumed (or peeked) token.
    prev_span: Span,
    /// Latched by a closing marker carrying `-`; consumed at the next text
    /// emission.
    pub(crate) drop_leading_whitespace: bool,
    /// Tag names that make `parse_nodes` yield control back to the caller.
    pub(crate) break_on_blocks: Option<IndexSet<String>>,
    /// Registered extensions, consulted in order for unknown block tags.
    extensions: Vec<Rc<dyn Extension>>,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] over the given lexer.
    pub fn new(lexer: Lexer<'a>, extensions: Vec<Rc<dyn Extension>>) -> Self {
        Self {
            lexer,
            peeked: None,
            prev_span: Span::dummy(),
            drop_leading_whitespace: false,
            break_on_blocks: None,
            extensions,
        }
    }

    /// Returns the next token, skipping whitespace tokens.
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>> {
        self.next_token_impl(false)
    }

    /// Returns the next token, whitespace tokens included.
    pub fn next_token_with_whitespace(&mut self) -> Result<Option<SpannedToken>> {
        self.next_token_impl(true)
    }

    fn next_token_impl(&mut self, with_whitespace: bool) -> Result<Option<SpannedToken>> {
        if let Some(token) = self.peeked.take() {
            // A pushed-back whitespace token is dropped silently here.
            if with_whitespace || !matches!(token.token, Token::WhiteSpace) {
                self.prev_span = token.span;
                return Ok(Some(token));
            }
        }
        loop {
            match self.lexer.next_token()? {
                Some(token) if !with_whitespace && matches!(token.token, Token::WhiteSpace) => {
                    continue;
                }
                Some(token) => {
                    self.prev_span = token.span;
                    return Ok(Some(token));
                }
                None => return Ok(None),
            }
        }
    }

    /// Fills and returns the pushback slot without consuming it.
    pub fn peek_token(&mut self) -> Result<Option<&SpannedToken>> {
        if self.peeked.is_none() {
            self.peeked = self.next_token()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Pushes a token back into the cursor.
    ///
    /// Panics if a token is already buffered: only one token can be pushed
    /// between reads.
    pub fn push_token(&mut self, token: SpannedToken) {
        if self.peeked.is_some() {
            panic!("push_token: can only push one token between reads");
        }
        self.peeked = Some(token);
    }

    /// The position diagnostics should point at when no token is on hand:
    /// the buffered token's span, or the lexer's current position.
    pub fn position(&self) -> Span {
        self.peeked.as_ref().map(|token| token.span).unwrap_or_else(|| self.lexer.position())
    }

    /// The span of the most recently consumed token.
    pub(crate) fn prev_span(&self) -> Span {
        self.prev_span
    }

    /// Checks whether the next token is `token`, without consuming it.
    pub fn check(&mut self, token: &Token) -> Result<bool> {
        Ok(matches!(self.peek_token()?, Some(peeked) if &peeked.token == token))
    }

    /// Consumes the next token if it is `token`, returning whether it did.
    pub fn eat(&mut self, token: &Token) -> Result<bool> {
        if self.check(token)? {
            self.next_token()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the next token if its tag-name view is `name`.
    pub fn eat_symbol(&mut self, name: &str) -> Result<bool> {
        let matches = matches!(
            self.peek_token()?,
            Some(peeked) if peeked.token.symbol_name() == Some(name)
        );
        if matches {
            self.next_token()?;
        }
        Ok(matches)
    }

    /// Eats the expected `token`, or fails with `expected …, got …`.
    pub fn expect(&mut self, token: &Token) -> Result<SpannedToken> {
        match self.next_token()? {
            Some(found) if &found.token == token => Ok(found),
            Some(found) => Err(ParserError::unexpected(
                format!("'{token}'"),
                format!("'{}'", found.token),
                found.span,
            )
            .into()),
            None => Err(ParserError::unexpected_eof(self.position()).into()),
        }
    }

    /// Eats an identifier token, or fails.
    pub fn expect_identifier(&mut self) -> Result<Identifier> {
        match self.next_token()? {
            Some(SpannedToken { token: Token::Ident(name), span }) => {
                Ok(Identifier::new(name, span))
            }
            Some(found) => Err(ParserError::unexpected(
                "identifier",
                format!("'{}'", found.token),
                found.span,
            )
            .into()),
            None => Err(ParserError::unexpected_eof(self.position()).into()),
        }
    }

    /// A short rendering of the next token for error messages.
    pub(crate) fn peek_display(&mut self) -> Result<String> {
        Ok(match self.peek_token()? {
            Some(token) => format!("'{}'", token.token),
            None => "end of file".to_string(),
        })
    }

    /// The tag-name view of the next token, if it has one.
    pub(crate) fn peek_tag_name(&mut self) -> Result<Option<String>> {
        Ok(self
            .peek_token()?
            .and_then(|token| token.token.symbol_name().map(|name| name.to_string())))
    }

    /// Consumes a block end if one is next, applying its whitespace control.
    pub(crate) fn eat_block_end(&mut self) -> Result<bool> {
        let trim = match self.peek_token()? {
            Some(SpannedToken { token: Token::BlockEnd { trim }, .. }) => *trim,
            _ => return Ok(false),
        };
        self.next_token()?;
        if trim {
            self.drop_leading_whitespace = true;
        }
        Ok(true)
    }

    /// Consumes a tag's closing `%}`, applying its whitespace control.
    ///
    /// Without an explicit `name`, the tag's name symbol is consumed first
    /// (the `{% endif %}` shape); `name` is otherwise only used in the
    /// diagnostic.
    pub fn advance_after_block_end(&mut self, name: Option<&str>) -> Result<SpannedToken> {
        let tag = match name {
            Some(name) => name.to_string(),
            None => match self.next_token()? {
                Some(token) => match token.token.symbol_name() {
                    Some(symbol) => symbol.to_string(),
                    None => return Err(ParserError::tag_name_expected(token.span).into()),
                },
                None => return Err(ParserError::unexpected_eof(self.position()).into()),
            },
        };
        match self.next_token()? {
            Some(token) => match token.token {
                Token::BlockEnd { trim } => {
                    if trim {
                        self.drop_leading_whitespace = true;
                    }
                    Ok(token)
                }
                _ => Err(ParserError::expected_block_end(tag, token.span).into()),
            },
            None => Err(ParserError::expected_block_end(tag, self.position()).into()),
        }
    }

    /// Consumes an interpolation's closing `}}`, applying its whitespace
    /// control.
    pub fn advance_after_variable_end(&mut self) -> Result<()> {
        match self.next_token()? {
            Some(token) => match token.token {
                Token::VariableEnd { trim } => {
                    if trim {
                        self.drop_leading_whitespace = true;
                    }
                    Ok(())
                }
                _ => Err(ParserError::unexpected(
                    "variable end",
                    format!("'{}'", token.token),
                    token.span,
                )
                .into()),
            },
            None => Err(ParserError::unexpected_eof(self.position()).into()),
        }
    }

    /// True when `tag` should end the current nested parse.
    pub(crate) fn should_break(&self, tag: &str) -> bool {
        self.break_on_blocks.as_ref().map_or(false, |names| names.contains(tag))
    }

    /// The first registered extension claiming `tag`, if any.
    pub(crate) fn find_extension(&self, tag: &str) -> Option<Rc<dyn Extension>> {
        self.extensions.iter().find(|extension| extension.tags().iter().any(|t| *t == tag)).cloned()
    }

    /// Raw-scan escape hatch; see [`Lexer::extract_regex`].
    pub(crate) fn extract_regex(&mut self, pattern: &Regex) -> Option<RawMatch> {
        debug_assert!(self.peeked.is_none(), "raw scan with a buffered token would desync");
        self.lexer.extract_regex(pattern)
    }

    /// Raw-scan rewind; see [`Lexer::back_n`].
    pub(crate) fn rewind(&mut self, len: usize) {
        self.lexer.back_n(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tags;

    fn context(src: &str) -> ParserContext<'_> {
        ParserContext::new(Lexer::new(src, Tags::default()), Vec::new())
    }

    #[test]
    fn next_token_skips_whitespace() {
        let mut p = context("{{ a }}");
        p.next_token().unwrap();
        let token = p.next_token().unwrap().unwrap();
        assert_eq!(token.token, Token::Ident("a".to_string()));
    }

    #[test]
    fn pushback_roundtrip() {
        let mut p = context("{{ a }}");
        let open = p.next_token().unwrap().unwrap();
        assert_eq!(open.token, Token::VariableStart { trim: false });
        p.push_token(open.clone());
        assert_eq!(p.peek_token().unwrap().unwrap().token, open.token);
        assert_eq!(p.next_token().unwrap().unwrap().token, open.token);
    }

    #[test]
    #[should_panic(expected = "can only push one token between reads")]
    fn double_push_panics() {
        let mut p = context("{{ a }}");
        let open = p.next_token().unwrap().unwrap();
        p.push_token(open.clone());
        p.push_token(open);
    }

    #[test]
    fn pushed_whitespace_is_dropped() {
        let mut p = context("{{ a }}");
        p.next_token().unwrap();
        let space = p.next_token_with_whitespace().unwrap().unwrap();
        assert_eq!(space.token, Token::WhiteSpace);
        p.push_token(space);
        let token = p.next_token().unwrap().unwrap();
        assert_eq!(token.token, Token::Ident("a".to_string()));
    }
}
