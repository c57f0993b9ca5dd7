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

impl ParserContext<'_> {
    /// Returns a [`Template`] AST if all tokens can be consumed and
    /// represent a valid template.
    pub fn parse_template(&mut self) -> Result<Template> {
        tracing::debug!("parsing template");
        let block = self.parse_nodes()?;
        Ok(Template::new(block.statements))
    }

    /// Parses statements until one of `names` opens a block, leaving the
    /// cursor on the tag's name symbol. The previous break set is restored
    /// before any error propagates.
    pub fn parse_until_blocks(&mut self, names: &[&str]) -> Result<Block> {
        let previous = std::mem::replace(
            &mut self.break_on_blocks,
            Some(names.iter().map(|name| name.to_string()).collect()),
        );
        let result = self.parse_nodes();
        self.break_on_blocks = previous;
        result
    }

    /// Drives the raw template stream: text, block tags, interpolations,
    /// and comments, until the stream ends or a break block is reached.
    pub(crate) fn parse_nodes(&mut self) -> Result<Block> {
        let span = self.position();
        let mut statements = Vec::new();

        while let Some(SpannedToken { token, span: tok_span }) = self.next_token()? {
            match token {
                Token::Data(text) => {
                    let mut data = text;
                    if std::mem::take(&mut self.drop_leading_whitespace) {
                        data = data.trim_start().to_string();
                    }
                    // An upcoming opening marker with `-` strips the text's
                    // trailing whitespace.
                    let trim_end = matches!(
                        self.peek_token()?.map(|next| &next.token),
                        Some(Token::BlockStart { trim: true })
                            | Some(Token::VariableStart { trim: true })
                            | Some(Token::Comment { trim_start: true, .. })
                    );
                    if trim_end {
                        data = data.trim_end().to_string();
                    }
                    statements.push(Statement::Output(OutputStatement {
                        expression: Expression::TemplateData(TemplateData {
                            value: data,
                            span: tok_span,
                        }),
                        span: tok_span,
                    }));
                }
                Token::BlockStart { .. } => {
                    self.drop_leading_whitespace = false;
                    match self.parse_statement()? {
                        Some(statement) => statements.push(statement),
                        None => break,
                    }
                }
                Token::VariableStart { .. } => {
                    let expression = self.parse_expression()?;
                    self.drop_leading_whitespace = false;
                    self.advance_after_variable_end()?;
                    statements.push(Statement::Output(OutputStatement { expression, span: tok_span }));
                }
                Token::Comment { trim_end, .. } => {
                    if trim_end {
                        self.drop_leading_whitespace = true;
                    }
                }
                token => {
                    return Err(
                        ParserError::unexpected_token(format!("'{token}'"), tok_span).into()
                    );
                }
            }
        }

        Ok(Block { statements, span })
    }
}
