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

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The raw-block scan patterns. The dashes are optional so whitespace
    /// control on the markers keeps working inside the character-level scan.
    static ref RAW_BLOCK: Regex =
        Regex::new(r"(?s)(.*?)\{%-?\s*(raw|endraw)\s*-?%\}").unwrap();
    static ref VERBATIM_BLOCK: Regex =
        Regex::new(r"(?s)(.*?)\{%-?\s*(verbatim|endverbatim)\s*-?%\}").unwrap();
}

impl ParserContext<'_> {
    /// Returns a [`Statement`] AST node for the block tag the cursor sits
    /// on, or nothing when the tag is in the active break set.
    ///
    /// Entered with the opening `{%` already consumed and the tag's first
    /// symbol up next.
    pub fn parse_statement(&mut self) -> Result<Option<Statement>> {
        let (tag, span) = match self.peek_token()? {
            Some(token) => match token.token.symbol_name() {
                Some(name) => (name.to_string(), token.span),
                None => return Err(ParserError::tag_name_expected(token.span).into()),
            },
            None => return Err(ParserError::unexpected_eof(self.position()).into()),
        };

        if self.should_break(&tag) {
            return Ok(None);
        }

        let statement = match tag.as_str() {
            "if" | "ifAsync" => Statement::Conditional(self.parse_if()?),
            "for" | "asyncEach" | "asyncAll" => {
                Statement::Iteration(Box::new(self.parse_for()?))
            }
            "block" => Statement::Block(self.parse_block_statement()?),
            "extends" => Statement::Extends(self.parse_extends()?),
            "include" => Statement::Include(self.parse_include()?),
            "set" => Statement::Set(self.parse_set()?),
            "macro" => Statement::Macro(self.parse_macro()?),
            "call" => Statement::Output(self.parse_call_statement()?),
            "import" => Statement::Import(self.parse_import()?),
            "from" => Statement::FromImport(self.parse_from()?),
            "filter" => Statement::Output(self.parse_filter_statement()?),
            "raw" => Statement::Output(self.parse_raw("raw")?),
            "verbatim" => Statement::Output(self.parse_raw("verbatim")?),
            _ => match self.find_extension(&tag) {
                Some(extension) => {
                    tracing::trace!(tag = %tag, "dispatching block tag to extension");
                    extension.parse(self)?
                }
                None => return Err(ParserError::unknown_block_tag(tag, span).into()),
            },
        };
        Ok(Some(statement))
    }

    /// Parses `{% if %}` and its `elif`/`elseif`/`else` continuations. The
    /// recursive `elif` arm consumes the shared `{% endif %}`.
    fn parse_if(&mut self) -> Result<ConditionalStatement> {
        let span = self.position();
        let (mode, tag) = if self.eat_symbol("if")? {
            (ConditionalMode::If, "if")
        } else if self.eat_symbol("elif")? {
            (ConditionalMode::If, "elif")
        } else if self.eat_symbol("elseif")? {
            (ConditionalMode::If, "elseif")
        } else if self.eat_symbol("ifAsync")? {
            (ConditionalMode::IfAsync, "ifAsync")
        } else {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'if', 'elif', or 'elseif'", got, span).into());
        };

        let condition = self.parse_expression()?;
        self.advance_after_block_end(Some(tag))?;
        let body = self.parse_until_blocks(&["elif", "elseif", "else", "endif"])?;

        let otherwise = match self.peek_tag_name()?.as_deref() {
            Some("elif") | Some("elseif") => Some(ElseBranch::Elif(Box::new(self.parse_if()?))),
            Some("else") => {
                self.advance_after_block_end(None)?;
                let block = self.parse_until_blocks(&["endif"])?;
                self.advance_after_block_end(None)?;
                Some(ElseBranch::Else(block))
            }
            Some("endif") => {
                self.advance_after_block_end(None)?;
                None
            }
            _ => {
                return Err(ParserError::unexpected(
                    "'elif', 'else', or 'endif'",
                    "end of file",
                    self.position(),
                )
                .into());
            }
        };

        Ok(ConditionalStatement { mode, condition, body, otherwise, span })
    }

    /// Parses `{% for %}`, `{% asyncEach %}`, and `{% asyncAll %}` loops.
    fn parse_for(&mut self) -> Result<IterationStatement> {
        let span = self.position();
        let mode = if self.eat_symbol("for")? {
            IterationMode::For
        } else if self.eat_symbol("asyncEach")? {
            IterationMode::AsyncEach
        } else if self.eat_symbol("asyncAll")? {
            IterationMode::AsyncAll
        } else {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected(
                "'for', 'asyncEach', or 'asyncAll'",
                got,
                span,
            )
            .into());
        };

        let first = self.parse_primary(false)?;
        if !matches!(first, Expression::Identifier(_)) {
            return Err(ParserError::variable_name_expected(first.span()).into());
        }
        // Further comma-separated targets turn the loop variable into an
        // unpacking array.
        let name = if self.eat(&Token::Comma)? {
            let mut elements = vec![first];
            loop {
                elements.push(self.parse_primary(false)?);
                if !self.eat(&Token::Comma)? {
                    break;
                }
            }
            let span = elements[0].span();
            Expression::Array(ArrayExpression { elements, span })
        } else {
            first
        };

        if !self.eat(&Token::In)? {
            return Err(ParserError::expected_keyword("in", self.position()).into());
        }
        let iterable = self.parse_expression()?;
        self.advance_after_block_end(Some(mode.start_tag()))?;

        let body = self.parse_until_blocks(&[mode.end_tag(), "else"])?;
        let otherwise = if self.eat_symbol("else")? {
            self.advance_after_block_end(Some("else"))?;
            Some(self.parse_until_blocks(&[mode.end_tag()])?)
        } else {
            None
        };
        self.advance_after_block_end(None)?;

        Ok(IterationStatement { mode, name, iterable, body, otherwise, span })
    }

    /// Parses a `{% block name %}` definition. The closing tag may repeat
    /// the name (`{% endblock name %}`); both the `endblock` symbol and the
    /// name echo are optional.
    fn parse_block_statement(&mut self) -> Result<BlockStatement> {
        let span = self.position();
        if !self.eat_symbol("block")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'block'", got, span).into());
        }
        let name = match self.parse_primary(false)? {
            Expression::Identifier(name) => name,
            other => return Err(ParserError::variable_name_expected(other.span()).into()),
        };
        self.advance_after_block_end(Some("block"))?;
        let body = self.parse_until_blocks(&["endblock"])?;
        self.eat_symbol("endblock")?;
        self.eat_symbol(&name.name)?;
        if self.peek_token()?.is_none() {
            return Err(ParserError::unexpected_eof(self.position()).into());
        }
        self.advance_after_block_end(Some("endblock"))?;
        Ok(BlockStatement { name, body, span })
    }

    fn parse_extends(&mut self) -> Result<ExtendsStatement> {
        let span = self.position();
        if !self.eat_symbol("extends")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'extends'", got, span).into());
        }
        let template = self.parse_expression()?;
        self.advance_after_block_end(Some("extends"))?;
        Ok(ExtendsStatement { template, span })
    }

    fn parse_include(&mut self) -> Result<IncludeStatement> {
        let span = self.position();
        if !self.eat_symbol("include")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'include'", got, span).into());
        }
        let template = self.parse_expression()?;
        let mut ignore_missing = false;
        if self.eat_symbol("ignore")? && self.eat_symbol("missing")? {
            ignore_missing = true;
        }
        self.advance_after_block_end(Some("include"))?;
        Ok(IncludeStatement { template, ignore_missing, span })
    }

    /// Parses `{% set x = value %}` and the captured
    /// `{% set x %}…{% endset %}` form.
    fn parse_set(&mut self) -> Result<SetStatement> {
        let span = self.position();
        if !self.eat_symbol("set")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'set'", got, span).into());
        }
        let mut targets = vec![self.parse_primary(false)?];
        while self.eat(&Token::Comma)? {
            targets.push(self.parse_primary(false)?);
        }

        let value = if self.eat(&Token::Assign)? {
            let value = self.parse_expression()?;
            self.advance_after_block_end(Some("set"))?;
            SetValue::Value(value)
        } else if self.eat_block_end()? {
            let body = self.parse_until_blocks(&["endset"])?;
            self.advance_after_block_end(None)?;
            SetValue::Capture(CaptureExpression { body, span })
        } else {
            return Err(ParserError::set_expected_assignment(self.position()).into());
        };

        Ok(SetStatement { targets, value, span })
    }

    fn parse_macro(&mut self) -> Result<MacroStatement> {
        let span = self.position();
        if !self.eat_symbol("macro")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'macro'", got, span).into());
        }
        let name = self.parse_primary(true)?;
        let arguments = self.parse_signature_required(false)?;
        self.advance_after_block_end(Some("macro"))?;
        let body = self.parse_until_blocks(&["endmacro"])?;
        self.advance_after_block_end(None)?;
        Ok(MacroStatement { name, arguments, body, span })
    }

    /// Parses `{% call [(args)] macro(…) %}body{% endcall %}`: the body
    /// becomes a [`CallerExpression`] appended to the macro call as the
    /// `caller` keyword argument.
    fn parse_call_statement(&mut self) -> Result<OutputStatement> {
        let span = self.position();
        if !self.eat_symbol("call")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'call'", got, span).into());
        }
        let caller_args = match self.parse_signature(true, false)? {
            Some(arguments) => arguments,
            None => Arguments::empty(span),
        };
        let macro_call = self.parse_primary(false)?;
        self.advance_after_block_end(Some("call"))?;
        let body = self.parse_until_blocks(&["endcall"])?;
        self.advance_after_block_end(None)?;

        let mut call = match macro_call {
            Expression::Call(call) => call,
            other => return Err(ParserError::expected_macro_call(other.span()).into()),
        };
        let caller_name = Identifier::new("caller", span);
        let caller = Expression::Caller(CallerExpression {
            name: caller_name.clone(),
            arguments: caller_args,
            body,
            span,
        });
        call.arguments.keywords.push(Pair {
            key: Expression::Identifier(caller_name),
            value: caller,
            span,
        });

        Ok(OutputStatement { expression: Expression::Call(call), span })
    }

    fn parse_import(&mut self) -> Result<ImportStatement> {
        let span = self.position();
        if !self.eat_symbol("import")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'import'", got, span).into());
        }
        let template = self.parse_expression()?;
        if !self.eat_symbol("as")? {
            return Err(ParserError::expected_keyword("as", self.position()).into());
        }
        let target = self.parse_expression()?;
        let with_context = self.parse_with_context()?;
        self.advance_after_block_end(Some("import"))?;
        Ok(ImportStatement { template, target, with_context, span })
    }

    /// Parses the optional `with context` / `without context` clause.
    fn parse_with_context(&mut self) -> Result<Option<bool>> {
        let with_context = if self.eat_symbol("with")? {
            Some(true)
        } else if self.eat_symbol("without")? {
            Some(false)
        } else {
            None
        };
        if with_context.is_some() && !self.eat_symbol("context")? {
            return Err(ParserError::expected_keyword("context", self.position()).into());
        }
        Ok(with_context)
    }

    /// Parses `{% from t import a, b as c [with context] %}`. The loop
    /// consumes the closing marker itself, so whitespace control is applied
    /// manually; the context clause is re-read after every name.
    fn parse_from(&mut self) -> Result<FromImportStatement> {
        let span = self.position();
        if !self.eat_symbol("from")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'from'", got, span).into());
        }
        let template = self.parse_expression()?;
        if !self.eat_symbol("import")? {
            return Err(ParserError::expected_keyword("import", self.position()).into());
        }

        let mut names: Vec<ImportName> = Vec::new();
        let mut with_context = None;
        loop {
            let block_end_trim = match self.peek_token()? {
                Some(SpannedToken { token: Token::BlockEnd { trim }, .. }) => Some(*trim),
                Some(_) => None,
                None => return Err(ParserError::unexpected_eof(self.position()).into()),
            };
            if let Some(trim) = block_end_trim {
                if names.is_empty() {
                    return Err(ParserError::expected_import_names(self.position()).into());
                }
                if trim {
                    self.drop_leading_whitespace = true;
                }
                self.next_token()?;
                break;
            }

            if !names.is_empty() {
                self.expect(&Token::Comma)?;
            }
            let name = self.parse_primary(false)?;
            if let Expression::Identifier(ident) = &name {
                if ident.name.starts_with('_') {
                    return Err(ParserError::underscore_import(ident.span).into());
                }
            }
            let alias = if self.eat_symbol("as")? {
                Some(self.parse_primary(false)?)
            } else {
                None
            };
            let name_span = name.span();
            names.push(ImportName { name, alias, span: name_span });

            with_context = self.parse_with_context()?;
        }

        Ok(FromImportStatement { template, names, with_context, span })
    }

    /// Parses `{% filter name(args) %}body{% endfilter %}`: the captured
    /// body becomes the filter's first argument and the whole filter is
    /// emitted as output.
    fn parse_filter_statement(&mut self) -> Result<OutputStatement> {
        let span = self.position();
        if !self.eat_symbol("filter")? {
            let got = self.peek_display()?;
            return Err(ParserError::unexpected("'filter'", got, span).into());
        }
        let name = self.parse_filter_name()?;
        let mut arguments = self.parse_filter_args()?;
        self.advance_after_block_end(Some("filter"))?;
        let body = self.parse_until_blocks(&["endfilter"])?;
        self.advance_after_block_end(None)?;

        let capture = Expression::Capture(CaptureExpression { body, span });
        arguments.positional.insert(0, capture);
        let filter_span = name.span;
        Ok(OutputStatement {
            expression: Expression::Filter(FilterExpression { name, arguments, span: filter_span }),
            span,
        })
    }

    /// Parses `{% raw %}`/`{% verbatim %}`: everything through the matching
    /// end tag is captured verbatim through the lexer's character-level
    /// scan, honoring nesting. The final scan step re-consumes the
    /// terminator after the rewind, which leaves the stream right behind it.
    fn parse_raw(&mut self, tag_name: &str) -> Result<OutputStatement> {
        let pattern: &Regex = if tag_name == "verbatim" { &VERBATIM_BLOCK } else { &RAW_BLOCK };
        let end_tag = format!("end{tag_name}");

        let begun = self.advance_after_block_end(None)?;
        let trim_start = std::mem::take(&mut self.drop_leading_whitespace);

        let mut raw_level: usize = 1;
        let mut content = String::new();
        let mut trim_end = false;
        loop {
            let Some(matched) = self.extract_regex(pattern) else { break };
            if raw_level == 0 {
                // The terminator just got re-consumed; its markers still
                // carry whitespace control for the content and the
                // following text.
                if matched.all.starts_with("{%-") {
                    trim_end = true;
                }
                if matched.all.ends_with("-%}") {
                    self.drop_leading_whitespace = true;
                }
                break;
            }
            if matched.name == tag_name {
                raw_level += 1;
            } else if matched.name == end_tag {
                raw_level -= 1;
            }
            if raw_level == 0 {
                content.push_str(&matched.pre);
                self.rewind(matched.all.len() - matched.pre.len());
            } else {
                content.push_str(&matched.all);
            }
        }

        let mut content = content;
        if trim_start {
            content = content.trim_start().to_string();
        }
        if trim_end {
            content = content.trim_end().to_string();
        }

        let span = begun.span;
        Ok(OutputStatement {
            expression: Expression::TemplateData(TemplateData { value: content, span }),
            span,
        })
    }
}
