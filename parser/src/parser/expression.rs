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

use smallvec::SmallVec;

const COMPARE_TOKENS: &[Token] = &[
    Token::Eq,
    Token::StrictEq,
    Token::NotEq,
    Token::StrictNotEq,
    Token::Lt,
    Token::Gt,
    Token::LtEq,
    Token::GtEq,
];

impl ParserContext<'_> {
    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// expression.
    ///
    /// This is the lowest precedence level; the full cascade is
    /// `inline_if → or → and → not → in → compare → concat → add → sub →
    /// mul → div → floor_div → mod → pow → unary → primary → postfix`.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_inline_if()
    }

    /// Parses the `value if cond [else other]` suffix form.
    fn parse_inline_if(&mut self) -> Result<Expression> {
        let mut expr = self.parse_or()?;
        if self.eat(&Token::If)? {
            let condition = self.parse_or()?;
            let otherwise = if self.eat(&Token::Else)? {
                Some(Box::new(self.parse_or()?))
            } else {
                None
            };
            let span = expr.span();
            expr = Expression::InlineIf(InlineIfExpression {
                condition: Box::new(condition),
                body: Box::new(expr),
                otherwise,
                span,
            });
        }
        Ok(expr)
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation) -> Expression {
        let span = left.span();
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            right: Box::new(right),
            op,
            span,
        })
    }

    /// Parses a left-associative binary level `<left> token <right>` using
    /// `f` for both operands.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens)? {
            expr = Self::bin_expr(expr, f(self)?, op);
        }
        Ok(expr)
    }

    /// Eats one of the binary operators in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Result<Option<BinaryOperation>> {
        for token in tokens {
            if self.eat(token)? {
                return Ok(Some(match token {
                    Token::Or => BinaryOperation::Or,
                    Token::And => BinaryOperation::And,
                    Token::In => BinaryOperation::In,
                    Token::Tilde => BinaryOperation::Concat,
                    Token::Add => BinaryOperation::Add,
                    Token::Minus => BinaryOperation::Sub,
                    Token::Mul => BinaryOperation::Mul,
                    Token::Div => BinaryOperation::Div,
                    Token::FloorDiv => BinaryOperation::FloorDiv,
                    Token::Mod => BinaryOperation::Mod,
                    Token::Exp => BinaryOperation::Pow,
                    _ => unreachable!("`eat_bin_op` shouldn't produce this"),
                }));
            }
        }
        Ok(None)
    }

    fn parse_or(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Or], Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::And], Self::parse_not)
    }

    /// Parses the prefix `not` form.
    fn parse_not(&mut self) -> Result<Expression> {
        if self.eat(&Token::Not)? {
            let span = self.prev_span();
            let operand = self.parse_not()?;
            return Ok(Expression::Unary(UnaryExpression {
                operand: Box::new(operand),
                op: UnaryOperation::Not,
                span,
            }));
        }
        self.parse_in()
    }

    /// Parses the n-ary `in` / `not in` chain.
    fn parse_in(&mut self) -> Result<Expression> {
        let mut expr = self.parse_compare()?;
        loop {
            let invert = self.eat(&Token::Not)?;
            let not_span = self.prev_span();
            if self.eat(&Token::In)? {
                let right = self.parse_compare()?;
                expr = Self::bin_expr(expr, right, BinaryOperation::In);
                if invert {
                    expr = Expression::Unary(UnaryExpression {
                        operand: Box::new(expr),
                        op: UnaryOperation::Not,
                        span: not_span,
                    });
                }
            } else if invert {
                // A bare postfix `not` has nothing it can belong to.
                return Err(ParserError::expected_keyword("in", self.position()).into());
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Parses the n-ary comparison chain, e.g. `a < b <= c`.
    fn parse_compare(&mut self) -> Result<Expression> {
        let left = self.parse_concat()?;
        let mut chain = Vec::new();
        while let Some(op) = self.eat_cmp_op()? {
            let span = self.prev_span();
            let expr = self.parse_concat()?;
            chain.push(CompareOperand { op, expr, span });
        }
        if chain.is_empty() {
            Ok(left)
        } else {
            let span = left.span();
            Ok(Expression::Compare(CompareExpression { left: Box::new(left), chain, span }))
        }
    }

    /// Eats a comparison operator.
    fn eat_cmp_op(&mut self) -> Result<Option<ComparisonOperation>> {
        for token in COMPARE_TOKENS {
            if self.eat(token)? {
                return Ok(Some(match token {
                    Token::Eq => ComparisonOperation::Eq,
                    Token::StrictEq => ComparisonOperation::StrictEq,
                    Token::NotEq => ComparisonOperation::NotEq,
                    Token::StrictNotEq => ComparisonOperation::StrictNotEq,
                    Token::Lt => ComparisonOperation::Lt,
                    Token::Gt => ComparisonOperation::Gt,
                    Token::LtEq => ComparisonOperation::LtEq,
                    Token::GtEq => ComparisonOperation::GtEq,
                    _ => unreachable!("`eat_cmp_op` shouldn't produce this"),
                }));
            }
        }
        Ok(None)
    }

    fn parse_concat(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Tilde], Self::parse_add)
    }

    fn parse_add(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Add], Self::parse_sub)
    }

    fn parse_sub(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Minus], Self::parse_mul)
    }

    fn parse_mul(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mul], Self::parse_div)
    }

    fn parse_div(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Div], Self::parse_floor_div)
    }

    fn parse_floor_div(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::FloorDiv], Self::parse_mod)
    }

    fn parse_mod(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mod], Self::parse_pow)
    }

    /// `**` parses as a left-associative loop like every other level.
    fn parse_pow(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Exp], |p| p.parse_unary(false))
    }

    /// Parses prefix `+`/`-` operators, then the primary, then, unless
    /// `no_filters`, a filter chain. Prefix operators suppress filters on
    /// their operand so `-x | upper` binds the filter around the negation.
    pub(crate) fn parse_unary(&mut self, no_filters: bool) -> Result<Expression> {
        let mut ops: SmallVec<[(UnaryOperation, Span); 2]> = SmallVec::new();
        loop {
            if self.eat(&Token::Minus)? {
                ops.push((UnaryOperation::Neg, self.prev_span()));
            } else if self.eat(&Token::Add)? {
                ops.push((UnaryOperation::Pos, self.prev_span()));
            } else {
                break;
            }
        }
        let mut expr = self.parse_primary(false)?;
        for (op, span) in ops.into_iter().rev() {
            expr = Expression::Unary(UnaryExpression { operand: Box::new(expr), op, span });
        }
        if !no_filters {
            expr = self.parse_filter(expr)?;
        }
        Ok(expr)
    }

    /// Consumes a `| name(args)` filter chain around `expr`.
    fn parse_filter(&mut self, mut expr: Expression) -> Result<Expression> {
        while self.eat(&Token::Pipe)? {
            let name = self.parse_filter_name()?;
            let mut arguments = self.parse_filter_args()?;
            arguments.positional.insert(0, expr);
            let span = name.span;
            expr = Expression::Filter(FilterExpression { name, arguments, span });
        }
        Ok(expr)
    }

    /// Parses a filter name: one or more dotted identifiers.
    pub(crate) fn parse_filter_name(&mut self) -> Result<Identifier> {
        let first = self.expect_identifier()?;
        let mut name = first.name;
        while self.eat(&Token::Dot)? {
            let part = self.expect_identifier()?;
            name.push('.');
            name.push_str(&part.name);
        }
        Ok(Identifier::new(name, first.span))
    }

    /// Parses a filter's explicit arguments, if it has a parenthesized list.
    pub(crate) fn parse_filter_args(&mut self) -> Result<Arguments> {
        if self.check(&Token::LeftParen)? {
            self.parse_signature_required(false)
        } else {
            Ok(Arguments::empty(self.position()))
        }
    }

    /// Returns an [`Expression`] AST node if the next token is a primary
    /// expression: a literal, an identifier, or an aggregate. `no_postfix`
    /// suppresses call/subscript/member chains, for contexts such as macro
    /// names.
    pub fn parse_primary(&mut self, no_postfix: bool) -> Result<Expression> {
        let Some(SpannedToken { token, span }) = self.next_token()? else {
            return Err(ParserError::unexpected_eof(self.position()).into());
        };
        let expr = match token {
            Token::Str(value) => Expression::Literal(Literal::Str(value, span)),
            Token::Int(value) => {
                let parsed: i64 = value
                    .parse()
                    .map_err(|_| ParserError::invalid_number_literal(&value, span))?;
                Expression::Literal(Literal::Integer(parsed, span))
            }
            Token::Float(value) => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| ParserError::invalid_number_literal(&value, span))?;
                Expression::Literal(Literal::Float(parsed, span))
            }
            Token::True => Expression::Literal(Literal::Boolean(true, span)),
            Token::False => Expression::Literal(Literal::Boolean(false, span)),
            Token::None => Expression::Literal(Literal::None(span)),
            Token::Regex { body, flags } => {
                Expression::Literal(Literal::Regex { body, flags, span })
            }
            Token::Ident(name) => Expression::Identifier(Identifier::new(name, span)),
            token => {
                let shown = format!("'{token}'");
                self.push_token(SpannedToken { token, span });
                match self.parse_aggregate()? {
                    Some(expr) => expr,
                    None => return Err(ParserError::unexpected_token(shown, span).into()),
                }
            }
        };
        if no_postfix {
            Ok(expr)
        } else {
            self.parse_postfix(expr)
        }
    }

    /// Iterates call, subscript, and member accesses after a primary.
    fn parse_postfix(&mut self, mut expr: Expression) -> Result<Expression> {
        loop {
            if self.check(&Token::LeftParen)? {
                let span = self.position();
                let arguments = self.parse_signature_required(false)?;
                expr = Expression::Call(CallExpression {
                    function: Box::new(expr),
                    arguments,
                    span,
                });
            } else if self.check(&Token::LeftSquare)? {
                let span = self.position();
                let lookup = match self.parse_aggregate()? {
                    Some(Expression::Array(array)) => array,
                    _ => unreachable!("`[` always opens an array aggregate"),
                };
                if lookup.elements.len() != 1 {
                    return Err(ParserError::invalid_index(lookup.span).into());
                }
                let mut elements = lookup.elements;
                expr = Expression::Lookup(LookupExpression {
                    target: Box::new(expr),
                    index: Box::new(elements.remove(0)),
                    span,
                });
            } else if self.check(&Token::Dot)? {
                let span = self.position();
                self.next_token()?;
                match self.next_token()? {
                    Some(SpannedToken { token: Token::Ident(name), span: name_span }) => {
                        let index = Expression::Literal(Literal::Str(name, name_span));
                        expr = Expression::Lookup(LookupExpression {
                            target: Box::new(expr),
                            index: Box::new(index),
                            span,
                        });
                    }
                    Some(found) => {
                        return Err(ParserError::expected_name_lookup(
                            format!("'{}'", found.token),
                            found.span,
                        )
                        .into());
                    }
                    None => return Err(ParserError::unexpected_eof(self.position()).into()),
                }
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Parses a parenthesized group, array literal, or dict literal.
    /// Returns nothing, with the opener pushed back, when the next token
    /// opens none of them.
    pub fn parse_aggregate(&mut self) -> Result<Option<Expression>> {
        let (closer, span) = match self.peek_token()? {
            Some(peeked) => {
                let closer = match peeked.token {
                    Token::LeftParen => Token::RightParen,
                    Token::LeftSquare => Token::RightSquare,
                    Token::LeftCurly => Token::RightCurly,
                    _ => return Ok(None),
                };
                (closer, peeked.span)
            }
            None => return Ok(None),
        };
        self.next_token()?;

        let mut elements = Vec::new();
        let mut pairs = Vec::new();
        loop {
            if self.eat(&closer)? {
                break;
            }
            if !elements.is_empty() || !pairs.is_empty() {
                self.expect(&Token::Comma)?;
            }
            if closer == Token::RightCurly {
                let key = self.parse_primary(false)?;
                self.expect(&Token::Colon)?;
                let value = self.parse_expression()?;
                let span = key.span();
                pairs.push(Pair { key, value, span });
            } else {
                elements.push(self.parse_expression()?);
            }
        }

        Ok(Some(match closer {
            Token::RightParen => Expression::Group(GroupExpression { elements, span }),
            Token::RightSquare => Expression::Array(ArrayExpression { elements, span }),
            _ => Expression::Dict(DictExpression { pairs, span }),
        }))
    }

    /// Parses a signature. `tolerant` returns nothing when no `(` follows;
    /// `no_parens` reads up to, but not including, the closing block marker.
    pub fn parse_signature(
        &mut self,
        tolerant: bool,
        no_parens: bool,
    ) -> Result<Option<Arguments>> {
        if tolerant && !no_parens && !self.check(&Token::LeftParen)? {
            return Ok(None);
        }
        self.parse_signature_required(no_parens).map(Some)
    }

    pub(crate) fn parse_signature_required(&mut self, no_parens: bool) -> Result<Arguments> {
        let span = if no_parens {
            self.position()
        } else {
            if !self.eat(&Token::LeftParen)? {
                return Err(ParserError::expected_arguments(self.position()).into());
            }
            self.prev_span()
        };

        let mut arguments = Arguments::empty(span);
        let mut check_comma = false;
        loop {
            if no_parens {
                match self.peek_token()? {
                    // The block end is the terminator and is left unconsumed.
                    Some(SpannedToken { token: Token::BlockEnd { .. }, .. }) | None => break,
                    Some(_) => {}
                }
            } else if self.eat(&Token::RightParen)? {
                break;
            }
            if check_comma {
                self.expect(&Token::Comma)?;
            }
            let argument = self.parse_expression()?;
            if self.eat(&Token::Assign)? {
                let value = self.parse_expression()?;
                let span = argument.span();
                arguments.keywords.push(Pair { key: argument, value, span });
            } else {
                arguments.positional.push(argument);
            }
            check_comma = true;
        }
        Ok(arguments)
    }
}
