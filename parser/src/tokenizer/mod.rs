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

//! The tokenizer to convert template text into tokens.
//!
//! The [`Lexer`] streams tokens on demand rather than tokenizing up front:
//! the `raw`/`verbatim` tags reach back into the character stream, which a
//! pre-tokenized source could not support.

pub mod token;
pub use self::token::*;

pub mod lexer;
pub use self::lexer::*;

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_errors::TemplateError;

    fn tokenize(src: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(src, Tags::default());
        let mut tokens = Vec::new();
        while let Some(spanned) = lexer.next_token().unwrap() {
            tokens.push(spanned.token);
        }
        tokens
    }

    #[test]
    fn test_tokenizer() {
        let tokens = tokenize("hello {{ name }}!");
        assert_eq!(
            tokens,
            vec![
                Token::Data("hello ".to_string()),
                Token::VariableStart { trim: false },
                Token::WhiteSpace,
                Token::Ident("name".to_string()),
                Token::WhiteSpace,
                Token::VariableEnd { trim: false },
                Token::Data("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_code_tokens() {
        let tokens = tokenize(r#"{{ 1 + 2.5 * x_y | upper(="hi", 'a\n') // % ** === !== <= }}"#);
        let code: Vec<Token> = tokens
            .into_iter()
            .filter(|token| !matches!(token, Token::WhiteSpace))
            .collect();
        assert_eq!(
            code,
            vec![
                Token::VariableStart { trim: false },
                Token::Int("1".to_string()),
                Token::Add,
                Token::Float("2.5".to_string()),
                Token::Mul,
                Token::Ident("x_y".to_string()),
                Token::Pipe,
                Token::Ident("upper".to_string()),
                Token::LeftParen,
                Token::Assign,
                Token::Str("hi".to_string()),
                Token::Comma,
                Token::Str("a\n".to_string()),
                Token::RightParen,
                Token::FloorDiv,
                Token::Mod,
                Token::Exp,
                Token::StrictEq,
                Token::StrictNotEq,
                Token::LtEq,
                Token::VariableEnd { trim: false },
            ]
        );
    }

    #[test]
    fn test_keywords_and_literals() {
        let tokens = tokenize("{{ true false none null if else for in and or not r/a+b/gi }}");
        let code: Vec<Token> = tokens
            .into_iter()
            .filter(|token| !matches!(token, Token::WhiteSpace))
            .collect();
        assert_eq!(
            code,
            vec![
                Token::VariableStart { trim: false },
                Token::True,
                Token::False,
                Token::None,
                Token::None,
                Token::If,
                Token::Else,
                Token::For,
                Token::In,
                Token::And,
                Token::Or,
                Token::Not,
                Token::Regex { body: "a+b".to_string(), flags: "gi".to_string() },
                Token::VariableEnd { trim: false },
            ]
        );
    }

    #[test]
    fn test_trim_markers() {
        let tokens = tokenize("a {%- if x -%} b {{- y -}} c {#- z -#} d");
        assert_eq!(
            tokens,
            vec![
                Token::Data("a ".to_string()),
                Token::BlockStart { trim: true },
                Token::WhiteSpace,
                Token::If,
                Token::WhiteSpace,
                Token::Ident("x".to_string()),
                Token::WhiteSpace,
                Token::BlockEnd { trim: true },
                Token::Data(" b ".to_string()),
                Token::VariableStart { trim: true },
                Token::WhiteSpace,
                Token::Ident("y".to_string()),
                Token::WhiteSpace,
                Token::VariableEnd { trim: true },
                Token::Data(" c ".to_string()),
                Token::Comment { trim_start: true, trim_end: true },
                Token::Data(" d".to_string()),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let mut lexer = Lexer::new("ab\n{{ x }}", Tags::default());
        let data = lexer.next_token().unwrap().unwrap();
        assert_eq!(data.span.to_string(), "1:1");
        let open = lexer.next_token().unwrap().unwrap();
        assert_eq!(open.span.to_string(), "2:1");
        let _space = lexer.next_token().unwrap().unwrap();
        let x = lexer.next_token().unwrap().unwrap();
        assert_eq!(x.span.to_string(), "2:4");
    }

    #[test]
    fn test_unclosed_string() {
        let mut lexer = Lexer::new("{{ 'abc }}", Tags::default());
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let error = loop {
            match lexer.next_token() {
                Ok(_) => continue,
                Err(error) => break error,
            }
        };
        let TemplateError::ParserError(error) = error else {
            panic!("expected a parser error");
        };
        assert!(error.to_string().contains("closing quote"));
    }

    #[test]
    fn test_custom_tags() {
        let tags = Tags {
            block_start: "<%".to_string(),
            block_end: "%>".to_string(),
            variable_start: "<$".to_string(),
            variable_end: "$>".to_string(),
            comment_start: "<#".to_string(),
            comment_end: "#>".to_string(),
        };
        let mut lexer = Lexer::new("x <$ y $> <# c #>", tags);
        let mut tokens = Vec::new();
        while let Some(spanned) = lexer.next_token().unwrap() {
            tokens.push(spanned.token);
        }
        assert_eq!(
            tokens,
            vec![
                Token::Data("x ".to_string()),
                Token::VariableStart { trim: false },
                Token::WhiteSpace,
                Token::Ident("y".to_string()),
                Token::WhiteSpace,
                Token::VariableEnd { trim: false },
                Token::Data(" ".to_string()),
                Token::Comment { trim_start: false, trim_end: false },
            ]
        );
    }
}
