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

use crate::create_messages;
use std::fmt::Display;

create_messages!(
    /// ParserError enum that represents all the errors for the `trellis-parser` crate.
    ParserError,
    code_mask: 370_000i32,
    code_prefix: "PAR",

    /// For when the parser encountered an unexpected token where it knew what it wanted.
    @formatted
    unexpected {
        args: (expected: impl Display, got: impl Display),
        msg: format!("expected {expected}, got {got}"),
        help: None,
    }

    /// For when the parser encountered a token it has no rule for.
    @formatted
    unexpected_token {
        args: (got: impl Display),
        msg: format!("unexpected token: {got}"),
        help: None,
    }

    /// For when the template ended in the middle of a construct.
    @formatted
    unexpected_eof {
        args: (),
        msg: "unexpected end of file".to_string(),
        help: None,
    }

    /// For when a block opened without a tag name following it.
    @formatted
    tag_name_expected {
        args: (),
        msg: "expected the name of a block tag".to_string(),
        help: None,
    }

    /// For when a block tag matched neither a built-in tag nor an extension.
    @formatted
    unknown_block_tag {
        args: (tag: impl Display),
        msg: format!("unknown block tag: {tag}"),
        help: Some("register an extension claiming this tag before parsing".to_string()),
    }

    /// For when a tag was not terminated with `%}`.
    @formatted
    expected_block_end {
        args: (tag: impl Display),
        msg: format!("expected block end in {tag} statement"),
        help: None,
    }

    /// For when a tag-specific keyword such as `in`, `as`, or `context` was missing.
    @formatted
    expected_keyword {
        args: (keyword: impl Display),
        msg: format!("expected `{keyword}` keyword"),
        help: None,
    }

    /// For when a subscript held anything other than exactly one expression.
    @formatted
    invalid_index {
        args: (),
        msg: "invalid index".to_string(),
        help: None,
    }

    /// For when a `.` member access was not followed by a name.
    @formatted
    expected_name_lookup {
        args: (got: impl Display),
        msg: format!("expected name as lookup value, got {got}"),
        help: None,
    }

    /// For when a loop or block tag needed a plain variable name.
    @formatted
    variable_name_expected {
        args: (),
        msg: "variable name expected".to_string(),
        help: None,
    }

    /// For when a macro definition was missing its signature.
    @formatted
    expected_arguments {
        args: (),
        msg: "expected arguments".to_string(),
        help: None,
    }

    /// For when a `call` tag named something that is not a macro call.
    @formatted
    expected_macro_call {
        args: (),
        msg: "expected a macro call".to_string(),
        help: None,
    }

    /// For when a `set` tag had neither a value nor a capture body.
    @formatted
    set_expected_assignment {
        args: (),
        msg: "expected `=` or block end in set statement".to_string(),
        help: None,
    }

    /// For when a `from … import` listed no names.
    @formatted
    expected_import_names {
        args: (),
        msg: "expected at least one import name".to_string(),
        help: None,
    }

    /// For when an imported name began with an underscore.
    @formatted
    underscore_import {
        args: (),
        msg: "names starting with an underscore cannot be imported".to_string(),
        help: None,
    }

    /// For when a numeric literal did not fit the engine's number types.
    @formatted
    invalid_number_literal {
        args: (value: impl Display),
        msg: format!("invalid number literal `{value}`"),
        help: None,
    }

    /// For when a string literal was never closed.
    @formatted
    lexer_string_not_closed {
        args: (input: impl Display),
        msg: format!("expected a closing quote to terminate the string `{input}`"),
        help: None,
    }

    /// For when a regex literal was never closed.
    @formatted
    lexer_regex_not_closed {
        args: (),
        msg: "expected a closing `/` to terminate the regular expression".to_string(),
        help: None,
    }

    /// For when a comment was never closed.
    @formatted
    lexer_comment_not_closed {
        args: (),
        msg: "expected a closing marker to terminate the comment".to_string(),
        help: None,
    }

    /// For when the lexer hit a character no token starts with.
    @formatted
    lexer_unexpected_character {
        args: (character: impl Display),
        msg: format!("could not lex the character `{character}`"),
        help: None,
    }
);
