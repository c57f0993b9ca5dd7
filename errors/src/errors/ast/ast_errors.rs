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
    /// AstError enum that represents all the errors for the `trellis-ast` crate.
    AstError,
    code_mask: 372_000i32,
    code_prefix: "AST",

    /// For when the AST could not be serialized to JSON.
    @backtraced
    failed_to_convert_ast_to_json {
        args: (error: impl Display),
        msg: format!("failed to convert the AST to a JSON string: {error}"),
        help: None,
    }

    /// For when the AST could not be deserialized from JSON.
    @backtraced
    failed_to_read_json_string_to_ast {
        args: (error: impl Display),
        msg: format!("failed to convert a JSON string to an AST: {error}"),
        help: None,
    }
);
