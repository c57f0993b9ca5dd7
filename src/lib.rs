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

//! Trellis, a Jinja-style template engine parser.
//!
//! The facade crate: re-exports the member crates and the parsing entry
//! points.
//!
//! ```
//! let template = trellis::parse("hello {{ name }}").unwrap();
//! assert_eq!(template.statements.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub use trellis_ast as ast;
pub use trellis_errors as errors;
pub use trellis_parser as parser;
pub use trellis_span as span;

pub use trellis_parser::{parse, parse_ast, parse_with_extensions, parse_with_options};
