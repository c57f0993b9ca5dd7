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

use crate::ParserContext;

use trellis_ast::Statement;
use trellis_errors::Result;

/// A plug-in block tag.
///
/// When a block opens with a tag name no built-in claims, the registered
/// extensions are consulted in order and the first whose [`tags`](Self::tags)
/// contain the name gets to parse it. The hook runs synchronously inside
/// the parser's call stack and may reenter any public [`ParserContext`]
/// operation: `peek_token`, `next_token`, `parse_expression`,
/// `parse_until_blocks`, `advance_after_block_end`, and the rest.
///
/// The cursor is positioned at the tag's name symbol, just after the
/// opening block marker:
///
/// ```ignore
/// struct Upper;
///
/// impl Extension for Upper {
///     fn tags(&self) -> &[&'static str] {
///         &["upper"]
///     }
///
///     fn parse(&self, parser: &mut ParserContext<'_>) -> Result<Statement> {
///         parser.advance_after_block_end(None)?; // `upper %}`
///         let body = parser.parse_until_blocks(&["endupper"])?;
///         parser.advance_after_block_end(None)?; // `endupper %}`
///         // … build a node from the body …
///     }
/// }
/// ```
pub trait Extension {
    /// The block tag names this extension claims, in match order.
    fn tags(&self) -> &[&'static str];

    /// Parses one claimed tag into a statement.
    fn parse(&self, parser: &mut ParserContext<'_>) -> Result<Statement>;
}
