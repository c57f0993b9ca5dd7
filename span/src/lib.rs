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

//! Source positions for the Trellis template engine.
//!
//! Positions are stored 0-based and rendered 1-based, so a [`Span`] at the
//! very start of a template displays as `1:1`.

#![forbid(unsafe_code)]

pub mod span;
pub use span::*;
