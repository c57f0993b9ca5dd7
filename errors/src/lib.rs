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

//! Error types for the Trellis template engine.
//!
//! Every error carries a stable code (e.g. `EPAR0370003`), a message, an
//! optional help text, and, for errors anchored in a template, the source
//! position where it occurred. Error catalogs are declared with the
//! [`create_messages!`] macro, which generates one constructor method per
//! entry.

#![forbid(unsafe_code)]

/// Contains the common functionality for all errors: payload types and the
/// catalog-defining macro.
#[macro_use]
pub mod common;
pub use self::common::*;

/// Contains the error catalogs and the top-level [`TemplateError`].
pub mod errors;
pub use self::errors::*;
