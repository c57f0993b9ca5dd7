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

/// Declares an error catalog.
///
/// Generates an enum with `Formatted` and `Backtraced` variants and one
/// constructor method per entry. Codes are assigned sequentially from
/// `code_mask`, so the position of an entry in the catalog is part of its
/// stable code; append new entries at the end.
///
/// ```ignore
/// create_messages!(
///     /// Errors produced while parsing.
///     ParserError,
///     code_mask: 370_000i32,
///     code_prefix: "PAR",
///
///     @formatted
///     unexpected {
///         args: (expected: impl Display, got: impl Display),
///         msg: format!("expected {expected}, got {got}"),
///         help: None,
///     }
/// );
/// ```
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $($entries:tt)*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, ::thiserror::Error)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted(#[from] $crate::Formatted),
            #[error(transparent)]
            Backtraced(#[from] $crate::Backtraced),
        }

        impl $type_ {
            $crate::create_messages!(@entries $code_mask, $code_prefix, 0i32; $($entries)*);

            /// The stable code of this error, e.g. `EPAR0370003`.
            pub fn error_code(&self) -> String {
                match self {
                    Self::Formatted(formatted) => formatted.error_code(),
                    Self::Backtraced(backtraced) => backtraced.error_code(),
                }
            }

            /// The numeric code of this error.
            pub fn exit_code(&self) -> i32 {
                match self {
                    Self::Formatted(formatted) => formatted.exit_code(),
                    Self::Backtraced(backtraced) => backtraced.exit_code(),
                }
            }
        }
    };

    (@entries $code_mask:expr, $code_prefix:expr, $count:expr;) => {};

    (@entries $code_mask:expr, $code_prefix:expr, $count:expr;
        $(#[$docs:meta])*
        @formatted $name:ident {
            args: ( $($arg:ident: $ty:ty),* $(,)? ),
            msg: $msg:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        $(#[$docs])*
        pub fn $name($($arg: $ty,)* span: ::trellis_span::Span) -> Self {
            Self::Formatted($crate::Formatted::new_from_span(
                $msg,
                $help,
                $code_mask + $count,
                $code_prefix,
                span,
            ))
        }

        $crate::create_messages!(@entries $code_mask, $code_prefix, $count + 1i32; $($rest)*);
    };

    (@entries $code_mask:expr, $code_prefix:expr, $count:expr;
        $(#[$docs:meta])*
        @backtraced $name:ident {
            args: ( $($arg:ident: $ty:ty),* $(,)? ),
            msg: $msg:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        $(#[$docs])*
        pub fn $name($($arg: $ty),*) -> Self {
            Self::Backtraced($crate::Backtraced::new_from_backtrace(
                $msg,
                $help,
                $code_mask + $count,
                $code_prefix,
            ))
        }

        $crate::create_messages!(@entries $code_mask, $code_prefix, $count + 1i32; $($rest)*);
    };
}
