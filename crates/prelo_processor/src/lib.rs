/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Prelo Processor
//!
//! The citation formatting engine of the Prelo publishing portal. It takes
//! a field set captured by the submission form, a material type and a
//! citation style, and produces the formatted reference string by walking
//! the embedded template for that pair.
//!
//! Unsupported (style × material type) pairs render as a fixed sentinel
//! string rather than an error, so the portal can display a message
//! instead of failing.
//!
//! # Example
//!
//! ```rust
//! use prelo_core::{CitationStyle, MaterialType, Reference};
//! use prelo_processor::Formatter;
//!
//! let mut fields = prelo_core::FieldSet::new();
//! for (name, value) in [
//!     ("autor", "Silva, Ana"),
//!     ("titulo", "O Livro"),
//!     ("cidade", "São Paulo"),
//!     ("editora", "Editora X"),
//!     ("ano", "2023"),
//! ] {
//!     fields.insert(name.to_string(), value.to_string());
//! }
//! let reference = Reference::new(MaterialType::Book, fields);
//!
//! let formatter = Formatter::new(CitationStyle::Abnt);
//! formatter.validate(&reference).unwrap();
//! let formatted = formatter.format(&reference);
//! assert_eq!(formatted.text, "SILVA, A.. O Livro. São Paulo: Editora X, 2023.");
//! ```

pub mod error;
pub mod formatter;
pub mod io;
pub mod names;

pub use error::FormatError;
pub use formatter::{Formatter, MATERIAL_NOT_SUPPORTED, STYLE_NOT_AVAILABLE};
pub use names::{format_author_list, format_authors};
