/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Prelo Core
//!
//! Domain model for the Prelo publishing portal. This crate defines the
//! bibliographic material types and citation styles the portal supports,
//! the per-type field schema, the declarative citation templates, and the
//! embedded template definitions for each style.
//!
//! It is a leaf crate: pure data and lookups, no I/O. The rendering engine
//! lives in `prelo_processor`; the logistics board in `prelo_board`.

pub mod contributor;
pub mod dates;
pub mod embedded;
pub mod reference;
pub mod schema;
pub mod template;
pub mod types;

pub use contributor::{parse_author_list, AuthorName, AuthorParseError};
pub use reference::{FieldSet, FormattedReference, Reference};
pub use template::{Rendering, Template, TemplateComponent};
pub use types::{CitationStyle, MaterialType};
