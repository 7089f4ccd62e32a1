/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Author names and author-list parsing.
//!
//! The portal captures authors as one string: `"Sobrenome, Nome"` entries
//! separated by semicolons. Parsing is a total, explicit step with named
//! per-entry errors; rendering (in `prelo_processor`) only ever sees
//! already-parsed names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One parsed author: a non-empty surname and a non-empty given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    #[serde(rename = "sobrenome")]
    pub surname: String,
    #[serde(rename = "nome")]
    pub given: String,
}

impl AuthorName {
    pub fn new(surname: impl Into<String>, given: impl Into<String>) -> Self {
        AuthorName {
            surname: surname.into(),
            given: given.into(),
        }
    }

    /// Parse a single `"Sobrenome, Nome"` entry.
    ///
    /// Exactly one comma separates the parts; either part blank is an
    /// error, never a silent fallback.
    pub fn parse(entry: &str) -> Result<Self, AuthorParseError> {
        let mut parts = entry.splitn(2, ',');
        let surname = parts.next().unwrap_or_default().trim();
        let Some(given) = parts.next().map(str::trim) else {
            return Err(AuthorParseError::MissingComma {
                entry: entry.trim().to_string(),
            });
        };
        if given.contains(',') {
            return Err(AuthorParseError::ExtraComma {
                entry: entry.trim().to_string(),
            });
        }
        if surname.is_empty() {
            return Err(AuthorParseError::EmptySurname {
                entry: entry.trim().to_string(),
            });
        }
        if given.is_empty() {
            return Err(AuthorParseError::EmptyGivenName {
                entry: entry.trim().to_string(),
            });
        }
        Ok(AuthorName::new(surname, given))
    }

    /// Initials of the given name, one per word: `"Ana Maria"` → `"A. M."`.
    pub fn initials(&self) -> String {
        self.given
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|c| format!("{}.", c.to_uppercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Initials without periods or spaces, Vancouver style: `"AM"`.
    pub fn bare_initials(&self) -> String {
        self.given
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A malformed author-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorParseError {
    #[error("entrada de autor sem vírgula: {entry:?}")]
    MissingComma { entry: String },

    #[error("entrada de autor com mais de uma vírgula: {entry:?}")]
    ExtraComma { entry: String },

    #[error("entrada de autor sem sobrenome: {entry:?}")]
    EmptySurname { entry: String },

    #[error("entrada de autor sem nome: {entry:?}")]
    EmptyGivenName { entry: String },
}

/// Parse a full semicolon-separated author list, failing on the first
/// malformed entry. Empty segments produced by a trailing semicolon are
/// ignored.
pub fn parse_author_list(raw: &str) -> Result<Vec<AuthorName>, AuthorParseError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(AuthorName::parse)
        .collect()
}

/// Parse every entry independently, keeping per-entry outcomes. Callers
/// that want to warn-and-drop rather than reject use this form.
pub fn parse_author_entries(raw: &str) -> Vec<Result<AuthorName, AuthorParseError>> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(AuthorName::parse)
        .collect()
}
