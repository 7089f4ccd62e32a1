/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

use prelo_core::contributor::AuthorParseError;
use prelo_core::types::{MaterialType, UnknownCitationStyle, UnknownMaterialType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("campos obrigatórios ausentes ({material}): {}", fields.join(", "))]
    MissingFields {
        material: MaterialType,
        fields: Vec<String>,
    },

    #[error("lista de autores inválida no campo {field}: {source}")]
    InvalidAuthorList {
        field: String,
        #[source]
        source: AuthorParseError,
    },

    #[error(transparent)]
    UnknownMaterial(#[from] UnknownMaterialType),

    #[error(transparent)]
    UnknownStyle(#[from] UnknownCitationStyle),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error ({0}): {1}")]
    Parse(String, String),
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError::Parse("JSON".to_string(), e.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(e: serde_yaml::Error) -> Self {
        FormatError::Parse("YAML".to_string(), e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
