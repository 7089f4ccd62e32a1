/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Reference data: the field set captured by the submission form and the
//! formatted output derived from it.

use crate::types::{CitationStyle, MaterialType};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → field value, in form order. Field names are the schema's
/// Portuguese identifiers (`autor`, `titulo`, ...).
pub type FieldSet = IndexMap<String, String>;

/// One bibliographic reference as captured by the portal: a material type
/// plus its field set. The id is assigned when the reference is part of a
/// stored batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "tipo")]
    pub material: MaterialType,
    #[serde(rename = "campos")]
    pub fields: FieldSet,
}

impl Reference {
    pub fn new(material: MaterialType, fields: FieldSet) -> Self {
        Reference {
            id: None,
            material,
            fields,
        }
    }

    /// Field value, if present and non-blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// A formatted citation, retained together with everything it was derived
/// from so it can be audited or re-formatted. Immutable once produced: a
/// new field set or style selection produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedReference {
    pub text: String,
    pub material: MaterialType,
    pub style: CitationStyle,
    #[serde(rename = "campos")]
    pub fields: FieldSet,
    /// The date substituted for a missing access-date field, when the
    /// template called for one.
    pub as_of: NaiveDate,
}
