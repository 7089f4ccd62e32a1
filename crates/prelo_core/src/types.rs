/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! The two closed vocabularies of the citation engine: what is being cited,
//! and which convention formats it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of source being cited. Determines which fields are
/// required before a reference can be formatted (see [`crate::schema`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialType {
    Book,
    BookChapter,
    PeriodicalArticle,
    Legislation,
    Website,
    Film,
    Patent,
    Software,
    CartographicDocument,
    SoundDocument,
    Thesis,
}

impl MaterialType {
    pub const ALL: [MaterialType; 11] = [
        MaterialType::Book,
        MaterialType::BookChapter,
        MaterialType::PeriodicalArticle,
        MaterialType::Legislation,
        MaterialType::Website,
        MaterialType::Film,
        MaterialType::Patent,
        MaterialType::Software,
        MaterialType::CartographicDocument,
        MaterialType::SoundDocument,
        MaterialType::Thesis,
    ];

    /// The kebab-case identifier used in files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Book => "book",
            MaterialType::BookChapter => "book-chapter",
            MaterialType::PeriodicalArticle => "periodical-article",
            MaterialType::Legislation => "legislation",
            MaterialType::Website => "website",
            MaterialType::Film => "film",
            MaterialType::Patent => "patent",
            MaterialType::Software => "software",
            MaterialType::CartographicDocument => "cartographic-document",
            MaterialType::SoundDocument => "sound-document",
            MaterialType::Thesis => "thesis",
        }
    }

    /// Portal-facing label, in the portal's language.
    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Book => "Livro",
            MaterialType::BookChapter => "Capítulo de livro",
            MaterialType::PeriodicalArticle => "Artigo de periódico",
            MaterialType::Legislation => "Legislação",
            MaterialType::Website => "Site",
            MaterialType::Film => "Filme",
            MaterialType::Patent => "Patente",
            MaterialType::Software => "Software",
            MaterialType::CartographicDocument => "Documento cartográfico",
            MaterialType::SoundDocument => "Documento sonoro",
            MaterialType::Thesis => "Trabalho acadêmico",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized material-type identifier.
///
/// Unknown types are unrepresentable past this boundary: callers that parse
/// user input must treat this as a validation error, never attempt
/// formatting with a guess.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tipo de material desconhecido: {0}")]
pub struct UnknownMaterialType(pub String);

impl FromStr for MaterialType {
    type Err = UnknownMaterialType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialType::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownMaterialType(s.to_string()))
    }
}

/// A citation style: a named convention governing punctuation, field order
/// and author-name rendering. `Abnt` (NBR 6023) is the house standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationStyle {
    Abnt,
    Vancouver,
    Nlm,
    Mla,
    Apa,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Abnt,
        CitationStyle::Vancouver,
        CitationStyle::Nlm,
        CitationStyle::Mla,
        CitationStyle::Apa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CitationStyle::Abnt => "abnt",
            CitationStyle::Vancouver => "vancouver",
            CitationStyle::Nlm => "nlm",
            CitationStyle::Mla => "mla",
            CitationStyle::Apa => "apa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CitationStyle::Abnt => "ABNT NBR 6023",
            CitationStyle::Vancouver => "Vancouver",
            CitationStyle::Nlm => "NLM",
            CitationStyle::Mla => "MLA 8ª edição",
            CitationStyle::Apa => "APA 7ª edição",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized citation-style identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("estilo de citação desconhecido: {0}")]
pub struct UnknownCitationStyle(pub String);

impl FromStr for CitationStyle {
    type Err = UnknownCitationStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CitationStyle::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCitationStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_type_round_trips_through_str() {
        for material in MaterialType::ALL {
            assert_eq!(material.as_str().parse::<MaterialType>(), Ok(material));
        }
    }

    #[test]
    fn unknown_material_type_is_an_error() {
        let err = "vinyl".parse::<MaterialType>().unwrap_err();
        assert_eq!(err, UnknownMaterialType("vinyl".to_string()));
    }

    #[test]
    fn style_serde_uses_kebab_case() {
        let json = serde_json::to_string(&CitationStyle::Abnt).unwrap();
        assert_eq!(json, "\"abnt\"");
        let back: CitationStyle = serde_json::from_str("\"mla\"").unwrap();
        assert_eq!(back, CitationStyle::Mla);
    }
}
