/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Per-material-type field schema.
//!
//! Field names are the portal's own (Portuguese) identifiers, in the order
//! the submission form presents them. The lookups are total over
//! [`MaterialType`]; unrecognized types are rejected earlier, at the string
//! parse boundary.

use crate::reference::FieldSet;
use crate::types::MaterialType;

/// Ordered field names that must be present and non-empty before a
/// reference of the given type may be formatted.
pub fn required_fields(material: MaterialType) -> &'static [&'static str] {
    match material {
        MaterialType::Book => &["autor", "titulo", "cidade", "editora", "ano"],
        MaterialType::BookChapter => &[
            "autor",
            "titulo",
            "autor_obra",
            "titulo_obra",
            "cidade",
            "editora",
            "ano",
            "paginas",
        ],
        MaterialType::PeriodicalArticle => &[
            "autor",
            "titulo",
            "periodico",
            "volume",
            "numero",
            "paginas",
            "ano",
        ],
        MaterialType::Legislation => &["jurisdicao", "titulo", "fonte", "data"],
        MaterialType::Website => &["autor", "titulo", "url"],
        MaterialType::Film => &["titulo", "diretor", "produtora", "ano"],
        MaterialType::Patent => &["autor", "titulo", "numero", "data"],
        MaterialType::Software => &["autor", "titulo", "versao", "ano"],
        MaterialType::CartographicDocument => {
            &["autor", "titulo", "cidade", "editora", "ano", "escala"]
        }
        MaterialType::SoundDocument => &["autor", "titulo", "cidade", "gravadora", "ano"],
        MaterialType::Thesis => &["autor", "titulo", "ano", "tipo", "instituicao", "cidade"],
    }
}

/// Ordered field names that may be supplied but are not mandatory.
pub fn optional_fields(material: MaterialType) -> &'static [&'static str] {
    match material {
        MaterialType::Book => &["edicao", "volume", "paginas", "isbn"],
        MaterialType::BookChapter => &["edicao"],
        MaterialType::PeriodicalArticle => &["cidade", "mes", "doi"],
        MaterialType::Legislation => &["url", "acesso"],
        MaterialType::Website => &["ano", "acesso"],
        MaterialType::Film => &["cidade", "duracao"],
        MaterialType::Patent => &["data_concessao"],
        MaterialType::Software => &["cidade", "fabricante"],
        MaterialType::CartographicDocument => &[],
        MaterialType::SoundDocument => &["interprete"],
        MaterialType::Thesis => &["folhas"],
    }
}

/// Fields whose values are semicolon-separated author lists and must
/// satisfy [`crate::contributor::parse_author_list`] before formatting.
pub fn contributor_fields(material: MaterialType) -> &'static [&'static str] {
    match material {
        MaterialType::BookChapter => &["autor", "autor_obra"],
        MaterialType::Film => &["diretor"],
        MaterialType::Legislation => &[],
        _ => &["autor"],
    }
}

/// Required fields that are absent or blank in `fields`.
///
/// Empty result means the field set satisfies the schema. Whitespace-only
/// values count as missing.
pub fn missing_fields(fields: &FieldSet, material: MaterialType) -> Vec<&'static str> {
    required_fields(material)
        .iter()
        .filter(|name| {
            fields
                .get(**name)
                .map_or(true, |value| value.trim().is_empty())
        })
        .copied()
        .collect()
}
