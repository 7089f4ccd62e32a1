/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! APA 7th edition templates.
//!
//! Covers the material types the editorial staff cite in APA: books,
//! chapters, articles, websites and academic works. The remaining types
//! fall back to the style sentinel.

use super::{access_date, authors, contributor, field, field_in, literal};
use crate::template::Template;
use crate::types::MaterialType;

pub fn template(material: MaterialType) -> Option<Template> {
    let components = match material {
        MaterialType::Book => vec![
            authors(" "),
            field_in("ano", "(", "). "),
            field("titulo", ". "),
            field("cidade", ": "),
            field("editora", "."),
        ],
        MaterialType::BookChapter => vec![
            authors(" "),
            field_in("ano", "(", "). "),
            field("titulo", ". "),
            literal("In "),
            contributor("autor_obra", "", ", "),
            field("titulo_obra", " "),
            field_in("paginas", "(pp. ", "). "),
            field("cidade", ": "),
            field("editora", "."),
        ],
        MaterialType::PeriodicalArticle => vec![
            authors(" "),
            field_in("ano", "(", "). "),
            field("titulo", ". "),
            field("periodico", ", "),
            field("volume", ""),
            field_in("numero", "(", "), "),
            field("paginas", "."),
            field_in("doi", " ", "."),
        ],
        MaterialType::Website => vec![
            authors(" "),
            field_in("ano", "(", "). "),
            field("titulo", ". "),
            access_date("Recuperado em ", ", "),
            field_in("url", "de ", "."),
        ],
        MaterialType::Thesis => vec![
            authors(" "),
            field_in("ano", "(", "). "),
            field("titulo", " "),
            field_in("tipo", "[", "]. "),
            field("instituicao", ", "),
            field("cidade", "."),
        ],
        _ => return None,
    };
    Some(Template::new(components))
}
