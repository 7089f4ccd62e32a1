/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Vancouver templates. Author names render as `Silva A`, initials
//! unpunctuated.

use super::{access_date, authors, contributor, field, field_in, literal};
use crate::template::Template;
use crate::types::MaterialType;

pub fn template(material: MaterialType) -> Option<Template> {
    let components = match material {
        MaterialType::Book => vec![
            authors(". "),
            field("titulo", ". "),
            field("cidade", ": "),
            field("editora", "; "),
            field("ano", "."),
        ],
        MaterialType::BookChapter => vec![
            authors(". "),
            field("titulo", ". "),
            literal("In: "),
            contributor("autor_obra", "", ". "),
            field("titulo_obra", ". "),
            field("cidade", ": "),
            field("editora", "; "),
            field("ano", "."),
            field_in("paginas", " p. ", "."),
        ],
        MaterialType::PeriodicalArticle => vec![
            authors(". "),
            field("titulo", ". "),
            field("periodico", ". "),
            field("ano", ";"),
            field("volume", ""),
            field_in("numero", "(", ")"),
            field_in("paginas", ":", "."),
        ],
        MaterialType::Website => vec![
            authors(". "),
            field("titulo", " [Internet]. "),
            field("ano", ". "),
            access_date("[citado em ", "]. "),
            field_in("url", "Disponível em: ", "."),
        ],
        MaterialType::Thesis => vec![
            authors(". "),
            field("titulo", " "),
            field_in("tipo", "[", "]. "),
            field("cidade", ": "),
            field("instituicao", "; "),
            field("ano", "."),
        ],
        _ => return None,
    };
    Some(Template::new(components))
}
