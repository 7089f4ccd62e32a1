/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! MLA 8th edition templates. The first author keeps the inverted form,
//! subsequent authors run given-name-first; container titles take quotes
//! around the contained work.

use super::{access_date, authors, contributor, field, field_in};
use crate::template::Template;
use crate::types::MaterialType;

pub fn template(material: MaterialType) -> Option<Template> {
    let components = match material {
        MaterialType::Book => vec![
            authors(". "),
            field("titulo", ". "),
            field("cidade", ": "),
            field("editora", ", "),
            field("ano", "."),
        ],
        MaterialType::BookChapter => vec![
            authors(". "),
            field_in("titulo", "\"", ".\" "),
            field("titulo_obra", ", "),
            contributor("autor_obra", "organizado por ", ", "),
            field("cidade", ": "),
            field("editora", ", "),
            field("ano", ", "),
            field_in("paginas", "pp. ", "."),
        ],
        MaterialType::PeriodicalArticle => vec![
            authors(". "),
            field_in("titulo", "\"", ".\" "),
            field("periodico", ", "),
            field_in("volume", "vol. ", ", "),
            field_in("numero", "no. ", ", "),
            field("ano", ", "),
            field_in("paginas", "pp. ", "."),
        ],
        MaterialType::Website => vec![
            authors(". "),
            field_in("titulo", "\"", ".\" "),
            field("ano", ", "),
            field("url", ". "),
            access_date("Acesso em ", "."),
        ],
        _ => return None,
    };
    Some(Template::new(components))
}
