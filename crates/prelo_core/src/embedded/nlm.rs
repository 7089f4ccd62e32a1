/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! NLM templates. Close to Vancouver (NLM is its parent convention);
//! differs in the article date form, the chapter editor label and the
//! extent notes.

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
            field_in("paginas", " ", " p."),
        ],
        MaterialType::BookChapter => vec![
            authors(". "),
            field("titulo", ". "),
            literal("In: "),
            contributor("autor_obra", "", ", editores. "),
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
            field("ano", ""),
            field_in("mes", " ", ""),
            literal(";"),
            field("volume", ""),
            field_in("numero", "(", ")"),
            field_in("paginas", ":", "."),
        ],
        MaterialType::Website => vec![
            authors(". "),
            field("titulo", " [Internet]. "),
            field("ano", ". "),
            access_date("[acesso em ", "]. "),
            field_in("url", "Disponível em: ", "."),
        ],
        MaterialType::Thesis => vec![
            authors(". "),
            field("titulo", " "),
            field_in("tipo", "[", "]. "),
            field("cidade", ": "),
            field("instituicao", "; "),
            field("ano", "."),
            field_in("folhas", " ", " f."),
        ],
        _ => return None,
    };
    Some(Template::new(components))
}
