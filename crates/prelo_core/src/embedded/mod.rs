/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Embedded citation templates, one module per style.
//!
//! Each style module maps material types to the ordered component list
//! that renders a reference of that type. ABNT, the house standard,
//! covers every material type; the other styles cover the types the
//! portal's editors actually cite. A pair with no template here renders
//! as the "style not available" sentinel, never an error.

use crate::template::{
    Rendering, Template, TemplateAccessDate, TemplateComponent, TemplateContributor,
    TemplateField, TemplateLiteral,
};
use crate::types::{CitationStyle, MaterialType};

pub mod abnt;
pub mod apa;
pub mod mla;
pub mod nlm;
pub mod vancouver;

/// The embedded template for a (style × material type) pair, if one is
/// defined.
pub fn template_for(style: CitationStyle, material: MaterialType) -> Option<Template> {
    match style {
        CitationStyle::Abnt => abnt::template(material),
        CitationStyle::Apa => apa::template(material),
        CitationStyle::Vancouver => vancouver::template(material),
        CitationStyle::Nlm => nlm::template(material),
        CitationStyle::Mla => mla::template(material),
    }
}

// Construction helpers shared by the style modules. Empty prefix/suffix
// strings mean "no punctuation on that side".

fn rendering(prefix: &str, suffix: &str) -> Rendering {
    Rendering {
        prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
        suffix: (!suffix.is_empty()).then(|| suffix.to_string()),
        uppercase: None,
    }
}

/// The main author list (`autor` field).
pub(crate) fn authors(suffix: &str) -> TemplateComponent {
    contributor("autor", "", suffix)
}

/// An author list held in an arbitrary field (`autor_obra`, `diretor`).
pub(crate) fn contributor(field: &str, prefix: &str, suffix: &str) -> TemplateComponent {
    TemplateComponent::Contributor(TemplateContributor {
        contributor: field.to_string(),
        rendering: rendering(prefix, suffix),
    })
}

pub(crate) fn field(name: &str, suffix: &str) -> TemplateComponent {
    field_in(name, "", suffix)
}

pub(crate) fn field_in(name: &str, prefix: &str, suffix: &str) -> TemplateComponent {
    TemplateComponent::Field(TemplateField {
        field: name.to_string(),
        rendering: rendering(prefix, suffix),
    })
}

pub(crate) fn field_upper(name: &str, suffix: &str) -> TemplateComponent {
    TemplateComponent::Field(TemplateField {
        field: name.to_string(),
        rendering: Rendering {
            uppercase: Some(true),
            ..rendering("", suffix)
        },
    })
}

pub(crate) fn literal(text: &str) -> TemplateComponent {
    TemplateComponent::Literal(TemplateLiteral {
        literal: text.to_string(),
    })
}

/// The access date: the `acesso` field when supplied, the as-of date
/// otherwise.
pub(crate) fn access_date(prefix: &str, suffix: &str) -> TemplateComponent {
    TemplateComponent::AccessDate(TemplateAccessDate {
        access_date: "acesso".to_string(),
        rendering: rendering(prefix, suffix),
    })
}
