/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! The reference formatter.
//!
//! Walks the embedded template for a (style × material type) pair against
//! a field set. Components whose field is absent or blank are skipped
//! together with their punctuation; the formatter never re-validates,
//! callers run [`Formatter::validate`] first.

use chrono::{Local, NaiveDate};
use prelo_core::contributor::parse_author_list;
use prelo_core::dates::short_date_pt;
use prelo_core::embedded;
use prelo_core::reference::{FieldSet, FormattedReference, Reference};
use prelo_core::schema;
use prelo_core::template::{Template, TemplateComponent};
use prelo_core::types::{CitationStyle, MaterialType};

use crate::error::FormatError;
use crate::names::format_author_list;

/// Returned for a (style × material type) pair with no template. A fixed
/// string, not an error: the portal displays it in place of a reference.
pub const STYLE_NOT_AVAILABLE: &str = "Estilo não disponível para este tipo de material.";

/// Returned by the string-boundary surface for an unrecognized material
/// type identifier.
pub const MATERIAL_NOT_SUPPORTED: &str = "Tipo de material não suportado.";

/// Formats references in one citation style.
///
/// By default the access date substituted for website/legislation
/// references is the current date, so the same field set formatted on two
/// different days produces two different strings. Pin it with
/// [`Formatter::as_of`] to make formatting a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Formatter {
    style: CitationStyle,
    as_of: Option<NaiveDate>,
}

impl Formatter {
    pub fn new(style: CitationStyle) -> Self {
        Formatter {
            style,
            as_of: None,
        }
    }

    /// Fix the date substituted for a missing access-date field.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    pub fn style(&self) -> CitationStyle {
        self.style
    }

    /// Check the reference against the field schema and author-list
    /// grammar. No state is touched; formatting after a validation error
    /// is the caller's own risk.
    pub fn validate(&self, reference: &Reference) -> Result<(), FormatError> {
        let missing = schema::missing_fields(&reference.fields, reference.material);
        if !missing.is_empty() {
            return Err(FormatError::MissingFields {
                material: reference.material,
                fields: missing.iter().map(|s| s.to_string()).collect(),
            });
        }
        for field in schema::contributor_fields(reference.material) {
            if let Some(raw) = reference.field(field) {
                parse_author_list(raw).map_err(|source| FormatError::InvalidAuthorList {
                    field: field.to_string(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Format a reference. Never fails: unsupported pairs yield the
    /// sentinel text.
    pub fn format(&self, reference: &Reference) -> FormattedReference {
        self.format_fields(&reference.fields, reference.material)
    }

    /// Format a bare field set.
    pub fn format_fields(&self, fields: &FieldSet, material: MaterialType) -> FormattedReference {
        let as_of = self.resolve_as_of();
        let text = match embedded::template_for(self.style, material) {
            Some(template) => render(&template, fields, self.style, as_of),
            None => STYLE_NOT_AVAILABLE.to_string(),
        };
        FormattedReference {
            text,
            material,
            style: self.style,
            fields: fields.clone(),
            as_of,
        }
    }

    /// String-boundary surface: the material type arrives as text (e.g.
    /// from a stored row) and an unrecognized identifier renders as the
    /// material sentinel.
    pub fn format_named(&self, material: &str, fields: &FieldSet) -> String {
        match material.parse::<MaterialType>() {
            Ok(material) => self.format_fields(fields, material).text,
            Err(_) => MATERIAL_NOT_SUPPORTED.to_string(),
        }
    }

    fn resolve_as_of(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

fn render(template: &Template, fields: &FieldSet, style: CitationStyle, as_of: NaiveDate) -> String {
    let mut out = String::new();
    for component in &template.components {
        let value = component_value(component, fields, style, as_of);
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        let rendering = component.rendering();
        if let Some(prefix) = &rendering.prefix {
            out.push_str(prefix);
        }
        if rendering.uppercase == Some(true) {
            out.push_str(&value.to_uppercase());
        } else {
            out.push_str(&value);
        }
        if let Some(suffix) = &rendering.suffix {
            out.push_str(suffix);
        }
    }
    out.trim_end().to_string()
}

fn component_value(
    component: &TemplateComponent,
    fields: &FieldSet,
    style: CitationStyle,
    as_of: NaiveDate,
) -> Option<String> {
    match component {
        TemplateComponent::Contributor(c) => {
            let raw = non_blank(fields, &c.contributor)?;
            Some(format_author_list(raw, style))
        }
        TemplateComponent::Field(f) => non_blank(fields, &f.field).map(str::to_string),
        TemplateComponent::AccessDate(a) => Some(
            non_blank(fields, &a.access_date)
                .map(str::to_string)
                .unwrap_or_else(|| short_date_pt(as_of)),
        ),
        TemplateComponent::Literal(l) => Some(l.literal.clone()),
        _ => None,
    }
}

fn non_blank<'f>(fields: &'f FieldSet, name: &str) -> Option<&'f str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn book_fields() -> FieldSet {
        fields(&[
            ("autor", "Silva, Ana"),
            ("titulo", "O Livro"),
            ("cidade", "São Paulo"),
            ("editora", "Editora X"),
            ("ano", "2023"),
        ])
    }

    #[test]
    fn abnt_book_reproduces_the_house_output() {
        let formatted =
            Formatter::new(CitationStyle::Abnt).format_fields(&book_fields(), MaterialType::Book);
        assert_eq!(
            formatted.text,
            "SILVA, A.. O Livro. São Paulo: Editora X, 2023."
        );
    }

    #[test]
    fn absent_optional_field_skips_its_punctuation() {
        let with_isbn = {
            let mut f = book_fields();
            f.insert("isbn".to_string(), "978-85-0000-000-0".to_string());
            f
        };
        let formatter = Formatter::new(CitationStyle::Abnt);
        let plain = formatter.format_fields(&book_fields(), MaterialType::Book);
        let full = formatter.format_fields(&with_isbn, MaterialType::Book);
        assert!(!plain.text.contains("ISBN"));
        assert!(full.text.ends_with("ISBN 978-85-0000-000-0."));
    }

    #[test]
    fn unsupported_pair_yields_the_style_sentinel() {
        let formatted = Formatter::new(CitationStyle::Mla)
            .format_fields(&book_fields(), MaterialType::Patent);
        assert_eq!(formatted.text, STYLE_NOT_AVAILABLE);
    }

    #[test]
    fn unknown_material_string_yields_the_material_sentinel() {
        let text = Formatter::new(CitationStyle::Abnt).format_named("vinyl", &book_fields());
        assert_eq!(text, MATERIAL_NOT_SUPPORTED);
    }

    #[test]
    fn access_date_defaults_to_the_as_of_date() {
        let web = fields(&[
            ("autor", "Silva, Ana"),
            ("titulo", "Portal"),
            ("url", "https://exemplo.com.br"),
        ]);
        let day_one = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let first = Formatter::new(CitationStyle::Abnt)
            .as_of(day_one)
            .format_fields(&web, MaterialType::Website);
        let second = Formatter::new(CitationStyle::Abnt)
            .as_of(day_two)
            .format_fields(&web, MaterialType::Website);
        assert!(first.text.contains("Acesso em: 7 ago. 2026."));
        assert!(second.text.contains("Acesso em: 8 ago. 2026."));
        assert_ne!(first.text, second.text);
    }

    #[test]
    fn explicit_access_date_wins_over_the_default() {
        let web = fields(&[
            ("autor", "Silva, Ana"),
            ("titulo", "Portal"),
            ("url", "https://exemplo.com.br"),
            ("acesso", "1 jan. 2024"),
        ]);
        let formatted = Formatter::new(CitationStyle::Abnt)
            .as_of(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap())
            .format_fields(&web, MaterialType::Website);
        assert!(formatted.text.contains("Acesso em: 1 jan. 2024."));
        assert!(!formatted.text.contains("ago. 2026"));
    }

    #[test]
    fn validation_reports_missing_fields() {
        let mut incomplete = book_fields();
        incomplete.shift_remove("editora");
        let reference = Reference::new(MaterialType::Book, incomplete);
        let err = Formatter::new(CitationStyle::Abnt)
            .validate(&reference)
            .unwrap_err();
        match err {
            FormatError::MissingFields { fields, .. } => {
                assert_eq!(fields, vec!["editora".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validation_rejects_malformed_author_lists() {
        let mut bad = book_fields();
        bad.insert("autor".to_string(), "Silva Ana".to_string());
        let reference = Reference::new(MaterialType::Book, bad);
        let err = Formatter::new(CitationStyle::Abnt)
            .validate(&reference)
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidAuthorList { .. }));
    }

    #[test]
    fn legislation_uppercases_the_jurisdiction() {
        let lei = fields(&[
            ("jurisdicao", "Brasil"),
            ("titulo", "Lei nº 9.610, de 19 de fevereiro de 1998"),
            ("fonte", "Diário Oficial da União"),
            ("data", "20 fev. 1998"),
        ]);
        let formatted = Formatter::new(CitationStyle::Abnt)
            .as_of(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap())
            .format_fields(&lei, MaterialType::Legislation);
        assert!(formatted.text.starts_with("BRASIL. Lei nº 9.610"));
        assert!(formatted.text.contains("Acesso em: 7 ago. 2026."));
    }
}
