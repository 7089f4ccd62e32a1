/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Template components for citation styles.
//!
//! A template is an ordered list of typed components the processor
//! interprets against a field set: literal punctuation, field values,
//! the author list, and the access date. Punctuation travels with the
//! component it belongs to, so skipping an absent optional field also
//! skips its punctuation.

use serde::{Deserialize, Serialize};

/// Rendering instructions applied to a template component.
///
/// Flattened into the component structs, so in YAML you write:
/// ```yaml
/// - field: titulo
///   suffix: ". "
/// ```
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Rendering {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Render the value in uppercase (NBR 6023 jurisdiction entries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
}

/// A template component - the building blocks of citation templates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
#[non_exhaustive]
pub enum TemplateComponent {
    Contributor(TemplateContributor),
    Field(TemplateField),
    AccessDate(TemplateAccessDate),
    Literal(TemplateLiteral),
}

impl TemplateComponent {
    pub fn rendering(&self) -> &Rendering {
        static EMPTY: Rendering = Rendering {
            prefix: None,
            suffix: None,
            uppercase: None,
        };
        match self {
            TemplateComponent::Contributor(c) => &c.rendering,
            TemplateComponent::Field(f) => &f.rendering,
            TemplateComponent::AccessDate(a) => &a.rendering,
            TemplateComponent::Literal(_) => &EMPTY,
        }
    }
}

/// The author list held in the named field, rendered by the style's
/// name rule.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateContributor {
    /// Field holding the semicolon-separated author list
    /// (`autor`, `autor_obra`, `diretor`, ...).
    pub contributor: String,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// A plain field value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateField {
    pub field: String,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// The access date: the named field when supplied, otherwise the as-of
/// date the processor was given, rendered in the portal locale.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateAccessDate {
    /// Field consulted for an explicit access date (`acesso`).
    pub access_date: String,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// Literal text emitted as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateLiteral {
    pub literal: String,
}

/// An ordered citation template for one (style × material type) pair.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub components: Vec<TemplateComponent>,
}

impl Template {
    pub fn new(components: Vec<TemplateComponent>) -> Self {
        Template { components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_component_untagged() {
        let yaml = r#"
- contributor: autor
  suffix: ". "
- field: titulo
  suffix: ". "
- literal: "In: "
- access-date: acesso
  prefix: "Acesso em: "
"#;
        let components: Vec<TemplateComponent> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(components.len(), 4);

        match &components[0] {
            TemplateComponent::Contributor(c) => {
                assert_eq!(c.contributor, "autor");
                assert_eq!(c.rendering.suffix.as_deref(), Some(". "));
            }
            _ => panic!("Expected Contributor"),
        }

        match &components[2] {
            TemplateComponent::Literal(l) => assert_eq!(l.literal, "In: "),
            _ => panic!("Expected Literal"),
        }

        match &components[3] {
            TemplateComponent::AccessDate(a) => {
                assert_eq!(a.access_date, "acesso");
                assert_eq!(a.rendering.prefix.as_deref(), Some("Acesso em: "));
            }
            _ => panic!("Expected AccessDate"),
        }
    }

    #[test]
    fn flattened_rendering_round_trips() {
        let component = TemplateComponent::Field(TemplateField {
            field: "jurisdicao".to_string(),
            rendering: Rendering {
                suffix: Some(". ".to_string()),
                uppercase: Some(true),
                ..Default::default()
            },
        });
        let yaml = serde_yaml::to_string(&component).unwrap();
        let back: TemplateComponent = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, component);
    }
}
