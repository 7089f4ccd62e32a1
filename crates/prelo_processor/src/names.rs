/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Style-specific author-name rendering.
//!
//! The validated path is [`format_authors`] over already-parsed names.
//! [`format_author_list`] is the permissive surface the portal's legacy
//! screens use: malformed entries are dropped from the joined result
//! (with a warning), on the assumption that callers validated upfront.

use prelo_core::contributor::{parse_author_entries, AuthorName};
use prelo_core::types::CitationStyle;

/// Render parsed author names in the given style. Authors are processed
/// in the order given, never sorted.
pub fn format_authors(authors: &[AuthorName], style: CitationStyle) -> String {
    match style {
        CitationStyle::Abnt => authors
            .iter()
            .map(|a| format!("{}, {}", a.surname.to_uppercase(), a.initials()))
            .collect::<Vec<_>>()
            .join("; "),
        CitationStyle::Apa => authors
            .iter()
            .map(|a| format!("{}, {}", a.surname, a.initials()))
            .collect::<Vec<_>>()
            .join(", "),
        CitationStyle::Vancouver | CitationStyle::Nlm => authors
            .iter()
            .map(|a| format!("{} {}", a.surname, a.bare_initials()))
            .collect::<Vec<_>>()
            .join(", "),
        CitationStyle::Mla => authors
            .iter()
            .enumerate()
            .map(|(i, a)| {
                if i == 0 {
                    format!("{}, {}", a.surname, a.given)
                } else {
                    format!("{} {}", a.given, a.surname)
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render a raw semicolon-separated author list, dropping malformed
/// entries. Returns an empty string when nothing parses.
pub fn format_author_list(raw: &str, style: CitationStyle) -> String {
    let authors: Vec<AuthorName> = parse_author_entries(raw)
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(author) => Some(author),
            Err(err) => {
                tracing::warn!(%err, "dropping malformed author entry");
                None
            }
        })
        .collect();
    format_authors(&authors, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors() -> Vec<AuthorName> {
        vec![
            AuthorName::new("Silva", "Ana"),
            AuthorName::new("Ferreira", "Roberto"),
        ]
    }

    #[test]
    fn abnt_uppercases_surnames_and_joins_with_semicolon() {
        assert_eq!(
            format_authors(&authors(), CitationStyle::Abnt),
            "SILVA, A.; FERREIRA, R."
        );
    }

    #[test]
    fn apa_keeps_surname_case() {
        assert_eq!(
            format_authors(&authors(), CitationStyle::Apa),
            "Silva, A., Ferreira, R."
        );
    }

    #[test]
    fn vancouver_drops_initial_periods() {
        assert_eq!(
            format_authors(&authors(), CitationStyle::Vancouver),
            "Silva A, Ferreira R"
        );
        assert_eq!(
            format_authors(&authors(), CitationStyle::Nlm),
            "Silva A, Ferreira R"
        );
    }

    #[test]
    fn mla_inverts_only_the_first_author() {
        assert_eq!(
            format_authors(&authors(), CitationStyle::Mla),
            "Silva, Ana, Roberto Ferreira"
        );
    }

    #[test]
    fn formatting_is_idempotent_per_style() {
        for style in CitationStyle::ALL {
            let once = format_authors(&authors(), style);
            let twice = format_authors(&authors(), style);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn permissive_path_drops_malformed_entries() {
        let rendered =
            format_author_list("Silva, Ana; Ferreira Roberto", CitationStyle::Abnt);
        assert_eq!(rendered, "SILVA, A.");
    }

    #[test]
    fn permissive_path_with_nothing_valid_is_empty() {
        assert_eq!(format_author_list("Ferreira Roberto", CitationStyle::Apa), "");
    }

    #[test]
    fn multi_word_given_names_take_one_initial_each() {
        let authors = vec![AuthorName::new("Souza", "Ana Maria")];
        assert_eq!(format_authors(&authors, CitationStyle::Abnt), "SOUZA, A. M.");
        assert_eq!(format_authors(&authors, CitationStyle::Vancouver), "Souza AM");
    }
}
