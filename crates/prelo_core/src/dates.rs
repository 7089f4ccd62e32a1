/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Date rendering for the portal's single locale (pt-BR).
//!
//! NBR 6023 abbreviates month names to their first three letters followed
//! by a period, except "maio", which is never abbreviated.

use chrono::{Datelike, NaiveDate};

const MONTHS_PT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "maio", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Abbreviated pt-BR month name, 1-based.
pub fn month_abbrev_pt(month: u32) -> &'static str {
    MONTHS_PT[(month as usize - 1).min(11)]
}

/// `7 ago. 2026`, the access-date form used in formatted references.
pub fn short_date_pt(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_abbrev_pt(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_abbreviated_month() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(short_date_pt(date), "7 ago. 2026");
    }

    #[test]
    fn maio_is_not_abbreviated() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
        assert_eq!(short_date_pt(date), "21 maio 2023");
    }
}
