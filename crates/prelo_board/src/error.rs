/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

use thiserror::Error;

use crate::card::Column;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The gesture's source position no longer holds the card it named
    /// (a feed event moved it first).
    #[error("cartão {card_id} não está mais em {column}[{index}]")]
    StaleGesture {
        card_id: String,
        column: Column,
        index: usize,
    },
}
