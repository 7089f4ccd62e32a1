/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Cards, columns, and the logistics-table row mirror.
//!
//! [`BookCard`] is the domain shape the board works with; [`CardRow`] is
//! the relational table's shape, with the table's own column identifiers.
//! The two convert losslessly in both directions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four fixed stages of the logistics board. Serialized with the
/// status strings the logistics table stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "aguardando_envio")]
    AwaitingShipment,
    #[serde(rename = "na_grafica")]
    AtPrinter,
    #[serde(rename = "chegou_editora")]
    ArrivedAtPublisher,
    #[serde(rename = "concluido")]
    Completed,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::AwaitingShipment,
        Column::AtPrinter,
        Column::ArrivedAtPublisher,
        Column::Completed,
    ];

    /// The status string stored in the logistics table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::AwaitingShipment => "aguardando_envio",
            Column::AtPrinter => "na_grafica",
            Column::ArrivedAtPublisher => "chegou_editora",
            Column::Completed => "concluido",
        }
    }

    /// Portal-facing column heading.
    pub fn label(&self) -> &'static str {
        match self {
            Column::AwaitingShipment => "Aguardando envio",
            Column::AtPrinter => "Na gráfica",
            Column::ArrivedAtPublisher => "Chegou na editora",
            Column::Completed => "Concluído",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status de cartão desconhecido: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// One print/delivery job. The board holds the only authoritative
/// in-memory copy; the logistics table is the durable source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_printer: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrived_at_publisher: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_arrival: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrived_quantity: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub status: Column,
}

/// A row of the logistics table, under the table's own identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub titulo_livro: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota_fiscal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_envio_grafica: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_chegada_editora: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previsao_chegada: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_prevista: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_recebida: Option<u32>,
    pub criado_em: DateTime<Utc>,
    pub status: Column,
}

impl From<CardRow> for BookCard {
    fn from(row: CardRow) -> Self {
        BookCard {
            id: row.id,
            title: row.titulo_livro,
            isbn: row.isbn,
            invoice_ref: row.nota_fiscal,
            sent_to_printer: row.data_envio_grafica,
            arrived_at_publisher: row.data_chegada_editora,
            expected_arrival: row.previsao_chegada,
            expected_quantity: row.quantidade_prevista,
            arrived_quantity: row.quantidade_recebida,
            created_at: row.criado_em,
            status: row.status,
        }
    }
}

impl From<BookCard> for CardRow {
    fn from(card: BookCard) -> Self {
        CardRow {
            id: card.id,
            titulo_livro: card.title,
            isbn: card.isbn,
            nota_fiscal: card.invoice_ref,
            data_envio_grafica: card.sent_to_printer,
            data_chegada_editora: card.arrived_at_publisher,
            previsao_chegada: card.expected_arrival,
            quantidade_prevista: card.expected_quantity,
            quantidade_recebida: card.arrived_quantity,
            criado_em: card.created_at,
            status: card.status,
        }
    }
}
