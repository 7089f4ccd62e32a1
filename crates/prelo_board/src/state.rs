/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! The board state store: four named ordered card lists.
//!
//! Every operation is a synchronous, pure transformation of the current
//! snapshot, with no hidden I/O. Components do not call the mutating
//! operations directly; they dispatch a [`crate::event::BoardEvent`]
//! through [`BoardState::apply`] so every mutation goes through one
//! transition function regardless of event source.

use serde::{Deserialize, Serialize};

use crate::card::{BookCard, Column};

/// In-memory view of the logistics board. A card belongs to exactly one
/// column at any time; in-column order is display state only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    awaiting_shipment: Vec<BookCard>,
    at_printer: Vec<BookCard>,
    arrived_at_publisher: Vec<BookCard>,
    completed: Vec<BookCard>,
}

impl BoardState {
    pub fn new() -> Self {
        BoardState::default()
    }

    /// Replace all columns with the given cards, partitioned by each
    /// card's status. Used on initial fetch; input order is preserved
    /// within each column.
    pub fn load(&mut self, cards: Vec<BookCard>) {
        for column in Column::ALL {
            self.column_mut(column).clear();
        }
        for card in cards {
            self.column_mut(card.status).push(card);
        }
    }

    pub fn column(&self, column: Column) -> &[BookCard] {
        match column {
            Column::AwaitingShipment => &self.awaiting_shipment,
            Column::AtPrinter => &self.at_printer,
            Column::ArrivedAtPublisher => &self.arrived_at_publisher,
            Column::Completed => &self.completed,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<BookCard> {
        match column {
            Column::AwaitingShipment => &mut self.awaiting_shipment,
            Column::AtPrinter => &mut self.at_printer,
            Column::ArrivedAtPublisher => &mut self.arrived_at_publisher,
            Column::Completed => &mut self.completed,
        }
    }

    /// Locate a card by id. Linear scan across all four columns; column
    /// membership may have changed since the caller last looked.
    pub fn find_card(&self, id: &str) -> Option<(Column, usize)> {
        for column in Column::ALL {
            if let Some(index) = self.column(column).iter().position(|c| c.id == id) {
                return Some((column, index));
            }
        }
        None
    }

    pub fn card(&self, id: &str) -> Option<&BookCard> {
        let (column, index) = self.find_card(id)?;
        self.column(column).get(index)
    }

    pub fn cards(&self) -> impl Iterator<Item = &BookCard> {
        Column::ALL
            .into_iter()
            .flat_map(move |c| self.column(c).iter())
    }

    pub fn card_count(&self) -> usize {
        Column::ALL.iter().map(|c| self.column(*c).len()).sum()
    }

    /// Insert if absent; replace by id if present. The card's carried
    /// status decides its column: replaced in place when unchanged,
    /// re-homed to the end of the status column when it moved.
    pub fn upsert_card(&mut self, card: BookCard) {
        match self.find_card(&card.id) {
            Some((column, index)) if column == card.status => {
                self.column_mut(column)[index] = card;
            }
            Some((column, index)) => {
                self.column_mut(column).remove(index);
                self.column_mut(card.status).push(card);
            }
            None => self.column_mut(card.status).push(card),
        }
    }

    /// Move a card to `to_index` of `to`, wherever it currently is. The
    /// index is clamped to the column length. Returns false when the id
    /// is unknown.
    pub fn move_card(&mut self, id: &str, to: Column, to_index: usize) -> bool {
        let Some((from, from_index)) = self.find_card(id) else {
            return false;
        };
        let mut card = self.column_mut(from).remove(from_index);
        card.status = to;
        let target = self.column_mut(to);
        let index = to_index.min(target.len());
        target.insert(index, card);
        true
    }

    /// Remove a card from whichever column holds it. None when unknown.
    pub fn remove_card(&mut self, id: &str) -> Option<BookCard> {
        let (column, index) = self.find_card(id)?;
        Some(self.column_mut(column).remove(index))
    }
}
