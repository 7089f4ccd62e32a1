/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! The board event union and its reducer.
//!
//! User gestures and feed notifications are both expressed as
//! [`BoardEvent`] values and applied strictly in arrival order through
//! [`BoardState::apply`]. Last applied wins; there is no timestamp
//! arbitration, which is acceptable for a human-paced logistics board.

use serde::{Deserialize, Serialize};

use crate::card::{BookCard, CardRow, Column};
use crate::state::BoardState;

/// Every mutation the board can undergo, tagged by source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "evento", content = "dados", rename_all = "kebab-case")]
pub enum BoardEvent {
    /// Staff created a card; it carries its target column in `status`.
    LocalCreate(BookCard),
    /// Staff dragged a card.
    LocalMove {
        card_id: String,
        to: Column,
        to_index: usize,
    },
    /// Staff deleted a card.
    LocalDelete { card_id: String },
    /// Feed delivered a row insert.
    FeedInsert(CardRow),
    /// Feed delivered a row update.
    FeedUpdate(CardRow),
    /// Feed delivered a row deletion.
    FeedDelete { id: String },
    /// Compensation for a failed cross-column persistence write.
    Revert {
        card_id: String,
        to: Column,
        to_index: usize,
    },
}

impl BoardState {
    /// The single dispatch point for board mutation. Events referencing
    /// unknown ids are no-ops by construction; an insert for an id
    /// already present (our own optimistic echo) is skipped.
    pub fn apply(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::LocalCreate(card) => self.upsert_card(card.clone()),
            BoardEvent::LocalMove {
                card_id,
                to,
                to_index,
            }
            | BoardEvent::Revert {
                card_id,
                to,
                to_index,
            } => {
                if !self.move_card(card_id, *to, *to_index) {
                    tracing::debug!(%card_id, "move for unknown card ignored");
                }
            }
            BoardEvent::LocalDelete { card_id } => {
                self.remove_card(card_id);
            }
            BoardEvent::FeedInsert(row) => {
                if self.find_card(&row.id).is_some() {
                    tracing::debug!(id = %row.id, "insert echo for known card skipped");
                    return;
                }
                // Server-assigned creation default: new rows land in the
                // awaiting column, status normalized to match.
                let mut card = BookCard::from(row.clone());
                card.status = Column::AwaitingShipment;
                self.upsert_card(card);
            }
            BoardEvent::FeedUpdate(row) => {
                if self.find_card(&row.id).is_none() {
                    tracing::debug!(id = %row.id, "update for unknown card ignored");
                    return;
                }
                // Re-home to the column the row's status names, so a
                // status change made elsewhere is reflected here too.
                self.upsert_card(BookCard::from(row.clone()));
            }
            BoardEvent::FeedDelete { id } => {
                if self.remove_card(id).is_none() {
                    tracing::debug!(%id, "delete for unknown card ignored");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn card(id: &str, status: Column) -> BookCard {
        BookCard {
            id: id.to_string(),
            title: "O Livro".to_string(),
            isbn: "978-85-0000-000-0".to_string(),
            invoice_ref: None,
            sent_to_printer: None,
            arrived_at_publisher: None,
            expected_arrival: None,
            expected_quantity: None,
            arrived_quantity: None,
            created_at: DateTime::from_timestamp(1_750_000_000, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn local_create_lands_in_the_card_status_column() {
        let mut state = BoardState::new();
        state.apply(&BoardEvent::LocalCreate(card(
            "n1",
            Column::AwaitingShipment,
        )));
        assert_eq!(state.column(Column::AwaitingShipment).len(), 1);
        assert_eq!(state.card_count(), 1);
    }

    #[test]
    fn local_delete_removes_the_card() {
        let mut state = BoardState::new();
        state.apply(&BoardEvent::LocalCreate(card("n1", Column::AtPrinter)));
        state.apply(&BoardEvent::LocalDelete {
            card_id: "n1".to_string(),
        });
        assert_eq!(state.card_count(), 0);
    }

    #[test]
    fn events_for_unknown_ids_are_noops() {
        let mut state = BoardState::new();
        state.apply(&BoardEvent::LocalMove {
            card_id: "ghost".to_string(),
            to: Column::Completed,
            to_index: 0,
        });
        state.apply(&BoardEvent::FeedDelete {
            id: "ghost".to_string(),
        });
        assert_eq!(state, BoardState::new());
    }
}
