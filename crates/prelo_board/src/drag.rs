/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Drag-and-drop moves with optimistic persistence.
//!
//! A same-column move only reorders the display and persists nothing.
//! A cross-column move updates the board immediately and hands the
//! caller a [`StatusPatch`]: the one attempt-once write that must reach
//! the logistics table. The caller reports the outcome back:
//! [`DragReorderController::confirm`] on success,
//! [`DragReorderController::fail`] on failure, which applies a
//! compensating revert so the board never stays silently out of step
//! with the table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::Column;
use crate::error::BoardError;
use crate::event::BoardEvent;
use crate::state::BoardState;

/// A completed drag gesture: where the card was picked up and where it
/// was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    pub card_id: String,
    pub from: Column,
    pub from_index: usize,
    pub to: Column,
    pub to_index: usize,
}

/// Correlation token for one in-flight cross-column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken(u64);

/// The status write a cross-column move owes the logistics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPatch {
    pub token: MoveToken,
    pub card_id: String,
    pub status: Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PriorPosition {
    card_id: String,
    column: Column,
    index: usize,
}

/// Applies drag gestures optimistically and tracks their pending writes.
#[derive(Debug, Default)]
pub struct DragReorderController {
    next_token: u64,
    pending: HashMap<MoveToken, PriorPosition>,
}

impl DragReorderController {
    pub fn new() -> Self {
        DragReorderController::default()
    }

    /// Apply a drag to the board. Returns the status patch to persist
    /// for a cross-column move, or None for an intra-column reorder
    /// (position is not durable state).
    ///
    /// The gesture's source position must still match the board;
    /// a stale gesture (the card moved underneath it) is rejected
    /// without mutating anything.
    pub fn apply_drag(
        &mut self,
        state: &mut BoardState,
        gesture: &DragGesture,
    ) -> Result<Option<StatusPatch>, BoardError> {
        let at_source = state
            .column(gesture.from)
            .get(gesture.from_index)
            .map(|card| card.id.as_str());
        if at_source != Some(gesture.card_id.as_str()) {
            return Err(BoardError::StaleGesture {
                card_id: gesture.card_id.clone(),
                column: gesture.from,
                index: gesture.from_index,
            });
        }

        state.apply(&BoardEvent::LocalMove {
            card_id: gesture.card_id.clone(),
            to: gesture.to,
            to_index: gesture.to_index,
        });

        if gesture.from == gesture.to {
            return Ok(None);
        }

        let token = MoveToken(self.next_token);
        self.next_token += 1;
        self.pending.insert(
            token,
            PriorPosition {
                card_id: gesture.card_id.clone(),
                column: gesture.from,
                index: gesture.from_index,
            },
        );
        Ok(Some(StatusPatch {
            token,
            card_id: gesture.card_id.clone(),
            status: gesture.to,
        }))
    }

    /// The write behind `token` reached the table; drop its pending
    /// record.
    pub fn confirm(&mut self, token: MoveToken) {
        if self.pending.remove(&token).is_none() {
            tracing::warn!(?token, "confirm for unknown move token");
        }
    }

    /// The write behind `token` failed. Applies the compensating revert,
    /// restoring the card to its prior column and index, and logs the
    /// failure; the caller surfaces a non-blocking notification.
    pub fn fail(&mut self, state: &mut BoardState, token: MoveToken) {
        let Some(prior) = self.pending.remove(&token) else {
            tracing::warn!(?token, "failure report for unknown move token");
            return;
        };
        tracing::error!(
            card_id = %prior.card_id,
            column = %prior.column,
            "status write failed; reverting optimistic move"
        );
        state.apply(&BoardEvent::Revert {
            card_id: prior.card_id,
            to: prior.column,
            to_index: prior.index,
        });
    }

    /// Moves whose writes have not been confirmed or failed yet.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
