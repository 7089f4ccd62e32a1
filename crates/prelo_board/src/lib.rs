/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Prelo Board
//!
//! The print-logistics kanban core: an in-memory board of four fixed
//! stages holding book print/delivery jobs, kept in sync with the durable
//! logistics table through a change feed and mutated locally by
//! drag-and-drop moves.
//!
//! All mutation flows through one dispatch point,
//! [`BoardState::apply`], over the [`BoardEvent`] union: user gestures
//! and feed notifications are both reduced through it in arrival order,
//! which keeps the transition function testable independently of where
//! events come from. Network effects are ports ([`CardWriter`],
//! [`ChangeFeed`]): attempt-once, no retry, no queueing.

pub mod card;
pub mod drag;
pub mod error;
pub mod event;
pub mod persist;
pub mod reconcile;
pub mod state;

pub use card::{BookCard, CardRow, Column};
pub use drag::{DragGesture, DragReorderController, MoveToken, StatusPatch};
pub use error::BoardError;
pub use event::BoardEvent;
pub use persist::{CardWriter, RecordingWriter, WriteError, WriteOp};
pub use reconcile::{ChangeEvent, ChangeFeed, InMemoryFeed, Reconciler};
pub use state::BoardState;
