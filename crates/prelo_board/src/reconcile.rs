/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Realtime reconciliation against the logistics table's change feed.
//!
//! The feed is a port: a long-lived subscription delivering row-level
//! insert/update/delete events strictly in order. The reconciler maps
//! them onto [`BoardEvent`]s and dispatches through the reducer, so
//! feed-driven and local mutations share one transition function.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::card::CardRow;
use crate::event::BoardEvent;
use crate::state::BoardState;

/// A row-level change notification. Insert/Update carry the full row
/// snapshot; Delete carries only the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "registro", rename_all = "kebab-case")]
pub enum ChangeEvent {
    Insert(CardRow),
    Update(CardRow),
    Delete { id: String },
}

/// A subscription to the logistics table's change feed. Implementations
/// must deliver events in the order the feed produced them and stop
/// delivering after [`ChangeFeed::unsubscribe`].
pub trait ChangeFeed {
    /// The next pending event, or None when nothing is queued (or the
    /// subscription was torn down).
    fn next_event(&mut self) -> Option<ChangeEvent>;

    /// Tear the subscription down. Idempotent.
    fn unsubscribe(&mut self);
}

/// In-memory feed used by tests and the CLI's event-log replay.
#[derive(Debug)]
pub struct InMemoryFeed {
    queue: VecDeque<ChangeEvent>,
    subscribed: bool,
}

impl InMemoryFeed {
    pub fn new() -> Self {
        InMemoryFeed {
            queue: VecDeque::new(),
            subscribed: true,
        }
    }

    pub fn push(&mut self, event: ChangeEvent) {
        self.queue.push_back(event);
    }
}

impl Default for InMemoryFeed {
    fn default() -> Self {
        InMemoryFeed::new()
    }
}

impl ChangeFeed for InMemoryFeed {
    fn next_event(&mut self) -> Option<ChangeEvent> {
        if !self.subscribed {
            return None;
        }
        self.queue.pop_front()
    }

    fn unsubscribe(&mut self) {
        if self.subscribed {
            self.subscribed = false;
            tracing::debug!("change feed unsubscribed");
        }
    }
}

/// Merges change-feed events into the board state.
#[derive(Debug, Default)]
pub struct Reconciler;

impl Reconciler {
    pub fn new() -> Self {
        Reconciler
    }

    /// Apply one change event. Events for unknown ids are no-ops;
    /// inserts for ids already present (our own optimistic echo) are
    /// skipped inside the reducer.
    pub fn apply(&self, state: &mut BoardState, change: ChangeEvent) {
        let event = match change {
            ChangeEvent::Insert(row) => BoardEvent::FeedInsert(row),
            ChangeEvent::Update(row) => BoardEvent::FeedUpdate(row),
            ChangeEvent::Delete { id } => BoardEvent::FeedDelete { id },
        };
        state.apply(&event);
    }

    /// Drain every pending event from the feed, in delivery order.
    /// Returns how many events were applied.
    pub fn drain(&self, state: &mut BoardState, feed: &mut dyn ChangeFeed) -> usize {
        let mut applied = 0;
        while let Some(change) = feed.next_event() {
            self.apply(state, change);
            applied += 1;
        }
        applied
    }
}
