/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! The persistence port: the abstract face of the logistics table.
//!
//! Every write is attempt-once: no retry, no queueing. Failures are the
//! caller's to report back to the drag controller or to surface as a
//! notification.

use thiserror::Error;

use crate::card::{CardRow, Column};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("falha de conexão: {0}")]
    Connection(String),

    #[error("gravação rejeitada: {0}")]
    Rejected(String),
}

/// Writes targeting the logistics table, keyed by row identifier.
pub trait CardWriter {
    /// Patch a single row's status field.
    fn update_status(&mut self, id: &str, status: Column) -> Result<(), WriteError>;

    /// Insert a new row.
    fn insert(&mut self, row: &CardRow) -> Result<(), WriteError>;

    /// Delete a row by identifier.
    fn delete(&mut self, id: &str) -> Result<(), WriteError>;
}

/// A write the [`RecordingWriter`] has seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    StatusUpdate { id: String, status: Column },
    Insert { id: String },
    Delete { id: String },
}

/// In-memory writer that records every call; `fail_next` makes the next
/// write fail once, for exercising the revert path.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub writes: Vec<WriteOp>,
    pub fail_next: bool,
}

impl RecordingWriter {
    pub fn new() -> Self {
        RecordingWriter::default()
    }

    fn check_failure(&mut self) -> Result<(), WriteError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(WriteError::Connection("simulated outage".to_string()));
        }
        Ok(())
    }
}

impl CardWriter for RecordingWriter {
    fn update_status(&mut self, id: &str, status: Column) -> Result<(), WriteError> {
        self.check_failure()?;
        self.writes.push(WriteOp::StatusUpdate {
            id: id.to_string(),
            status,
        });
        Ok(())
    }

    fn insert(&mut self, row: &CardRow) -> Result<(), WriteError> {
        self.check_failure()?;
        self.writes.push(WriteOp::Insert {
            id: row.id.clone(),
        });
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), WriteError> {
        self.check_failure()?;
        self.writes.push(WriteOp::Delete { id: id.to_string() });
        Ok(())
    }
}
