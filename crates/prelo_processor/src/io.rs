/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

//! Loading reference batches from disk.
//!
//! A batch is either a map of id → reference (preserving file order) or a
//! plain list; YAML and JSON are told apart by file extension.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use prelo_core::reference::Reference;

use crate::error::FormatError;

/// Load a batch of references keyed by id. List entries without an id are
/// keyed `ref-1`, `ref-2`, ... in file order.
pub fn load_references(path: &Path) -> Result<IndexMap<String, Reference>, FormatError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| FormatError::Parse("JSON".to_string(), e.to_string()))?;

            if let Ok(map) = serde_json::from_slice::<IndexMap<String, Reference>>(&bytes) {
                return Ok(keyed(map));
            }
            match serde_json::from_slice::<Vec<Reference>>(&bytes) {
                Ok(list) => Ok(listed(list)),
                Err(e) => Err(FormatError::Parse("JSON".to_string(), e.to_string())),
            }
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| FormatError::Parse("YAML".to_string(), e.to_string()))?;

            if let Ok(map) = serde_yaml::from_str::<IndexMap<String, Reference>>(&content) {
                return Ok(keyed(map));
            }
            match serde_yaml::from_str::<Vec<Reference>>(&content) {
                Ok(list) => Ok(listed(list)),
                Err(e) => Err(FormatError::Parse("YAML".to_string(), e.to_string())),
            }
        }
    }
}

fn keyed(map: IndexMap<String, Reference>) -> IndexMap<String, Reference> {
    map.into_iter()
        .map(|(key, mut reference)| {
            if reference.id.is_none() {
                reference.id = Some(key.clone());
            }
            (key, reference)
        })
        .collect()
}

fn listed(list: Vec<Reference>) -> IndexMap<String, Reference> {
    list.into_iter()
        .enumerate()
        .map(|(i, mut reference)| {
            let key = reference
                .id
                .clone()
                .unwrap_or_else(|| format!("ref-{}", i + 1));
            reference.id = Some(key.clone());
            (key, reference)
        })
        .collect()
}
