//! Ordered attachment list for an application
//!
//! Records are addressed by position: removing one re-indexes everything after
//! it. Each record also carries a generated id for callers that need a key
//! that survives removals.

use crate::error::AttachmentError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of content an attachment points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Document,
    Image,
}

impl AttachmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "doc",
            Self::Image => "img",
        }
    }
}

/// A picked document or photo. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    id: Uuid,
    name: String,
    source_locator: String,
    kind: AttachmentKind,
}

impl AttachmentRecord {
    fn new(kind: AttachmentKind, name: String, source_locator: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            source_locator,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque URI or path owned by the picker that produced it
    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }
}

/// Append-only list with positional removal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentStore {
    items: Vec<AttachmentRecord>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicates are allowed.
    pub fn add(
        &mut self,
        kind: AttachmentKind,
        name: impl Into<String>,
        source_locator: impl Into<String>,
    ) -> Uuid {
        let record = AttachmentRecord::new(kind, name.into(), source_locator.into());
        let id = record.id;
        tracing::debug!(
            "attachment added: {} ({}) at position {}",
            record.name,
            kind.label(),
            self.items.len()
        );
        self.items.push(record);
        id
    }

    /// Remove the record at `position`, shifting later records down
    pub fn remove_at(&mut self, position: usize) -> Result<AttachmentRecord, AttachmentError> {
        if position >= self.items.len() {
            return Err(AttachmentError::OutOfRange {
                position,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(position))
    }

    /// Current records in insertion order
    pub fn list(&self) -> &[AttachmentRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(super) fn clear(&mut self) {
        self.items.clear();
    }
}
