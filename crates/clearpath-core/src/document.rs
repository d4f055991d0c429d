//! Document store: upload records, verification transitions, storage quota

use std::sync::Arc;

use shared_types::{Document, DocumentCategory, DocumentStatus, ExtractedData};
use uuid::Uuid;

use crate::changes::ChangeNotifier;
use crate::task::Clock;

/// Fixed per-account storage quota.
pub const DEFAULT_CAPACITY_BYTES: u64 = 100 * 1024 * 1024;

/// A document handed to the store on upload completion; id and timestamp
/// are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub category: DocumentCategory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageUsage {
    pub used_bytes: u64,
    pub capacity_bytes: u64,
    /// Always within [0, 100], clamped at capacity
    pub percentage: f64,
}

pub struct DocumentStore {
    documents: Vec<Document>,
    capacity_bytes: u64,
    clock: Arc<dyn Clock>,
    pub changes: ChangeNotifier,
}

impl DocumentStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_BYTES, clock)
    }

    pub fn with_capacity(capacity_bytes: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            documents: Vec::new(),
            capacity_bytes,
            clock,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Insert a completed upload as `Pending` verification. Returns the
    /// generated id.
    pub fn add_document(&mut self, new: NewDocument) -> String {
        let id = Uuid::new_v4().to_string();
        self.documents.push(Document {
            id: id.clone(),
            name: new.name,
            size: new.size,
            content_type: new.content_type,
            category: new.category,
            status: DocumentStatus::Pending,
            uploaded_at: self.clock.now(),
            extracted_data: None,
            rejection_reason: None,
        });
        tracing::info!(document_id = %id, "document added");
        self.changes.emit();
        id
    }

    /// Remove by id; no-op if absent.
    pub fn remove_document(&mut self, id: &str) {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() < before {
            self.changes.emit();
        } else {
            tracing::warn!(document_id = id, "remove_document on unknown id");
        }
    }

    /// Transition to `Verified`, attaching extraction metadata in the same
    /// step so a verified document always carries it. Silent no-op on
    /// unknown id.
    pub fn mark_verified(&mut self, id: &str, data: ExtractedData) {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            tracing::warn!(document_id = id, "mark_verified on unknown id");
            return;
        };
        doc.status = DocumentStatus::Verified;
        doc.extracted_data = Some(data);
        doc.rejection_reason = None;
        self.changes.emit();
    }

    /// The failure branch of simulated processing: transition to `Rejected`
    /// with a user-visible reason. Silent no-op on unknown id.
    pub fn reject_document(&mut self, id: &str, reason: &str) {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            tracing::warn!(document_id = id, "reject_document on unknown id");
            return;
        };
        doc.status = DocumentStatus::Rejected;
        doc.rejection_reason = Some(reason.to_string());
        tracing::info!(document_id = id, reason, "document rejected");
        self.changes.emit();
    }

    /// Aggregate storage usage against the fixed quota. The displayed
    /// percentage is clamped to [0, 100] even if uploads exceed capacity.
    pub fn storage_usage(&self) -> StorageUsage {
        let used_bytes: u64 = self.documents.iter().map(|d| d.size).sum();
        let percentage = if self.capacity_bytes == 0 {
            100.0
        } else {
            (used_bytes as f64 / self.capacity_bytes as f64 * 100.0).clamp(0.0, 100.0)
        };
        StorageUsage {
            used_bytes,
            capacity_bytes: self.capacity_bytes,
            percentage,
        }
    }

    /// True iff some document of the category has been verified.
    pub fn has_category(&self, category: DocumentCategory) -> bool {
        self.documents
            .iter()
            .any(|d| d.category == category && d.status == DocumentStatus::Verified)
    }
}
