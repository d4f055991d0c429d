//! Uploaded-document records with category and verification metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Identity,
    Relationship,
    Employment,
    Financial,
    Medical,
    Travel,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 6] = [
        DocumentCategory::Identity,
        DocumentCategory::Relationship,
        DocumentCategory::Employment,
        DocumentCategory::Financial,
        DocumentCategory::Medical,
        DocumentCategory::Travel,
    ];
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentCategory::Identity => write!(f, "identity"),
            DocumentCategory::Relationship => write!(f, "relationship"),
            DocumentCategory::Employment => write!(f, "employment"),
            DocumentCategory::Financial => write!(f, "financial"),
            DocumentCategory::Medical => write!(f, "medical"),
            DocumentCategory::Travel => write!(f, "travel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Uploading,
    Pending,
    Verified,
    Rejected,
}

/// Synthetic OCR metadata attached to a verified document
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractedData {
    pub pages: u32,
    pub text_extracted: bool,
    /// Extraction confidence, 0-100
    pub confidence: u8,
}

/// An uploaded file record
///
/// Invariant: `status == Verified` implies `extracted_data` is present.
/// `rejection_reason` is set only for `Rejected` documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
    pub extracted_data: Option<ExtractedData>,
    pub rejection_reason: Option<String>,
}
