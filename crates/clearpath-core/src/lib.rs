//! Client-state layer for the ClearPath case-management UI
//!
//! Each domain (cases, documents, attorneys, knowledge base, notifications,
//! profile, subscription) is an independent single-writer store. Pages read
//! snapshots, dispatch mutations through named store actions, and re-render
//! via the per-store [`changes::ChangeNotifier`]. There is no server and no
//! persistence; everything is reinitialized from [`seed`] data on load.

pub mod attorney;
pub mod case;
pub mod category;
pub mod changes;
pub mod document;
pub mod error;
pub mod knowledge;
pub mod notify;
pub mod profile;
pub mod seed;
pub mod task;

use std::sync::Arc;

pub use attorney::{AppointmentRequest, AttorneyStore, MessageRequest, SortBy, SpecialtyFilter};
pub use case::{CaseStore, Deadline};
pub use category::infer_category;
pub use changes::{ChangeNotifier, SubscriptionId};
pub use document::{DocumentStore, NewDocument, StorageUsage};
pub use error::StoreError;
pub use knowledge::KnowledgeStore;
pub use notify::NotificationCenter;
pub use profile::{Feature, ProfileStore, SubscriptionStore};
pub use task::{Clock, SimulatedTask, SystemClock, TaskOutcome, TaskPoll, TestClock};

/// Composition root owning every store. Constructed once at startup and
/// passed by reference to views; tests build their own with an injected
/// clock instead of reaching for globals.
pub struct AppStores {
    pub cases: CaseStore,
    pub documents: DocumentStore,
    pub attorneys: AttorneyStore,
    pub knowledge: KnowledgeStore,
    pub notifications: NotificationCenter,
    pub profile: ProfileStore,
    pub subscription: SubscriptionStore,
}

impl AppStores {
    /// Stores initialized from the seed/mock collections, as on app load.
    pub fn with_seed_data(clock: Arc<dyn Clock>) -> Self {
        Self {
            cases: CaseStore::new(seed::seed_cases(), Arc::clone(&clock)),
            documents: DocumentStore::new(Arc::clone(&clock)),
            attorneys: AttorneyStore::new(seed::seed_attorneys(), Arc::clone(&clock)),
            knowledge: KnowledgeStore::new(seed::seed_articles()),
            notifications: NotificationCenter::new(),
            profile: ProfileStore::new(seed::seed_profile()),
            subscription: SubscriptionStore::new(seed::seed_plan()),
        }
    }

    /// Empty stores for tests that want full control over contents.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            cases: CaseStore::new(Vec::new(), Arc::clone(&clock)),
            documents: DocumentStore::new(Arc::clone(&clock)),
            attorneys: AttorneyStore::new(Vec::new(), Arc::clone(&clock)),
            knowledge: KnowledgeStore::new(Vec::new()),
            notifications: NotificationCenter::new(),
            profile: ProfileStore::new(seed::seed_profile()),
            subscription: SubscriptionStore::new(seed::seed_plan()),
        }
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::with_seed_data(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shared_types::{DocumentCategory, ExtractedData, NotificationKind};

    fn stores() -> (AppStores, Arc<TestClock>) {
        let clock = Arc::new(TestClock::new(
            Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap(),
        ));
        (AppStores::with_seed_data(clock.clone()), clock)
    }

    #[test]
    fn seeded_container_is_populated() {
        let (stores, _) = stores();
        assert!(!stores.cases.cases().is_empty());
        assert!(!stores.attorneys.directory().is_empty());
        assert!(!stores.knowledge.articles().is_empty());
        assert!(stores.documents.documents().is_empty());
        assert!(stores.notifications.notifications().is_empty());
    }

    /// The full upload flow: simulated task progresses, finalizes into the
    /// document store, and verification unlocks the category checklist.
    #[test]
    fn upload_flow_end_to_end() {
        let (mut stores, clock) = stores();

        let filename = "passport_john.pdf";
        let category = infer_category(filename).unwrap_or(DocumentCategory::Identity);
        assert_eq!(category, DocumentCategory::Identity);

        let mut upload =
            SimulatedTask::start(clock.as_ref(), Duration::seconds(3), TaskOutcome::Complete);
        clock.advance(Duration::seconds(1));
        assert!(matches!(
            upload.poll(clock.as_ref()),
            TaskPoll::Progress(_)
        ));

        clock.advance(Duration::seconds(2));
        assert_eq!(upload.poll(clock.as_ref()), TaskPoll::Done(TaskOutcome::Complete));

        let id = stores.documents.add_document(NewDocument {
            name: filename.to_string(),
            size: 1_500_000,
            content_type: "application/pdf".to_string(),
            category,
        });
        assert!(!stores.documents.has_category(DocumentCategory::Identity));

        stores.documents.mark_verified(
            &id,
            ExtractedData {
                pages: 2,
                text_extracted: true,
                confidence: 96,
            },
        );
        assert!(stores.documents.has_category(DocumentCategory::Identity));
    }

    /// Failed simulated processing surfaces through rejection plus a toast.
    #[test]
    fn failed_upload_rejects_and_notifies() {
        let (mut stores, clock) = stores();

        let mut upload = SimulatedTask::start(
            clock.as_ref(),
            Duration::seconds(2),
            TaskOutcome::Fail("virus scan failed".to_string()),
        );
        let id = stores.documents.add_document(NewDocument {
            name: "bank_statement.pdf".to_string(),
            size: 200_000,
            content_type: "application/pdf".to_string(),
            category: DocumentCategory::Financial,
        });

        clock.advance(Duration::seconds(2));
        if let TaskPoll::Done(TaskOutcome::Fail(reason)) = upload.poll(clock.as_ref()) {
            stores.documents.reject_document(&id, &reason);
            stores
                .notifications
                .push(NotificationKind::Error, None, &reason);
        } else {
            panic!("upload should have failed");
        }

        assert_eq!(
            stores.documents.document(&id).unwrap().rejection_reason.as_deref(),
            Some("virus scan failed")
        );
        assert_eq!(stores.notifications.notifications().len(), 1);
    }

    /// Validation errors route to the notification center and leave the
    /// target store untouched.
    #[test]
    fn validation_error_surfaces_as_notification() {
        let (mut stores, _) = stores();
        let case_id = stores.cases.cases()[0].id.clone();
        let notes_before = stores.cases.case(&case_id).unwrap().notes.len();

        if let Err(err) = stores.cases.add_note(&case_id, "   ") {
            stores
                .notifications
                .push(NotificationKind::Error, None, &err.to_string());
        }

        assert_eq!(stores.cases.case(&case_id).unwrap().notes.len(), notes_before);
        assert_eq!(stores.notifications.notifications().len(), 1);
        assert!(stores.notifications.notifications()[0]
            .message
            .contains("must not be empty"));
    }
}
