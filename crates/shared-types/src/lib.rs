pub mod attorney;
pub mod case;
pub mod document;
pub mod knowledge;
pub mod notification;
pub mod profile;

pub use attorney::{Appointment, Attorney, AttorneyMessage};
pub use case::{Case, CaseNote, CasePriority, CaseStatus, Milestone, TimelineEvent};
pub use document::{Document, DocumentCategory, DocumentStatus, ExtractedData};
pub use knowledge::Article;
pub use notification::{Notification, NotificationKind};
pub use profile::{PlanTier, UserProfile};
