//! Immigration case records and their milestone/timeline structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Adjudication status of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pending,
    Interview,
    Rfe,
    Approved,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Pending => write!(f, "pending"),
            CaseStatus::Interview => write!(f, "interview"),
            CaseStatus::Rfe => write!(f, "rfe"),
            CaseStatus::Approved => write!(f, "approved"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePriority {
    Normal,
    High,
}

/// A discrete step in a case's lifecycle (biometrics, interview, decision...)
///
/// Within a case, at most one milestone is `active`; completed milestones
/// precede the active one and the list is ordered chronologically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub active: bool,
}

/// Free-form note attached to a case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseNote {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in a case's activity timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// A tracked immigration application/petition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub case_number: String,
    pub case_type: String,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub submitted_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub estimated_completion: DateTime<Utc>,
    pub milestones: Vec<Milestone>,
    pub notes: Vec<CaseNote>,
    pub timeline: Vec<TimelineEvent>,
}

impl Case {
    /// The currently active milestone, if any
    pub fn active_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&CaseStatus::Rfe).unwrap(), "\"rfe\"");
        assert_eq!(
            serde_json::to_string(&CaseStatus::Interview).unwrap(),
            "\"interview\""
        );
    }

    #[test]
    fn status_display_matches_wire_form() {
        for status in [
            CaseStatus::Pending,
            CaseStatus::Interview,
            CaseStatus::Rfe,
            CaseStatus::Approved,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire.trim_matches('"'), status.to_string());
        }
    }

    #[test]
    fn timeline_event_uses_type_field_on_wire() {
        let event = TimelineEvent {
            id: "ev-1".to_string(),
            event_type: "status_change".to_string(),
            description: "Case moved to interview".to_string(),
            date: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "status_change");
    }
}
