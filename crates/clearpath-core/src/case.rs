//! Case store: immigration cases with milestones, notes, and a timeline

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use shared_types::{Case, CaseNote, CaseStatus, TimelineEvent};
use uuid::Uuid;

use crate::changes::ChangeNotifier;
use crate::error::StoreError;
use crate::task::Clock;

/// An incomplete milestone falling inside the deadline horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub case_id: String,
    pub case_number: String,
    pub milestone_id: String,
    pub milestone_name: String,
    pub due: DateTime<Utc>,
    pub days_remaining: i64,
}

pub struct CaseStore {
    cases: Vec<Case>,
    clock: Arc<dyn Clock>,
    pub changes: ChangeNotifier,
}

impl CaseStore {
    pub fn new(cases: Vec<Case>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cases,
            clock,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn case(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Set a case's status, refresh `last_updated`, and record the
    /// transition on the timeline. Approval completes every milestone.
    /// Unknown ids are a silent no-op.
    pub fn update_status(&mut self, case_id: &str, status: CaseStatus) {
        let now = self.clock.now();
        let Some(case) = self.cases.iter_mut().find(|c| c.id == case_id) else {
            tracing::warn!(case_id, "update_status on unknown case");
            return;
        };
        let previous = case.status;
        case.status = status;
        case.last_updated = now;
        case.timeline.push(TimelineEvent {
            id: Uuid::new_v4().to_string(),
            event_type: "status_change".to_string(),
            description: format!("Status changed from {} to {}", previous, status),
            date: now,
        });
        if status == CaseStatus::Approved {
            for milestone in &mut case.milestones {
                milestone.completed = true;
                milestone.active = false;
            }
        }
        tracing::info!(case_id, %status, "case status updated");
        self.changes.emit();
    }

    /// Make the given milestone the single active one: everything before it
    /// becomes completed, everything after is reset. Unknown case or
    /// milestone ids are a silent no-op.
    pub fn set_active_milestone(&mut self, case_id: &str, milestone_id: &str) {
        let now = self.clock.now();
        let Some(case) = self.cases.iter_mut().find(|c| c.id == case_id) else {
            tracing::warn!(case_id, "set_active_milestone on unknown case");
            return;
        };
        let Some(target) = case.milestones.iter().position(|m| m.id == milestone_id) else {
            tracing::warn!(case_id, milestone_id, "unknown milestone");
            return;
        };
        for (index, milestone) in case.milestones.iter_mut().enumerate() {
            milestone.completed = index < target;
            milestone.active = index == target;
        }
        case.last_updated = now;
        self.changes.emit();
    }

    /// Append a note. Empty or whitespace-only content is rejected without
    /// mutating anything; an unknown case id is a silent no-op.
    pub fn add_note(&mut self, case_id: &str, content: &str) -> Result<(), StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContent("note content"));
        }
        let now = self.clock.now();
        let Some(case) = self.cases.iter_mut().find(|c| c.id == case_id) else {
            tracing::warn!(case_id, "add_note on unknown case");
            return Ok(());
        };
        case.notes.push(CaseNote {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            created_at: now,
        });
        case.last_updated = now;
        self.changes.emit();
        Ok(())
    }

    /// Incomplete milestones due within `horizon_days` from now, ascending
    /// by due date. Milestones without a date never appear.
    pub fn upcoming_deadlines(&self, horizon_days: i64) -> Vec<Deadline> {
        let now = self.clock.now();
        let horizon = now + Duration::days(horizon_days);
        let mut deadlines: Vec<Deadline> = self
            .cases
            .iter()
            .flat_map(|case| {
                case.milestones
                    .iter()
                    .filter(|m| !m.completed)
                    .filter_map(move |m| {
                        let due = m.date?;
                        if due < now || due > horizon {
                            return None;
                        }
                        Some(Deadline {
                            case_id: case.id.clone(),
                            case_number: case.case_number.clone(),
                            milestone_id: m.id.clone(),
                            milestone_name: m.name.clone(),
                            due,
                            days_remaining: (due - now).num_days(),
                        })
                    })
            })
            .collect();
        deadlines.sort_by_key(|d| d.due);
        deadlines
    }
}
