//! Attorney directory: search/filter/sort, bookings, and messages

use std::cmp::Ordering;
use std::sync::Arc;

use shared_types::{Appointment, Attorney, AttorneyMessage};
use uuid::Uuid;

use crate::changes::ChangeNotifier;
use crate::error::StoreError;
use crate::task::Clock;

/// Specialty filter; `All` passes every attorney.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialtyFilter {
    All,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    RatingDesc,
    ReviewsDesc,
    RateAsc,
    RateDesc,
    ExperienceDesc,
}

/// Booking intent from the UI; the attorney name travels with the request
/// because the page already holds the directory entry.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub attorney_id: String,
    pub attorney_name: String,
    pub date: String,
    pub time: String,
    pub consult_type: String,
    pub description: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct MessageRequest {
    pub attorney_id: String,
    pub subject: String,
    pub body: String,
}

pub struct AttorneyStore {
    directory: Vec<Attorney>,
    appointments: Vec<Appointment>,
    messages: Vec<AttorneyMessage>,
    search_query: String,
    specialty: SpecialtyFilter,
    sort_by: SortBy,
    clock: Arc<dyn Clock>,
    pub changes: ChangeNotifier,
}

impl AttorneyStore {
    pub fn new(directory: Vec<Attorney>, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            appointments: Vec::new(),
            messages: Vec::new(),
            search_query: String::new(),
            specialty: SpecialtyFilter::All,
            sort_by: SortBy::default(),
            clock,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn directory(&self) -> &[Attorney] {
        &self.directory
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn messages(&self) -> &[AttorneyMessage] {
        &self.messages
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.changes.emit();
    }

    pub fn set_specialty(&mut self, specialty: SpecialtyFilter) {
        self.specialty = specialty;
        self.changes.emit();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.changes.emit();
    }

    /// Apply the current query, specialty filter, and sort order. The sort
    /// is stable, so ties keep directory order.
    pub fn search(&self) -> Vec<&Attorney> {
        let query = self.search_query.to_lowercase();
        let mut results: Vec<&Attorney> = self
            .directory
            .iter()
            .filter(|a| {
                if query.is_empty() {
                    return true;
                }
                a.name.to_lowercase().contains(&query)
                    || a.location.to_lowercase().contains(&query)
                    || a.specialties
                        .iter()
                        .any(|s| s.to_lowercase().contains(&query))
            })
            .filter(|a| match &self.specialty {
                SpecialtyFilter::All => true,
                SpecialtyFilter::Named(name) => a
                    .specialties
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(name)),
            })
            .collect();

        match self.sort_by {
            SortBy::RatingDesc => results.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortBy::ReviewsDesc => results.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
            SortBy::RateAsc => results.sort_by(|a, b| a.hourly_rate.cmp(&b.hourly_rate)),
            SortBy::RateDesc => results.sort_by(|a, b| b.hourly_rate.cmp(&a.hourly_rate)),
            SortBy::ExperienceDesc => {
                results.sort_by(|a, b| b.experience_years.cmp(&a.experience_years))
            }
        }
        results
    }

    /// Record a booking. Date and time are required; everything else is
    /// preserved verbatim. Returns the generated appointment id.
    pub fn book_appointment(&mut self, req: AppointmentRequest) -> Result<String, StoreError> {
        if req.date.trim().is_empty() {
            return Err(StoreError::EmptyContent("booking date"));
        }
        if req.time.trim().is_empty() {
            return Err(StoreError::EmptyContent("booking time"));
        }
        let id = Uuid::new_v4().to_string();
        self.appointments.push(Appointment {
            id: id.clone(),
            attorney_id: req.attorney_id,
            attorney_name: req.attorney_name,
            date: req.date,
            time: req.time,
            consult_type: req.consult_type,
            description: req.description,
            user_id: req.user_id,
        });
        tracing::info!(appointment_id = %id, "appointment booked");
        self.changes.emit();
        Ok(id)
    }

    /// Record a message; fire-and-forget, no delivery state.
    pub fn send_message(&mut self, req: MessageRequest) -> Result<(), StoreError> {
        if req.body.trim().is_empty() {
            return Err(StoreError::EmptyContent("message body"));
        }
        self.messages.push(AttorneyMessage {
            id: Uuid::new_v4().to_string(),
            attorney_id: req.attorney_id,
            subject: req.subject,
            body: req.body,
            sent_at: self.clock.now(),
        });
        self.changes.emit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::task::SystemClock;
    use pretty_assertions::assert_eq;

    fn store() -> AttorneyStore {
        AttorneyStore::new(seed::seed_attorneys(), Arc::new(SystemClock))
    }

    #[test]
    fn default_search_returns_whole_directory() {
        let store = store();
        assert_eq!(store.search().len(), store.directory().len());
    }

    #[test]
    fn default_sort_is_rating_desc() {
        let store = store();
        let results = store.search();
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn query_matches_name_specialty_and_location() {
        let mut store = store();

        store.set_search_query("family");
        assert!(store
            .search()
            .iter()
            .all(|a| a.specialties.iter().any(|s| s.to_lowercase().contains("family"))
                || a.name.to_lowercase().contains("family")
                || a.location.to_lowercase().contains("family")));

        store.set_search_query("NEW YORK");
        assert!(!store.search().is_empty());
        assert!(store
            .search()
            .iter()
            .all(|a| a.location.to_lowercase().contains("new york")));
    }

    #[test]
    fn specialty_filter_narrows_results() {
        let mut store = store();
        store.set_specialty(SpecialtyFilter::Named("Asylum".to_string()));
        let results = store.search();
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|a| a.specialties.iter().any(|s| s.eq_ignore_ascii_case("Asylum"))));
    }

    #[test]
    fn rate_sorts_both_directions() {
        let mut store = store();

        store.set_sort_by(SortBy::RateAsc);
        let ascending = store.search();
        for pair in ascending.windows(2) {
            assert!(pair[0].hourly_rate <= pair[1].hourly_rate);
        }

        store.set_sort_by(SortBy::RateDesc);
        let descending = store.search();
        for pair in descending.windows(2) {
            assert!(pair[0].hourly_rate >= pair[1].hourly_rate);
        }
    }

    #[test]
    fn booking_appends_and_preserves_fields() {
        let mut store = store();
        let before = store.appointments().len();

        let id = store
            .book_appointment(AppointmentRequest {
                attorney_id: "A1".to_string(),
                attorney_name: "Sarah Chen".to_string(),
                date: "2025-03-01".to_string(),
                time: "10:00 AM".to_string(),
                consult_type: "video".to_string(),
                description: "Initial consultation".to_string(),
                user_id: "user-1".to_string(),
            })
            .unwrap();

        assert_eq!(store.appointments().len(), before + 1);
        let appointment = store.appointments().last().unwrap();
        assert_eq!(appointment.id, id);
        assert_eq!(appointment.attorney_id, "A1");
        assert_eq!(appointment.date, "2025-03-01");
        assert_eq!(appointment.time, "10:00 AM");
        assert_eq!(appointment.consult_type, "video");
    }

    #[test]
    fn booking_requires_date_and_time() {
        let mut store = store();
        let request = AppointmentRequest {
            attorney_id: "A1".to_string(),
            attorney_name: "Sarah Chen".to_string(),
            date: String::new(),
            time: "10:00 AM".to_string(),
            consult_type: "video".to_string(),
            description: String::new(),
            user_id: "user-1".to_string(),
        };

        assert_eq!(
            store.book_appointment(request.clone()),
            Err(StoreError::EmptyContent("booking date"))
        );

        let request = AppointmentRequest {
            date: "2025-03-01".to_string(),
            time: "  ".to_string(),
            ..request
        };
        assert_eq!(
            store.book_appointment(request),
            Err(StoreError::EmptyContent("booking time"))
        );
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn empty_message_body_is_rejected() {
        let mut store = store();
        let result = store.send_message(MessageRequest {
            attorney_id: "A1".to_string(),
            subject: "Question".to_string(),
            body: "  ".to_string(),
        });
        assert_eq!(result, Err(StoreError::EmptyContent("message body")));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn sent_message_is_recorded() {
        let mut store = store();
        store
            .send_message(MessageRequest {
                attorney_id: "A1".to_string(),
                subject: "RFE question".to_string(),
                body: "Can we discuss my RFE response?".to_string(),
            })
            .unwrap();
        assert_eq!(store.messages().len(), 1);
    }
}
