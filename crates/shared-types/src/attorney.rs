//! Attorney directory entries and booking records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static directory entry describing a legal-service provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attorney {
    pub id: String,
    pub name: String,
    pub title: String,
    /// Average review rating, 0.0-5.0
    pub rating: f64,
    pub reviews: u32,
    pub specialties: Vec<String>,
    pub location: String,
    pub experience_years: u32,
    pub hourly_rate: u32,
    pub featured: bool,
    pub bio: String,
    pub education: String,
    pub bar_number: String,
    pub cases_won: u32,
    pub response_time: String,
    pub languages: Vec<String>,
    pub video_consult: bool,
}

/// A booked consultation, append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub attorney_id: String,
    pub attorney_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub consult_type: String,
    pub description: String,
    pub user_id: String,
}

/// Fire-and-forget message to an attorney; no delivery state is tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttorneyMessage {
    pub id: String,
    pub attorney_id: String,
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
