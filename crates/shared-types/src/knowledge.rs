//! Knowledge-base articles with engagement counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
    pub views: u64,
    pub helpful: u32,
    pub not_helpful: u32,
    pub last_updated: DateTime<Utc>,
}
