//! Thought database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for thoughts table
#[derive(Debug, Clone, FromRow)]
pub struct ThoughtModel {
    pub id: Uuid,
    pub message: String,
    pub hearts: i64,
    pub created_at: DateTime<Utc>,
}
