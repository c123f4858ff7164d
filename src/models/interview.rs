// src/models/interview.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// A scheduled interview for a job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: u64,
    pub company: String,
    pub position: String,
    pub kind: InterviewKind,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub location: Option<String>,
    pub meeting_url: Option<String>,

    /// Rich-text notes. Always stored sanitized.
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewKind {
    Phone,
    Video,
    Onsite,
    Technical,
    Behavioral,
}

/// DTO for scheduling (and rescheduling) an interview.
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleInterviewRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Company length must be between 1 and 100 chars"
    ))]
    pub company: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Position length must be between 1 and 100 chars"
    ))]
    pub position: String,

    pub kind: InterviewKind,

    #[validate(custom(function = validate_in_future))]
    pub scheduled_at: DateTime<Utc>,

    #[serde(default = "default_duration")]
    #[validate(range(
        min = 15,
        max = 480,
        message = "Duration must be between 15 and 480 minutes"
    ))]
    pub duration_minutes: u32,

    #[serde(default)]
    #[validate(length(max = 200, message = "Location must be at most 200 chars"))]
    pub location: Option<String>,

    #[serde(default)]
    pub meeting_url: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Notes must be at most 10000 chars"))]
    pub notes: String,
}

impl ScheduleInterviewRequest {
    /// Meeting link rules, which depend on the interview kind.
    pub fn check_links(&self) -> Result<(), validator::ValidationError> {
        match self.meeting_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => validate_meeting_url(url),
            _ if self.kind == InterviewKind::Video => {
                Err(validator::ValidationError::new("meeting_url_required"))
            }
            _ => Ok(()),
        }
    }
}

fn default_duration() -> u32 {
    60
}

/// Interviews can only be scheduled ahead of time.
fn validate_in_future(at: &DateTime<Utc>) -> Result<(), validator::ValidationError> {
    if *at <= Utc::now() {
        return Err(validator::ValidationError::new("scheduled_in_past"));
    }
    Ok(())
}

/// Meeting links must be absolute http(s) URLs.
fn validate_meeting_url(url: &str) -> Result<(), validator::ValidationError> {
    if url.len() > 500 {
        return Err(validator::ValidationError::new("url_too_long"));
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_url")),
    }
}

/// Query parameters for listing interviews.
#[derive(Debug, Default, Deserialize)]
pub struct InterviewListParams {
    /// Only return interviews that have not started yet.
    #[serde(default)]
    pub upcoming: bool,
}
