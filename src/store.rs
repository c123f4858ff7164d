// src/store.rs

//! In-memory backing store for interviews and their checklists.
//!
//! Stands in for the REST backend the frontend was built against; nothing
//! is persisted across restarts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        checklist::{Checklist, ChecklistItem, default_labels},
        interview::{Interview, ScheduleInterviewRequest},
    },
    sanitizer,
};

#[derive(Debug, Default)]
pub struct Store {
    interviews: RwLock<HashMap<u64, Interview>>,
    checklists: RwLock<HashMap<u64, Checklist>>,
    next_interview_id: AtomicU64,
    next_item_id: AtomicU64,
}

impl Store {
    fn interview_id(&self) -> u64 {
        self.next_interview_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn item_id(&self) -> u64 {
        self.next_item_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// All interviews ordered by start time (earliest first).
    pub async fn list_interviews(&self, upcoming_only: bool) -> Vec<Interview> {
        let now = Utc::now();
        let mut interviews: Vec<Interview> = self
            .interviews
            .read()
            .await
            .values()
            .filter(|i| !upcoming_only || i.scheduled_at > now)
            .cloned()
            .collect();
        interviews.sort_by_key(|i| (i.scheduled_at, i.id));
        interviews
    }

    pub async fn get_interview(&self, id: u64) -> Result<Interview, AppError> {
        self.interviews
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| interview_not_found(id))
    }

    /// Stores a new interview and seeds its preparation checklist.
    /// `req` must already be validated; notes are sanitized here.
    pub async fn create_interview(&self, req: ScheduleInterviewRequest) -> Interview {
        let now = Utc::now();
        let id = self.interview_id();
        let interview = Interview {
            id,
            company: req.company.trim().to_string(),
            position: req.position.trim().to_string(),
            kind: req.kind,
            scheduled_at: req.scheduled_at,
            duration_minutes: req.duration_minutes,
            location: non_blank(req.location),
            meeting_url: non_blank(req.meeting_url),
            notes: sanitizer::sanitize(&req.notes),
            created_at: now,
            updated_at: now,
        };

        let items = default_labels(interview.kind)
            .into_iter()
            .map(|label| ChecklistItem {
                id: self.item_id(),
                label: label.to_string(),
                done: false,
            })
            .collect();

        // Lock order: interviews, then checklists.
        let mut interviews = self.interviews.write().await;
        let mut checklists = self.checklists.write().await;
        interviews.insert(id, interview.clone());
        checklists.insert(
            id,
            Checklist {
                interview_id: id,
                items,
            },
        );

        interview
    }

    /// Replaces every editable field. The checklist is left untouched.
    pub async fn update_interview(
        &self,
        id: u64,
        req: ScheduleInterviewRequest,
    ) -> Result<Interview, AppError> {
        let mut interviews = self.interviews.write().await;
        let interview = interviews
            .get_mut(&id)
            .ok_or_else(|| interview_not_found(id))?;

        interview.company = req.company.trim().to_string();
        interview.position = req.position.trim().to_string();
        interview.kind = req.kind;
        interview.scheduled_at = req.scheduled_at;
        interview.duration_minutes = req.duration_minutes;
        interview.location = non_blank(req.location);
        interview.meeting_url = non_blank(req.meeting_url);
        interview.notes = sanitizer::sanitize(&req.notes);
        interview.updated_at = Utc::now();

        Ok(interview.clone())
    }

    /// Deletes the interview along with its checklist.
    pub async fn delete_interview(&self, id: u64) -> Result<(), AppError> {
        let mut interviews = self.interviews.write().await;
        let mut checklists = self.checklists.write().await;
        interviews
            .remove(&id)
            .ok_or_else(|| interview_not_found(id))?;
        checklists.remove(&id);
        Ok(())
    }

    pub async fn get_checklist(&self, interview_id: u64) -> Result<Checklist, AppError> {
        self.checklists
            .read()
            .await
            .get(&interview_id)
            .cloned()
            .ok_or_else(|| interview_not_found(interview_id))
    }

    /// Appends an item. Labels are unique per checklist (case-insensitive).
    pub async fn add_item(&self, interview_id: u64, label: &str) -> Result<Checklist, AppError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AppError::BadRequest("Label must not be blank".to_string()));
        }

        let mut checklists = self.checklists.write().await;
        let checklist = checklists
            .get_mut(&interview_id)
            .ok_or_else(|| interview_not_found(interview_id))?;

        if checklist
            .items
            .iter()
            .any(|item| item.label.to_lowercase() == label.to_lowercase())
        {
            return Err(AppError::Conflict(format!(
                "Checklist already contains '{}'",
                label
            )));
        }

        checklist.items.push(ChecklistItem {
            id: self.item_id(),
            label: label.to_string(),
            done: false,
        });

        Ok(checklist.clone())
    }

    pub async fn set_item_done(
        &self,
        interview_id: u64,
        item_id: u64,
        done: bool,
    ) -> Result<Checklist, AppError> {
        let mut checklists = self.checklists.write().await;
        let checklist = checklists
            .get_mut(&interview_id)
            .ok_or_else(|| interview_not_found(interview_id))?;

        let item = checklist
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| item_not_found(item_id))?;
        item.done = done;

        Ok(checklist.clone())
    }

    pub async fn remove_item(&self, interview_id: u64, item_id: u64) -> Result<Checklist, AppError> {
        let mut checklists = self.checklists.write().await;
        let checklist = checklists
            .get_mut(&interview_id)
            .ok_or_else(|| interview_not_found(interview_id))?;

        let before = checklist.items.len();
        checklist.items.retain(|item| item.id != item_id);
        if checklist.items.len() == before {
            return Err(item_not_found(item_id));
        }

        Ok(checklist.clone())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn interview_not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Interview {} not found", id))
}

fn item_not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Checklist item {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{checklist::progress, interview::InterviewKind};
    use chrono::Duration;

    fn request(kind: InterviewKind, notes: &str) -> ScheduleInterviewRequest {
        ScheduleInterviewRequest {
            company: "  Acme  ".to_string(),
            position: "Engineer".to_string(),
            kind,
            scheduled_at: Utc::now() + Duration::days(1),
            duration_minutes: 60,
            location: Some("   ".to_string()),
            meeting_url: None,
            notes: notes.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sanitizes_notes_and_seeds_checklist() {
        let store = Store::default();
        let interview = store
            .create_interview(request(InterviewKind::Onsite, "<div onclick=x><b>Bring CV</b></div>"))
            .await;

        assert_eq!(interview.id, 1);
        assert_eq!(interview.company, "Acme");
        assert_eq!(interview.location, None);
        assert_eq!(interview.notes, "<b>Bring CV</b>");

        let checklist = store.get_checklist(interview.id).await.unwrap();
        assert_eq!(checklist.items.len(), 4);
        assert_eq!(progress(&checklist.items).percent, 0);
    }

    #[tokio::test]
    async fn test_list_orders_by_start_time() {
        let store = Store::default();
        let mut later = request(InterviewKind::Phone, "");
        later.scheduled_at = Utc::now() + Duration::days(5);
        let later = store.create_interview(later).await;
        let sooner = store.create_interview(request(InterviewKind::Phone, "")).await;

        let ids: Vec<u64> = store.list_interviews(false).await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![sooner.id, later.id]);
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let store = Store::default();
        let interview = store.create_interview(request(InterviewKind::Phone, "")).await;

        let checklist = store.add_item(interview.id, " Print resume ").await.unwrap();
        let added = checklist.items.last().unwrap().clone();
        assert_eq!(added.label, "Print resume");

        let dup = store.add_item(interview.id, "print RESUME").await;
        assert!(matches!(dup, Err(AppError::Conflict(_))));

        let checklist = store.set_item_done(interview.id, added.id, true).await.unwrap();
        assert_eq!(progress(&checklist.items).completed, 1);

        let checklist = store.remove_item(interview.id, added.id).await.unwrap();
        assert_eq!(checklist.items.len(), 3);

        let missing = store.remove_item(interview.id, added.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_drops_checklist() {
        let store = Store::default();
        let interview = store.create_interview(request(InterviewKind::Video, "")).await;
        store.delete_interview(interview.id).await.unwrap();

        assert!(matches!(store.get_interview(interview.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.get_checklist(interview.id).await, Err(AppError::NotFound(_))));
        assert!(store.delete_interview(interview.id).await.is_err());
    }
}
