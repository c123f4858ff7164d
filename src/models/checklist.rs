// src/models/checklist.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::interview::InterviewKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u64,
    pub label: String,
    pub done: bool,
}

/// The preparation checklist attached to one interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub interview_id: u64,
    pub items: Vec<ChecklistItem>,
}

/// Completion summary shown next to the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// 0..=100, rounded to the nearest integer.
    pub percent: u8,
}

/// Response DTO: the checklist together with its progress.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChecklistView {
    pub interview_id: u64,
    pub items: Vec<ChecklistItem>,
    pub progress: Progress,
}

impl From<Checklist> for ChecklistView {
    fn from(checklist: Checklist) -> Self {
        let progress = progress(&checklist.items);
        Self {
            interview_id: checklist.interview_id,
            items: checklist.items,
            progress,
        }
    }
}

/// DTO for adding a checklist item.
#[derive(Debug, Deserialize, Validate)]
pub struct AddItemRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Label length must be between 1 and 200 chars"
    ))]
    pub label: String,
}

/// DTO for ticking / unticking an item.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub done: bool,
}

/// Computes how much of the checklist is done.
/// An empty checklist counts as 0%.
pub fn progress(items: &[ChecklistItem]) -> Progress {
    let total = items.len();
    let completed = items.iter().filter(|item| item.done).count();

    let percent = if total == 0 {
        0
    } else {
        // Integer round-half-up of completed * 100 / total.
        ((completed * 200 + total) / (total * 2)) as u8
    };

    Progress {
        completed,
        total,
        percent,
    }
}

/// Items every new interview starts with.
pub fn default_labels(kind: InterviewKind) -> Vec<&'static str> {
    let mut labels = vec![
        "Research the company",
        "Review the job description",
        "Prepare questions for the interviewer",
    ];
    match kind {
        InterviewKind::Video => labels.push("Test camera and microphone"),
        InterviewKind::Onsite => labels.push("Plan the route"),
        InterviewKind::Technical => labels.push("Practice coding problems"),
        InterviewKind::Behavioral => labels.push("Prepare STAR stories"),
        InterviewKind::Phone => {}
    }
    labels
}
