//! Core task record types and their wire representation.
//!
//! The on-disk store is a JSON array of task objects. The `status` and
//! `priority` tags are fixed strings inherited from the store format and
//! must round-trip exactly, so both enums carry explicit serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority. Serialized as its fixed wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "высокий")]
    High,
    #[serde(rename = "средний")]
    Medium,
    #[serde(rename = "низкий")]
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "высокий",
            Priority::Medium => "средний",
            Priority::Low => "низкий",
        }
    }
}

/// Completion status. Serialized as its fixed wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "выполнена")]
    Done,
    #[serde(rename = "не выполнена")]
    NotDone,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Done => "выполнена",
            Status::NotDone => "не выполнена",
        }
    }
}

/// A persisted task record. Always complete: the store never writes
/// partial records, so `id` and `status` are not optional here.
///
/// Field order matches the serialized key order of the store format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub id: u64,
    pub status: Status,
}

/// Input for creating a task. The store assigns `id` and forces
/// `status` to not-done on insert.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl TaskDraft {
    /// Promote the draft to a full record with a store-assigned id.
    pub(crate) fn into_task(self, id: u64) -> Task {
        Task {
            title: self.title,
            description: self.description,
            category: self.category,
            due_date: self.due_date,
            priority: self.priority,
            id,
            status: Status::NotDone,
        }
    }
}

/// Sparse field updates for editing a task.
///
/// `None` leaves a field unchanged. For the text fields an empty string
/// also means "unchanged" — it is the blank-entry sentinel from the edit
/// prompt, not a way to clear a field.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskUpdate {
    /// Apply the present, non-empty updates onto an existing record.
    pub(crate) fn apply_to(&self, task: &mut Task) {
        if let Some(title) = self.title.as_deref().filter(|s| !s.is_empty()) {
            task.title = title.to_string();
        }
        if let Some(description) = self.description.as_deref().filter(|s| !s.is_empty()) {
            task.description = description.to_string();
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            task.category = category.to_string();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            title: "Task 1".to_string(),
            description: "Description for Task 1".to_string(),
            category: "Work".to_string(),
            due_date: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            priority: Priority::High,
            id: 1,
            status: Status::Done,
        }
    }

    #[test]
    fn status_serializes_to_wire_tag() {
        assert_eq!(
            serde_json::to_string(&Status::Done).unwrap(),
            "\"выполнена\""
        );
        assert_eq!(
            serde_json::to_string(&Status::NotDone).unwrap(),
            "\"не выполнена\""
        );
    }

    #[test]
    fn priority_round_trips() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
            let back: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<Status>("\"pending\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
    }

    #[test]
    fn task_serializes_date_as_iso() {
        let value = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(value["due_date"], "2023-11-01");
        assert_eq!(value["status"], "выполнена");
        assert_eq!(value["priority"], "высокий");
    }

    #[test]
    fn draft_into_task_forces_not_done() {
        let draft = TaskDraft {
            title: "new title".to_string(),
            description: String::new(),
            category: "new category".to_string(),
            due_date: NaiveDate::from_ymd_opt(2124, 1, 1).unwrap(),
            priority: Priority::High,
        };
        let task = draft.into_task(4);
        assert_eq!(task.id, 4);
        assert_eq!(task.status, Status::NotDone);
    }

    #[test]
    fn update_skips_empty_strings() {
        let mut task = sample_task();
        let update = TaskUpdate {
            title: Some("New title".to_string()),
            category: Some(String::new()),
            ..Default::default()
        };
        update.apply_to(&mut task);
        assert_eq!(task.title, "New title");
        assert_eq!(task.category, "Work");
        assert_eq!(task.description, "Description for Task 1");
    }
}
