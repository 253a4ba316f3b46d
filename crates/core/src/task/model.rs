//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Opaque task identifier, assigned once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidInput(format!("Unknown task status: {}", other))),
        }
    }
}

/// A single to-do item
///
/// Serialized in camelCase with epoch-millisecond timestamps, the layout
/// stored in the task slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// Read `null` as the field's default, the way `t.description || ''` would
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    /// Lower-cased `title description`, the text free-text search runs against
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// User-supplied fields for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl TaskInput {
    /// Create input with the given title, empty description and pending status
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Trim text fields and reject a blank title
    pub fn validated(self) -> Result<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::validation("title", "Title cannot be empty"));
        }
        Ok(Self {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert_eq!(" pending ".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert!("doing".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_input_validation_trims() {
        let input = TaskInput::new("  Buy milk  ")
            .with_description("  two litres ")
            .with_status(TaskStatus::Done)
            .validated()
            .unwrap();

        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, "two litres");
        assert_eq!(input.status, TaskStatus::Done);
    }

    #[test]
    fn test_input_validation_rejects_blank_title() {
        let err = TaskInput::new(" \t\n").validated().unwrap_err();
        assert_eq!(err.invalid_field(), Some("title"));
    }

    #[test]
    fn test_task_serialized_layout() {
        let task = Task {
            id: TaskId::new("lq2x3abcde"),
            title: "Read assignment".to_string(),
            description: String::new(),
            status: TaskStatus::Done,
            created_at: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
            updated_at: DateTime::from_timestamp_millis(1_700_000_000_456).unwrap(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], "lq2x3abcde");
        assert_eq!(value["status"], "done");
        assert_eq!(value["createdAt"], 1_700_000_000_123i64);
        assert_eq!(value["updatedAt"], 1_700_000_000_456i64);
    }

    #[test]
    fn test_task_deserialize_defaults() {
        let json = r#"{"id":"a1","title":"Welcome","createdAt":1000,"updatedAt":1000}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at.timestamp_millis(), 1000);
    }

    #[test]
    fn test_task_deserialize_null_fields() {
        let json = r#"{"id":"a1","title":"Mine","description":null,"status":null,
                       "createdAt":1000,"updatedAt":1000}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_search_text_is_case_folded() {
        let task = Task {
            id: TaskId::new("a"),
            title: "Read Assignment".to_string(),
            description: "MERN Steps".to_string(),
            status: TaskStatus::Pending,
            created_at: DateTime::from_timestamp_millis(0).unwrap(),
            updated_at: DateTime::from_timestamp_millis(0).unwrap(),
        };
        assert_eq!(task.search_text(), "read assignment mern steps");
    }
}
