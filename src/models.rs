//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Task priority. Anything unrecognised is treated as medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<Option<String>> for Priority {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("high") => Priority::High,
            Some("low") => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

/// Task type. Anything unrecognised is treated as a plain task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum TaskKind {
    Bug,
    Feature,
    #[default]
    Task,
}

impl From<Option<String>> for TaskKind {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("bug") => TaskKind::Bug,
            Some("feature") => TaskKind::Feature,
            _ => TaskKind::Task,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "type", default)]
    pub kind: TaskKind,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Task {
    /// Assignee name, ignoring blanks the backend sends for unassigned tasks
    pub fn assignee(&self) -> Option<&str> {
        self.assigned_to.as_deref().filter(|name| !name.is_empty())
    }
}

/// Column creation request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewColumn {
    pub name: String,
    pub status: String,
}

impl NewColumn {
    /// Trimmed column fields, `None` if either is blank
    pub fn parse(name: &str, status: &str) -> Option<Self> {
        let name = name.trim();
        let status = status.trim();
        if name.is_empty() || status.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            status: status.to_string(),
        })
    }
}

/// One role held by the current user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleAssignment {
    pub role_name: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Response of the user roles endpoint
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserRoles {
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
    #[serde(default)]
    pub active_role: Option<String>,
    #[serde(default)]
    pub can_switch: bool,
}
