//! Card Presentation
//!
//! What a task card shows, derived from the task alone.

use crate::models::{Priority, Task, TaskKind};

/// Characters of the id shown on a card
const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeIcon {
    pub icon: &'static str,
    pub class: &'static str,
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-high",
        Priority::Medium => "priority-medium",
        Priority::Low => "priority-low",
    }
}

pub fn type_icon(kind: TaskKind) -> TypeIcon {
    match kind {
        TaskKind::Bug => TypeIcon { icon: "fa-bug", class: "type-bug" },
        TaskKind::Feature => TypeIcon { icon: "fa-star", class: "type-feature" },
        TaskKind::Task => TypeIcon { icon: "fa-tasks", class: "type-task" },
    }
}

/// Last eight characters of an id
pub fn short_id(id: &str) -> String {
    let count = id.chars().count();
    id.chars().skip(count.saturating_sub(SHORT_ID_LEN)).collect()
}

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub task_id: String,
    pub title: String,
    pub short_id: String,
    pub priority_class: &'static str,
    pub type_icon: TypeIcon,
    pub assignee: Option<String>,
}

impl Card {
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            short_id: short_id(&task.id),
            priority_class: priority_class(task.priority),
            type_icon: type_icon(task.kind),
            assignee: task.assignee().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_json(priority: &str, kind: &str) -> Task {
        serde_json::from_str(&format!(
            r#"{{"task_id": "abcdef0123456789", "title": "Card", "status": "todo", "priority": "{}", "type": "{}"}}"#,
            priority, kind
        ))
        .unwrap()
    }

    #[test]
    fn test_unknown_priority_renders_as_medium() {
        let urgent = Card::from_task(&task_json("urgent", "task"));
        let medium = Card::from_task(&task_json("medium", "task"));
        assert_eq!(urgent.priority_class, medium.priority_class);
        assert_eq!(urgent.priority_class, "priority-medium");
    }

    #[test]
    fn test_unknown_type_renders_as_task() {
        let epic = Card::from_task(&task_json("low", "epic"));
        let task = Card::from_task(&task_json("low", "task"));
        assert_eq!(epic.type_icon, task.type_icon);
        assert_eq!(epic.type_icon, TypeIcon { icon: "fa-tasks", class: "type-task" });
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(Card::from_task(&task_json("high", "bug")).priority_class, "priority-high");
        assert_eq!(Card::from_task(&task_json("low", "feature")).type_icon.icon, "fa-star");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abcdef0123456789"), "23456789");
        assert_eq!(short_id("t-1"), "t-1");
        assert_eq!(short_id(""), "");
    }
}
