use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub category_id: String,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category_id: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            due_date,
            category_id: category_id.into(),
        }
    }

    /// Copy of this task with `completed` flipped. Nothing else changes.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_incomplete() {
        let task = Task::new("task-1", "Write docs", "work", None);
        assert!(!task.completed);
        assert_eq!(task.checkbox(), "[ ]");
    }

    #[test]
    fn test_toggled_only_changes_completed() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let task = Task::new("task-1", "Write docs", "work", Some(date));
        let toggled = task.toggled();

        assert!(toggled.completed);
        assert_eq!(toggled.id, task.id);
        assert_eq!(toggled.title, task.title);
        assert_eq!(toggled.due_date, task.due_date);
        assert_eq!(toggled.category_id, task.category_id);
        assert_eq!(toggled.toggled(), task);
    }

    #[test]
    fn test_task_json_omits_missing_due_date() {
        let task = Task::new("task-2", "Eggs", "shopping", None);
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("due_date"));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_category_label() {
        let category = Category::new("work", "Work", "💼");
        assert_eq!(category.label(), "💼 Work");
    }
}
