//! Sample dataset the store starts from. Nothing here is ever written back.

use super::task::{Category, Task};
use chrono::NaiveDate;

pub const DEFAULT_CATEGORY_ID: &str = "work";

const CATEGORIES: [(&str, &str, &str); 7] = [
    ("work", "Work", "💼"),
    ("personal", "Personal", "👤"),
    ("shopping", "Shopping", "🛒"),
    ("health", "Health", "💪"),
    ("ideas", "Ideas", "💡"),
    ("finance", "Finance", "💰"),
    ("home", "Home", "🏠"),
];

// (id, title, completed, due date, category)
const TASKS: [(&str, &str, bool, Option<&str>, &str); 16] = [
    ("task-1", "Complete quarterly report", false, Some("2025-04-15"), "work"),
    ("task-2", "Review team presentations", true, None, "work"),
    ("task-3", "Schedule client meeting", false, Some("2025-04-20"), "work"),
    ("task-4", "Prepare for conference", false, None, "work"),
    ("task-5", "Buy birthday gift for mom", false, Some("2025-04-25"), "personal"),
    ("task-6", "Call insurance company", true, None, "personal"),
    ("task-7", "Schedule dentist appointment", false, None, "health"),
    ("task-8", "Plan weekend getaway", false, None, "personal"),
    ("task-9", "Milk", true, None, "shopping"),
    ("task-10", "Eggs", false, None, "shopping"),
    ("task-11", "Bread", false, None, "shopping"),
    ("task-12", "Coffee beans", false, None, "shopping"),
    ("task-13", "Morning jog", false, Some("2025-04-14"), "health"),
    ("task-14", "Take vitamins", true, None, "health"),
    ("task-15", "App for vintage photo filters", false, None, "ideas"),
    ("task-16", "Recipe book for comfort food", false, None, "ideas"),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, icon)| Category::new(*id, *name, *icon))
        .collect()
}

pub fn tasks() -> Vec<Task> {
    TASKS
        .iter()
        .map(|(id, title, completed, due, category_id)| Task {
            completed: *completed,
            ..Task::new(*id, *title, *category_id, due.and_then(|d| d.parse::<NaiveDate>().ok()))
        })
        .collect()
}
