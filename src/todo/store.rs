use super::seed;
use super::task::{Category, Task};
use super::view::tasks_in_category;
use chrono::{NaiveDate, Utc};
use tracing::debug;

/// What a successful mutation did. Callers turn these into notifications and
/// the completion celebration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Task),
    Deleted(Task),
    Completed(Task),
    Reopened(Task),
}

impl StoreEvent {
    /// Short title and description for the notification side channel.
    /// Reopening a task is silent.
    pub fn notification(&self) -> Option<(String, String)> {
        match self {
            StoreEvent::Added(_) => Some((
                "Task added".to_string(),
                "New task has been added to your list.".to_string(),
            )),
            StoreEvent::Deleted(task) => Some((
                "Task deleted".to_string(),
                format!("\"{}\" has been removed.", task.title),
            )),
            StoreEvent::Completed(_) => Some((
                "Task completed!".to_string(),
                "Great job crossing that off your list.".to_string(),
            )),
            StoreEvent::Reopened(_) => None,
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, StoreEvent::Completed(_))
    }
}

/// Single source of truth for the task collection.
///
/// Tasks of different categories are interleaved in one flat `Vec`. Only the
/// relative order within a category is meaningful, and callers only ever see
/// category-local indices.
#[derive(Debug, Clone)]
pub struct TaskStore {
    categories: Vec<Category>,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(categories: Vec<Category>, tasks: Vec<Task>) -> Self {
        Self { categories, tasks }
    }

    pub fn seeded() -> Self {
        Self::new(seed::categories(), seed::tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks_in_category(&self, category_id: &str) -> Vec<&Task> {
        tasks_in_category(&self.tasks, category_id)
    }

    /// Appends a new incomplete task. Blank titles are rejected.
    pub fn add_task(
        &mut self,
        title: &str,
        category_id: &str,
        due_date: Option<NaiveDate>,
    ) -> Option<StoreEvent> {
        let title = title.trim();
        if title.is_empty() {
            debug!(category_id, "add_task: blank title, ignoring");
            return None;
        }

        let id = self.next_id();
        let task = Task::new(id, title, category_id, due_date);
        debug!(
            id = %task.id,
            category_id,
            due_date = ?due_date,
            total = self.tasks.len() + 1,
            "add_task"
        );
        self.tasks.push(task.clone());
        Some(StoreEvent::Added(task))
    }

    pub fn delete_task(&mut self, id: &str) -> Option<StoreEvent> {
        let Some(index) = self.position(id) else {
            debug!(id, "delete_task: unknown id, ignoring");
            return None;
        };
        let removed = self.tasks.remove(index);
        debug!(id, total = self.tasks.len(), "delete_task");
        Some(StoreEvent::Deleted(removed))
    }

    /// Flips `completed` on one task, leaving its position and other fields alone.
    pub fn toggle_complete(&mut self, id: &str) -> Option<StoreEvent> {
        let Some(index) = self.position(id) else {
            debug!(id, "toggle_complete: unknown id, ignoring");
            return None;
        };
        let updated = self.tasks[index].toggled();
        self.tasks[index] = updated.clone();
        debug!(id, completed = updated.completed, "toggle_complete");

        if updated.completed {
            Some(StoreEvent::Completed(updated))
        } else {
            Some(StoreEvent::Reopened(updated))
        }
    }

    /// Moves the task at category-local index `from` to category-local index
    /// `to`. The result is the category's new order followed by every other
    /// task in its previous relative order.
    ///
    /// Returns false, leaving the collection untouched, when `from == to` or
    /// either index is outside the category.
    pub fn reorder_within_category(&mut self, category_id: &str, from: usize, to: usize) -> bool {
        let (mut in_category, others): (Vec<Task>, Vec<Task>) = self
            .tasks
            .iter()
            .cloned()
            .partition(|task| task.category_id == category_id);

        if from == to || from >= in_category.len() || to >= in_category.len() {
            debug!(
                category_id,
                from,
                to,
                len = in_category.len(),
                "reorder_within_category: nothing to do"
            );
            return false;
        }

        let moved = in_category.remove(from);
        debug!(category_id, id = %moved.id, from, to, "reorder_within_category");
        in_category.insert(to, moved);
        in_category.extend(others);
        self.tasks = in_category;
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("task-{millis}");
            if self.position(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}
