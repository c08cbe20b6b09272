//! Derived projections over the task collection. Always recomputed from the
//! store's snapshot, never stored.

use super::task::Task;

/// Tasks belonging to `category_id`, in collection order.
pub fn tasks_in_category<'a>(tasks: &'a [Task], category_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.category_id == category_id)
        .collect()
}

pub fn remaining_count(tasks: &[&Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}
