pub mod seed;
pub mod store;
pub mod task;
pub mod view;

pub use store::{StoreEvent, TaskStore};
pub use task::{Category, Task};
