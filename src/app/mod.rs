pub mod celebration;
pub mod draft;
pub mod event;
pub mod mode;
pub mod state;

pub use state::AppState;
