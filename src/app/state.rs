use super::celebration::Celebration;
use super::draft::AddTaskDraft;
use super::mode::{Focus, Mode};
use crate::ui::theme::Theme;
use retro_tasks::config::Config;
use retro_tasks::todo::view::remaining_count;
use retro_tasks::todo::{Category, StoreEvent, Task, TaskStore};
use chrono::Local;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Below this width the sidebar hides unless the user asked for it.
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub shown_at: Instant,
}

/// A task row being dragged: where it came from and the row under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub from: usize,
    pub hover: usize,
}

/// Screen regions recorded during the last render, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub theme_toggle: Rect,
    pub category_rows: Rect,
    pub task_rows: Rect,
}

/// Where a click landed inside a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowZone {
    Checkbox,
    Delete,
    Body,
}

/// Columns of a task row: a two-column drag handle, then the checkbox.
pub const CHECKBOX_COLUMNS: std::ops::Range<u16> = 2..5;
/// Width of the trailing delete marker.
pub const DELETE_COLUMNS: u16 = 2;

pub struct AppState {
    pub store: TaskStore,
    pub selected_category: usize,
    pub focus: Focus,
    /// Category-local index of the highlighted task.
    pub cursor_position: usize,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: u16,
    pub dark_mode: bool,
    pub theme: Theme,
    pub draft: Option<AddTaskDraft>,
    pub notification: Option<Notification>,
    pub notification_ttl: Duration,
    pub celebration: Celebration,
    pub drag: Option<DragState>,
    pub list_state: ListState,
    pub date_format: String,
    pub show_sidebar: bool,
    /// Set once the user toggles the sidebar; wins over the width rule.
    pub sidebar_override: Option<bool>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub layout: ScreenLayout,
}

impl AppState {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let selected_category = store
            .categories()
            .iter()
            .position(|c| c.id == config.default_category)
            .unwrap_or(0);
        let dark_mode = config.is_dark();

        let mut state = Self {
            store,
            selected_category,
            focus: Focus::Tasks,
            cursor_position: 0,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            dark_mode,
            theme: Theme::for_mode(dark_mode),
            draft: None,
            notification: None,
            notification_ttl: Duration::from_secs(config.notification_secs),
            celebration: Celebration::new(Duration::from_millis(config.celebration_ms)),
            drag: None,
            list_state: ListState::default(),
            date_format: config.validated_date_format(),
            show_sidebar: config.show_sidebar,
            sidebar_override: None,
            terminal_width: 80,  // updated on first render
            terminal_height: 24, // updated on first render
            layout: ScreenLayout::default(),
        };
        state.sync_list_state();
        state
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.store.categories().get(self.selected_category)
    }

    pub fn selected_category_id(&self) -> String {
        self.selected_category()
            .map(|c| c.id.clone())
            .unwrap_or_default()
    }

    /// The selected category's tasks, in order. Recomputed on every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.selected_category() {
            Some(category) => self.store.tasks_in_category(&category.id),
            None => Vec::new(),
        }
    }

    pub fn remaining_count(&self) -> usize {
        remaining_count(&self.visible_tasks())
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.cursor_position).copied()
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_override
            .unwrap_or(self.show_sidebar && self.terminal_width >= MIN_WIDTH_FOR_SIDEBAR)
    }

    pub fn toggle_sidebar(&mut self) {
        let visible = !self.sidebar_visible();
        self.sidebar_override = Some(visible);
        if !visible {
            self.focus = Focus::Tasks;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tasks if self.sidebar_visible() => Focus::Sidebar,
            _ => Focus::Tasks,
        };
    }

    pub fn select_category(&mut self, index: usize) {
        if index >= self.store.categories().len() || index == self.selected_category {
            return;
        }
        self.selected_category = index;
        self.cursor_position = 0;
        self.drag = None;
        *self.list_state.offset_mut() = 0;
        self.sync_list_state();
        debug!(category = %self.selected_category_id(), "select_category");
    }

    pub fn next_category(&mut self) {
        let count = self.store.categories().len();
        if count > 0 {
            self.select_category((self.selected_category + 1) % count);
        }
    }

    pub fn prev_category(&mut self) {
        let count = self.store.categories().len();
        if count > 0 {
            self.select_category((self.selected_category + count - 1) % count);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
        debug!(dark_mode = self.dark_mode, "toggle_theme");
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 && self.cursor_position < len - 1 {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn move_cursor_top(&mut self) {
        self.cursor_position = 0;
        self.sync_list_state();
    }

    pub fn move_cursor_bottom(&mut self) {
        self.cursor_position = self.visible_tasks().len().saturating_sub(1);
        self.sync_list_state();
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        self.cursor_position = self.cursor_position.min(len.saturating_sub(1));
        self.sync_list_state();
    }

    pub fn sync_list_state(&mut self) {
        if self.visible_tasks().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.cursor_position));
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.toggle_task(&id);
        }
    }

    pub fn toggle_task(&mut self, id: &str) {
        if let Some(event) = self.store.toggle_complete(id) {
            self.apply_event(event);
        }
    }

    pub fn delete_selected(&mut self) {
        self.cancel_drag();
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            if let Some(event) = self.store.delete_task(&id) {
                self.apply_event(event);
            }
            self.clamp_cursor();
        }
    }

    /// Reorders within the selected category and keeps the cursor on the moved task.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let category_id = self.selected_category_id();
        let moved = self.store.reorder_within_category(&category_id, from, to);
        if moved {
            self.cursor_position = to;
            self.sync_list_state();
        }
        moved
    }

    pub fn move_selected_up(&mut self) {
        if self.cursor_position > 0 {
            self.reorder(self.cursor_position, self.cursor_position - 1);
        }
    }

    pub fn move_selected_down(&mut self) {
        self.reorder(self.cursor_position, self.cursor_position + 1);
    }

    pub fn open_add_dialog(&mut self) {
        self.draft = Some(AddTaskDraft::new(self.selected_category));
        self.mode = Mode::AddTask;
    }

    pub fn cancel_add_dialog(&mut self) {
        self.draft = None;
        self.mode = Mode::Navigate;
    }

    /// Submits the dialog. A blank title keeps the dialog open.
    pub fn confirm_add_dialog(&mut self) -> bool {
        let Some(draft) = self.draft.as_ref() else {
            return false;
        };
        let category_id = self
            .store
            .categories()
            .get(draft.category_index)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| self.selected_category_id());
        let (title, due_date, category_index) =
            (draft.title.clone(), draft.due_date, draft.category_index);

        let Some(event) = self.store.add_task(&title, &category_id, due_date) else {
            return false;
        };
        self.apply_event(event);
        self.draft = None;
        self.mode = Mode::Navigate;

        // Show the category the task went into, with the new task highlighted.
        self.select_category(category_index);
        self.move_cursor_bottom();
        true
    }

    pub fn today(&self) -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    pub fn begin_drag(&mut self, index: usize) {
        if index < self.visible_tasks().len() {
            self.cursor_position = index;
            self.drag = Some(DragState { from: index, hover: index });
            self.sync_list_state();
        }
    }

    pub fn drag_hover(&mut self, index: usize) {
        let len = self.visible_tasks().len();
        if let Some(drag) = self.drag.as_mut()
            && len > 0
        {
            drag.hover = index.min(len - 1);
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Drops the dragged task on the hovered row. The reorder is committed
    /// once, here, not while hovering.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(DragState { from, hover }) if from != hover => self.reorder(from, hover),
            Some(DragState { from, .. }) => {
                self.cursor_position = from;
                self.sync_list_state();
                false
            }
            None => false,
        }
    }

    fn apply_event(&mut self, event: StoreEvent) {
        let now = Instant::now();
        if event.is_completion() {
            self.celebration.trigger(now);
        }
        if let Some((title, description)) = event.notification() {
            info!(%title, %description, "notify");
            self.notification = Some(Notification {
                title,
                description,
                shown_at: now,
            });
        }
    }

    pub fn active_notification(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.notification_ttl)
    }

    /// Expires transient UI state. Called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.notification.is_some() && self.active_notification(now).is_none() {
            self.notification = None;
        }
        self.celebration.tick(now);
    }

    pub fn category_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.layout.category_rows;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = (row - area.y) as usize;
        (index < self.store.categories().len()).then_some(index)
    }

    pub fn is_theme_toggle_at(&self, column: u16, row: u16) -> bool {
        self.layout.theme_toggle.contains(Position::new(column, row))
    }

    /// Category-local task index under a screen cell, accounting for scrolling.
    pub fn task_at(&self, column: u16, row: u16) -> Option<(usize, RowZone)> {
        let area = self.layout.task_rows;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        if index >= self.visible_tasks().len() {
            return None;
        }
        let rel = column - area.x;
        let zone = if CHECKBOX_COLUMNS.contains(&rel) {
            RowZone::Checkbox
        } else if rel >= area.width.saturating_sub(DELETE_COLUMNS) {
            RowZone::Delete
        } else {
            RowZone::Body
        };
        Some((index, zone))
    }

    /// Task row under the mouse while dragging; rows above or below the list clamp.
    pub fn drag_row_at(&self, row: u16) -> usize {
        let area = self.layout.task_rows;
        let rel = row.saturating_sub(area.y).min(area.height.saturating_sub(1));
        self.list_state.offset() + rel as usize
    }
}
