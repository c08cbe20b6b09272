use crate::utils::unicode::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Category,
    DueDate,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::Category,
            DraftField::Category => DraftField::DueDate,
            DraftField::DueDate => DraftField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::Title => DraftField::DueDate,
            DraftField::Category => DraftField::Title,
            DraftField::DueDate => DraftField::Category,
        }
    }
}

/// Contents of the add-task dialog while it is open. Dropped on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskDraft {
    pub title: String,
    pub cursor_pos: usize,
    pub category_index: usize,
    pub due_date: Option<NaiveDate>,
    pub field: DraftField,
}

impl AddTaskDraft {
    pub fn new(category_index: usize) -> Self {
        Self {
            title: String::new(),
            cursor_pos: 0,
            category_index,
            due_date: None,
            field: DraftField::Title,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.title.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = prev_char_boundary(&self.title, self.cursor_pos);
            self.title.drain(prev..self.cursor_pos);
            self.cursor_pos = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = prev_char_boundary(&self.title, self.cursor_pos);
    }

    pub fn cursor_right(&mut self) {
        self.cursor_pos = next_char_boundary(&self.title, self.cursor_pos);
    }

    pub fn word_left(&mut self) {
        self.cursor_pos = prev_word_boundary(&self.title, self.cursor_pos);
    }

    pub fn word_right(&mut self) {
        self.cursor_pos = next_word_boundary(&self.title, self.cursor_pos);
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.title.len();
    }

    pub fn cycle_category(&mut self, forward: bool, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.category_index = if forward {
            (self.category_index + 1) % category_count
        } else {
            (self.category_index + category_count - 1) % category_count
        };
    }

    /// Moves the due date by `days`, starting from `today` when none is set.
    pub fn shift_due_date(&mut self, days: i64, today: NaiveDate) {
        let base = self.due_date.unwrap_or(today);
        self.due_date = base.checked_add_signed(Duration::days(days)).or(Some(base));
    }

    pub fn set_due_today(&mut self, today: NaiveDate) {
        self.due_date = Some(today);
    }

    pub fn clear_due_date(&mut self) {
        self.due_date = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut draft = AddTaskDraft::new(0);
        for c in "Buy milk".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.cursor_pos, 8);

        draft.backspace();
        assert_eq!(draft.title, "Buy mil");

        draft.cursor_home();
        draft.backspace();
        assert_eq!(draft.title, "Buy mil");
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut draft = AddTaskDraft::new(0);
        for c in "Caf".chars() {
            draft.insert_char(c);
        }
        draft.insert_char('é');
        draft.cursor_left();
        draft.cursor_left();
        draft.insert_char('x');
        assert_eq!(draft.title, "Caxfé");
        draft.cursor_end();
        draft.backspace();
        assert_eq!(draft.title, "Caxf");
    }

    #[test]
    fn test_word_jumps() {
        let mut draft = AddTaskDraft::new(0);
        for c in "call the bank".chars() {
            draft.insert_char(c);
        }
        draft.word_left();
        assert_eq!(draft.cursor_pos, 9);
        draft.cursor_home();
        draft.word_right();
        assert_eq!(draft.cursor_pos, 5);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(DraftField::Title.next(), DraftField::Category);
        assert_eq!(DraftField::DueDate.next(), DraftField::Title);
        assert_eq!(DraftField::Title.prev(), DraftField::DueDate);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut draft = AddTaskDraft::new(6);
        draft.cycle_category(true, 7);
        assert_eq!(draft.category_index, 0);
        draft.cycle_category(false, 7);
        assert_eq!(draft.category_index, 6);
        draft.cycle_category(true, 0);
        assert_eq!(draft.category_index, 6);
    }

    #[test]
    fn test_due_date_picker() {
        let mut draft = AddTaskDraft::new(0);
        assert_eq!(draft.due_date, None);

        draft.shift_due_date(1, today());
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 5, 1));

        draft.shift_due_date(7, today());
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 5, 8));

        draft.shift_due_date(-8, today());
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 4, 30));

        draft.clear_due_date();
        assert_eq!(draft.due_date, None);

        draft.set_due_today(today());
        assert_eq!(draft.due_date, Some(today()));
    }
}
