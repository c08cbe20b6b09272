use super::draft::DraftField;
use super::mode::{Focus, Mode};
use super::state::{AppState, RowZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Total number of lines in the help content (must match render_help_overlay)
pub const HELP_TOTAL_LINES: u16 = 34;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    // Drag indices are only valid until the list or mode changes under them
    state.cancel_drag();

    if state.show_help {
        handle_help_keys(key, state);
        return;
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::AddTask => handle_add_task_mode(key, state),
        Mode::ConfirmDelete => handle_confirm_delete_mode(key, state),
    }
}

fn handle_help_keys(key: KeyEvent, state: &mut AppState) {
    // Help popup is 80% of terminal height, minus 2 for borders
    let popup_height = (state.terminal_height * 80) / 100;
    let max_scroll = HELP_TOTAL_LINES.saturating_sub(popup_height.saturating_sub(2));

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.help_scroll < max_scroll {
                state.help_scroll += 1;
            }
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Keys that behave the same whichever pane has focus
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            return;
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
            return;
        }
        KeyCode::Char('b') => {
            state.toggle_sidebar();
            return;
        }
        KeyCode::Tab => {
            state.toggle_focus();
            return;
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            state.open_add_dialog();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            state.select_category(index);
            return;
        }
        _ => {}
    }

    match state.focus {
        Focus::Sidebar => match key.code {
            KeyCode::Down | KeyCode::Char('j') => state.next_category(),
            KeyCode::Up | KeyCode::Char('k') => state.prev_category(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => state.focus = Focus::Tasks,
            _ => {}
        },
        Focus::Tasks => match key.code {
            KeyCode::Down if alt => state.move_selected_down(),
            KeyCode::Up if alt => state.move_selected_up(),
            KeyCode::Char('J') => state.move_selected_down(),
            KeyCode::Char('K') => state.move_selected_up(),
            KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),
            KeyCode::Char('g') | KeyCode::Home => state.move_cursor_top(),
            KeyCode::Char('G') | KeyCode::End => state.move_cursor_bottom(),
            KeyCode::Char('x') | KeyCode::Char(' ') => state.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if state.selected_task().is_some() {
                    state.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if state.sidebar_visible() {
                    state.focus = Focus::Sidebar;
                }
            }
            _ => {}
        },
    }
}

fn handle_confirm_delete_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.delete_selected();
            state.mode = Mode::Navigate;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn handle_add_task_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.cancel_add_dialog();
            return;
        }
        KeyCode::Enter => {
            state.confirm_add_dialog();
            return;
        }
        _ => {}
    }

    let today = state.today();
    let category_count = state.store.categories().len();
    let Some(draft) = state.draft.as_mut() else {
        state.mode = Mode::Navigate;
        return;
    };
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab => {
            draft.field = draft.field.next();
            return;
        }
        KeyCode::BackTab => {
            draft.field = draft.field.prev();
            return;
        }
        _ => {}
    }

    match draft.field {
        DraftField::Title => match key.code {
            KeyCode::Backspace => draft.backspace(),
            KeyCode::Left if alt => draft.word_left(),
            KeyCode::Right if alt => draft.word_right(),
            KeyCode::Left => draft.cursor_left(),
            KeyCode::Right => draft.cursor_right(),
            KeyCode::Home => draft.cursor_home(),
            KeyCode::End => draft.cursor_end(),
            KeyCode::Char('a') if ctrl => draft.cursor_home(),
            KeyCode::Char('e') if ctrl => draft.cursor_end(),
            KeyCode::Char(c) if !ctrl => draft.insert_char(c),
            _ => {}
        },
        DraftField::Category => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                draft.cycle_category(true, category_count)
            }
            KeyCode::Left | KeyCode::Char('h') => draft.cycle_category(false, category_count),
            _ => {}
        },
        DraftField::DueDate => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                draft.shift_due_date(1, today)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                draft.shift_due_date(-1, today)
            }
            KeyCode::Down | KeyCode::Char('j') => draft.shift_due_date(7, today),
            KeyCode::Up | KeyCode::Char('k') => draft.shift_due_date(-7, today),
            KeyCode::Char('t') => draft.set_due_today(today),
            KeyCode::Backspace | KeyCode::Delete => draft.clear_due_date(),
            _ => {}
        },
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) {
    if state.show_help {
        let popup_height = (state.terminal_height * 80) / 100;
        let max_scroll = HELP_TOTAL_LINES.saturating_sub(popup_height.saturating_sub(2));
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                state.help_scroll = state.help_scroll.saturating_sub(3);
            }
            MouseEventKind::ScrollDown => {
                state.help_scroll = state.help_scroll.saturating_add(3).min(max_scroll);
            }
            _ => {}
        }
        return;
    }

    if state.mode != Mode::Navigate {
        state.cancel_drag();
        return;
    }

    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            for _ in 0..3 {
                state.move_cursor_up();
            }
        }
        MouseEventKind::ScrollDown => {
            for _ in 0..3 {
                state.move_cursor_down();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.sidebar_visible() {
                if state.is_theme_toggle_at(column, row) {
                    state.toggle_theme();
                    return;
                }
                if let Some(index) = state.category_at(column, row) {
                    state.focus = Focus::Sidebar;
                    state.select_category(index);
                    return;
                }
            }

            if let Some((index, zone)) = state.task_at(column, row) {
                state.focus = Focus::Tasks;
                state.cursor_position = index;
                state.sync_list_state();
                match zone {
                    RowZone::Checkbox => state.toggle_selected(),
                    RowZone::Delete => state.mode = Mode::ConfirmDelete,
                    RowZone::Body => state.begin_drag(index),
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.drag.is_some() {
                let index = state.drag_row_at(row);
                state.drag_hover(index);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.end_drag();
        }
        _ => {}
    }
}
