use crate::app::draft::{AddTaskDraft, DraftField};
use crate::app::AppState;
use retro_tasks::utils::unicode::display_width;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 11;
const TITLE_PROMPT: &str = " > ";
const PLACEHOLDER: &str = "What needs to be done?";

/// A fixed-size rect centered in `area`, shrunk when the terminal is small.
pub fn popup_rect(area: Rect) -> Rect {
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render(f: &mut Frame, state: &AppState) {
    let Some(draft) = state.draft.as_ref() else {
        return;
    };
    let theme = &state.theme;
    let area = popup_rect(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Task ")
        .title_bottom(Line::from(" Tab next field • Enter add • Esc cancel ").centered())
        .border_style(Style::default().fg(theme.foreground))
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let label_style = |field: DraftField| {
        if draft.field == field {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        }
    };
    let value_style = |field: DraftField| {
        if draft.field == field {
            Style::default().bg(theme.selection_bg)
        } else {
            Style::default()
        }
    };

    let room = inner.width.saturating_sub(TITLE_PROMPT.len() as u16 + 1) as usize;
    let (visible, _) = visible_title(draft, room);
    let title_span = if draft.title.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(theme.muted))
    } else {
        Span::styled(visible, value_style(DraftField::Title))
    };

    let category = state
        .store
        .categories()
        .get(draft.category_index)
        .map(|c| c.label())
        .unwrap_or_default();
    let due = draft
        .due_date
        .map(|d| d.format(&state.date_format).to_string())
        .unwrap_or_else(|| "none".to_string());

    let lines = vec![
        Line::from(Span::styled(" Title", label_style(DraftField::Title))),
        Line::from(vec![Span::raw(TITLE_PROMPT), title_span]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Category  ", label_style(DraftField::Category)),
            Span::styled(format!("◀ {category} ▶"), value_style(DraftField::Category)),
        ]),
        Line::from(vec![
            Span::styled(" Due date  ", label_style(DraftField::DueDate)),
            Span::styled(format!("◀ {due} ▶"), value_style(DraftField::DueDate)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            field_hint(draft.field),
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    if draft.field == DraftField::Title && inner.height > 1 {
        let (_, cursor) = visible_title(draft, room);
        f.set_cursor_position(Position::new(
            inner.x + TITLE_PROMPT.len() as u16 + cursor as u16,
            inner.y + 1,
        ));
    }
}

fn field_hint(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => " Type a title",
        DraftField::Category => " ←/→ change category",
        DraftField::DueDate => " ←/→ day • ↑/↓ week • t today • Bksp clear",
    }
}

/// The part of the title that fits in `room` columns while keeping the
/// cursor visible, and the cursor's column within it.
fn visible_title(draft: &AddTaskDraft, room: usize) -> (String, usize) {
    let before = &draft.title[..draft.cursor_pos.min(draft.title.len())];
    let mut start = 0;
    while room > 0 && display_width(&before[start..]) >= room {
        match before[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }

    let cursor = display_width(&before[start..]);
    let mut visible = String::new();
    let mut width = 0;
    for c in draft.title[start..].chars() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if width + w > room {
            break;
        }
        visible.push(c);
        width += w;
    }
    (visible, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::test_helpers::{render_to_string, seeded_state};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_popup_rect_is_centered() {
        let rect = popup_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(12, 6, 56, 11));
    }

    #[test]
    fn test_popup_rect_shrinks_to_fit() {
        let rect = popup_rect(Rect::new(0, 0, 40, 8));
        assert_eq!(rect, Rect::new(0, 0, 40, 8));
    }

    #[test]
    fn test_renders_empty_draft() {
        let mut state = seeded_state();
        state.open_add_dialog();
        let out = render_to_string(80, 24, |f, _| render(f, &state));

        assert!(out.contains("New Task"));
        assert!(out.contains(PLACEHOLDER));
        assert!(out.contains("Work ▶"));
        assert!(out.contains("◀ none ▶"));
    }

    #[test]
    fn test_renders_draft_values() {
        let mut state = seeded_state();
        state.open_add_dialog();
        if let Some(draft) = state.draft.as_mut() {
            for c in "Water plants".chars() {
                draft.insert_char(c);
            }
            draft.due_date = NaiveDate::from_ymd_opt(2025, 5, 1);
            draft.field = DraftField::DueDate;
        }
        let out = render_to_string(80, 24, |f, _| render(f, &state));

        assert!(out.contains(" > Water plants"));
        assert!(out.contains("◀ 2025-05-01 ▶"));
        assert!(out.contains("t today"));
    }

    #[test]
    fn test_nothing_rendered_without_draft() {
        let state = seeded_state();
        let out = render_to_string(80, 24, |f, _| render(f, &state));
        assert_eq!(out, "");
    }

    #[test]
    fn test_visible_title_short() {
        let mut draft = AddTaskDraft::new(0);
        for c in "abc".chars() {
            draft.insert_char(c);
        }
        assert_eq!(visible_title(&draft, 10), ("abc".to_string(), 3));

        draft.cursor_home();
        assert_eq!(visible_title(&draft, 10), ("abc".to_string(), 0));
    }

    #[test]
    fn test_visible_title_scrolls_with_cursor() {
        let mut draft = AddTaskDraft::new(0);
        for c in "abcdefghij".chars() {
            draft.insert_char(c);
        }
        let (visible, cursor) = visible_title(&draft, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(cursor, 4);
    }
}
