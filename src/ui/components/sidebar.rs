use crate::app::mode::Focus;
use crate::app::AppState;
use retro_tasks::todo::view::remaining_count;
use retro_tasks::utils::unicode::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 28;

/// Rows above the category list inside the sidebar: title, theme toggle,
/// blank line, "Categories" heading.
const CATEGORY_ROW_OFFSET: u16 = 4;
const FOOTER_ROWS: u16 = 2;

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = state.theme.clone();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.sidebar_bg).fg(theme.foreground));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let focused = state.focus == Focus::Sidebar;

    let toggle_label = if state.dark_mode {
        "☀ Light mode (t)"
    } else {
        "☾ Dark mode (t)"
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " RetroTasks",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {toggle_label}"),
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Categories",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ];

    for (i, category) in state.store.categories().iter().enumerate() {
        let remaining = remaining_count(&state.store.tasks_in_category(&category.id));
        let count = if remaining > 0 {
            remaining.to_string()
        } else {
            String::new()
        };
        let label = truncate_to_width(
            &format!(" {}. {}", i + 1, category.label()),
            width.saturating_sub(count.len() + 1),
        );
        let padding = width.saturating_sub(display_width(&label) + count.len() + 1);
        let text = format!("{label}{:padding$}{count} ", "");

        let style = if i == state.selected_category {
            let style = Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD);
            if focused {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    f.render_widget(Paragraph::new(lines), inner);

    if inner.height > CATEGORY_ROW_OFFSET + FOOTER_ROWS {
        let footer_area = Rect {
            y: inner.y + inner.height - FOOTER_ROWS,
            height: FOOTER_ROWS,
            ..inner
        };
        let footer = Paragraph::new(vec![
            Line::from("Retro To-Do List").centered(),
            Line::from("© 2025").centered(),
        ])
        .style(Style::default().fg(theme.muted));
        f.render_widget(footer, footer_area);
    }

    let category_count = state.store.categories().len() as u16;
    state.layout.theme_toggle = Rect {
        y: inner.y + 1,
        height: 1u16.min(inner.height.saturating_sub(1)),
        ..inner
    };
    state.layout.category_rows = Rect {
        y: inner.y + CATEGORY_ROW_OFFSET.min(inner.height),
        height: category_count.min(inner.height.saturating_sub(CATEGORY_ROW_OFFSET)),
        ..inner
    };
}
