pub mod confetti;
pub mod dialog;
pub mod sidebar;
pub mod status_bar;
pub mod task_list;

#[cfg(test)]
mod test_helpers;

use crate::app::mode::Mode;
use crate::app::AppState;
use crate::ui::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Move cursor down"),
            ("k / ↑", "Move cursor up"),
            ("g / G", "First / last task"),
            ("h / l", "Focus categories / tasks"),
            ("Tab", "Switch pane"),
            ("1-9", "Jump to category"),
        ],
    ),
    (
        "Tasks",
        &[
            ("a / n", "New task"),
            ("x / Space", "Toggle done"),
            ("d / Del", "Delete task"),
            ("J / K", "Move task down / up (also Alt+↓/↑)"),
            ("Mouse drag", "Reorder within category"),
            ("Click [ ] / ✕", "Toggle done / delete"),
        ],
    ),
    (
        "New Task Dialog",
        &[
            ("Tab / S-Tab", "Next / previous field"),
            ("← / →", "Change category or due day"),
            ("↑ / ↓", "Due date one week earlier / later"),
            ("t", "Due today"),
            ("Backspace", "Delete character / clear date"),
            ("Enter", "Add task"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "View",
        &[
            ("t", "Toggle dark mode"),
            ("b", "Toggle sidebar"),
            ("?", "Toggle this help"),
            ("q / Ctrl-C", "Quit"),
        ],
    ),
];

pub fn render(f: &mut Frame, state: &mut AppState) {
    // Update terminal dimensions for click and scroll calculations
    state.terminal_width = f.area().width;
    state.terminal_height = f.area().height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Sidebar and task list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let list_area = if state.sidebar_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar::SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(chunks[0]);
        sidebar::render(f, state, columns[0]);
        columns[1]
    } else {
        // Hidden sidebar must not swallow clicks
        state.layout.theme_toggle = Rect::default();
        state.layout.category_rows = Rect::default();
        chunks[0]
    };

    task_list::render(f, state, list_area);
    confetti::render(f, state, list_area);
    status_bar::render(f, state, chunks[1]);

    if state.mode == Mode::AddTask {
        dialog::render(f, state);
    }

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(theme.due_date).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.foreground);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "  RetroTasks Help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (section, keys) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(format!("  ── {section} ──"), section_style)));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("    {key:<16}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  ↑/↓ or j/k to scroll • Esc or ? to close",
        Style::default().fg(theme.muted),
    )));
    lines
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let lines = help_lines(&state.theme);
    let total_lines = lines.len() as u16;

    // Center the help popup
    let area = centered_rect(65, 80, f.area());
    let inner_height = area.height.saturating_sub(2); // Account for borders

    // Clamp scroll to valid range
    let max_scroll = total_lines.saturating_sub(inner_height);
    let scroll_offset = state.help_scroll.min(max_scroll) as usize;

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(scroll_offset)
        .take(inner_height as usize)
        .map(ListItem::new)
        .collect();

    let list_widget = List::new(visible_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(Line::from(" ↑↓ scroll ").centered())
            .style(Style::default().bg(state.theme.background).fg(state.theme.foreground)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list_widget, area);

    if total_lines > inner_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        // content_length is the scrollable range, position is where we are in it
        let mut scrollbar_state = ScrollbarState::new(max_scroll as usize + 1).position(scroll_offset);

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
