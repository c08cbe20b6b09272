use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

const NAV_HINT: &str = "? help  q quit";

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if state.mode == Mode::ConfirmDelete {
        render_confirm_delete(f, state, area);
        return;
    }

    if let Some(notification) = state.active_notification(Instant::now()) {
        let message = format!(" ✔ {}: {} ", notification.title, notification.description);
        let style = Style::default()
            .fg(state.theme.notification_fg)
            .bg(state.theme.notification_bg)
            .add_modifier(Modifier::BOLD);
        render_full_width(f, &message, style, area);
        return;
    }

    let category = state
        .selected_category()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let theme_label = if state.dark_mode { "dark" } else { "light" };

    let left_content = format!(
        " {} | {} | {}: {} tasks, {} remaining | {}",
        state.mode,
        state.focus,
        category,
        state.visible_tasks().len(),
        state.remaining_count(),
        theme_label
    );

    // Format: "{left_content} {padding} {nav_hint} "
    let padding = area
        .width
        .saturating_sub(left_content.chars().count() as u16 + NAV_HINT.len() as u16 + 2);

    let status_line = format!(
        "{} {:>padding$}{} ",
        left_content,
        "",
        NAV_HINT,
        padding = padding as usize
    );

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);
    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}

fn render_confirm_delete(f: &mut Frame, state: &AppState, area: Rect) {
    let title = state.selected_task().map(|t| t.title.as_str()).unwrap_or("");
    let prompt = format!(" Delete \"{title}\"? (Y/n) ");

    let style = Style::default()
        .fg(Color::White)
        .bg(state.theme.delete)
        .add_modifier(Modifier::BOLD);
    render_full_width(f, &prompt, style, area);
}

fn render_full_width(f: &mut Frame, message: &str, style: Style, area: Rect) {
    let padding = area.width.saturating_sub(message.chars().count() as u16);
    let status_line = format!("{}{:padding$}", message, "", padding = padding as usize);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
