use crate::app::mode::Focus;
use crate::app::state::{DELETE_COLUMNS, DragState};
use crate::app::AppState;
use retro_tasks::todo::Task;
use retro_tasks::utils::unicode::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const DRAG_HANDLE: &str = "⠿ ";
const EMPTY_MESSAGE: &str = "No tasks in this category yet. Add some!";
/// Title columns kept before the due date is shown.
const MIN_TITLE_WIDTH: usize = 8;

pub fn header(state: &AppState) -> String {
    match state.selected_category() {
        Some(category) => format!(
            " {} {} ({} remaining) ",
            category.icon,
            category.name,
            state.remaining_count()
        ),
        None => " Tasks ".to_string(),
    }
}

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = state.theme.clone();
    let border_style = if state.focus == Focus::Tasks {
        Style::default().fg(theme.foreground)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            header(state),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" a add • x done • J/K move • d delete ").right_aligned())
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);
    f.render_widget(block, area);
    state.layout.task_rows = inner;

    let items: Vec<ListItem> = {
        let tasks = state.visible_tasks();
        if tasks.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!(" {EMPTY_MESSAGE}"),
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )));
            f.render_widget(empty, inner);
            return;
        }

        tasks
            .iter()
            .enumerate()
            .map(|(i, task)| task_row(state, task, i, inner.width as usize))
            .collect()
    };

    let highlight = if state.focus == Focus::Tasks {
        Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme.selection_bg)
    };
    let list = List::new(items).highlight_style(highlight);
    f.render_stateful_widget(list, inner, &mut state.list_state);
}

fn task_row(state: &AppState, task: &Task, index: usize, width: usize) -> ListItem<'static> {
    let theme = &state.theme;

    let fixed = display_width(DRAG_HANDLE) + task.checkbox().len() + 1 + DELETE_COLUMNS as usize;
    let mut due = task
        .due_date
        .map(|d| format!("  Due: {}", d.format(&state.date_format)))
        .unwrap_or_default();
    // The delete marker must stay in the last columns, where clicks expect it
    if fixed + display_width(&due) + MIN_TITLE_WIDTH > width {
        due.clear();
    }
    let title_room = width.saturating_sub(fixed + display_width(&due));
    let title = truncate_to_width(&task.title, title_room);
    let padding = width.saturating_sub(fixed + display_width(&title) + display_width(&due));

    let title_style = if task.completed {
        Style::default()
            .fg(theme.completed)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(DRAG_HANDLE, Style::default().fg(theme.muted)),
        Span::raw(task.checkbox()),
        Span::raw(" "),
        Span::styled(title, title_style),
        Span::styled(due, Style::default().fg(theme.due_date)),
        Span::raw(" ".repeat(padding)),
        Span::styled(" ✕", Style::default().fg(theme.delete)),
    ]);

    let row_style = match state.drag {
        Some(DragState { hover, .. }) if hover == index => Style::default().bg(theme.drop_target_bg),
        Some(DragState { from, .. }) if from == index => Style::default().fg(theme.muted),
        _ => Style::default(),
    };
    ListItem::new(line).style(row_style)
}
