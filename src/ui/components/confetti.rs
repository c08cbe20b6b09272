use crate::app::AppState;
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    render_at(f, state, area, Instant::now());
}

/// Paints the running burst straight into the buffer, on top of whatever is there.
pub fn render_at(f: &mut Frame, state: &AppState, area: Rect, now: Instant) {
    let cells = state.celebration.cells(now, area.width, area.height);
    let buf = f.buffer_mut();
    for cell in cells {
        if let Some(target) = buf.cell_mut((area.x + cell.column, area.y + cell.row)) {
            target
                .set_char(cell.glyph)
                .set_fg(state.theme.confetti_color(cell.palette_index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::test_helpers::seeded_state;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn test_nothing_drawn_without_a_burst() {
        let state = seeded_state();
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| render_at(f, &state, f.area(), Instant::now()))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }

    #[test]
    fn test_particles_land_on_their_cells() {
        let mut state = seeded_state();
        let start = Instant::now();
        state
            .celebration
            .trigger_with(start, &mut StdRng::seed_from_u64(3));
        let at = start + Duration::from_millis(900);

        let expected: HashSet<(u16, u16)> = state
            .celebration
            .cells(at, 30, 10)
            .iter()
            .map(|c| (c.column, c.row))
            .collect();
        assert!(!expected.is_empty());

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal.draw(|f| render_at(f, &state, f.area(), at)).unwrap();

        let buf = terminal.backend().buffer();
        for y in 0..10u16 {
            for x in 0..30u16 {
                let painted = buf[(x, y)].symbol() != " ";
                assert_eq!(painted, expected.contains(&(x, y)), "cell ({x}, {y})");
            }
        }
    }
}
