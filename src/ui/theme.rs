use ratatui::style::Color;

/// Notepad palette. The light variant is paper and ink; the dark variant
/// keeps the same accents on a dark page.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub sidebar_bg: Color,
    pub muted: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub completed: Color,
    pub due_date: Color,
    pub delete: Color,
    pub drop_target_bg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub notification_bg: Color,
    pub notification_fg: Color,
    pub confetti: [Color; 5],
}

const CONFETTI: [Color; 5] = [
    Color::Rgb(229, 216, 197),
    Color::Rgb(168, 159, 145),
    Color::Rgb(245, 245, 220),
    Color::Rgb(58, 58, 58),
    Color::Rgb(207, 207, 192),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 220),
            foreground: Color::Rgb(58, 58, 58),
            sidebar_bg: Color::Rgb(229, 216, 197),
            muted: Color::Rgb(120, 112, 100),
            border: Color::Rgb(168, 159, 145),
            selection_bg: Color::Rgb(207, 207, 192),
            completed: Color::Rgb(150, 143, 130),
            due_date: Color::Rgb(120, 112, 100),
            delete: Color::Rgb(200, 50, 50),
            drop_target_bg: Color::Rgb(190, 215, 230),
            status_bar_bg: Color::Rgb(168, 159, 145),
            status_bar_fg: Color::Rgb(30, 30, 30),
            notification_bg: Color::Rgb(0, 100, 0),
            notification_fg: Color::White,
            confetti: CONFETTI,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 28),
            foreground: Color::Rgb(229, 216, 197),
            sidebar_bg: Color::Rgb(45, 43, 40),
            muted: Color::Rgb(168, 159, 145),
            border: Color::Rgb(90, 86, 80),
            selection_bg: Color::Rgb(70, 66, 60),
            completed: Color::Rgb(110, 105, 98),
            due_date: Color::Rgb(168, 159, 145),
            delete: Color::Rgb(255, 100, 100),
            drop_target_bg: Color::Rgb(40, 70, 90),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
            notification_bg: Color::Rgb(0, 100, 0),
            notification_fg: Color::White,
            confetti: CONFETTI,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn confetti_color(&self, palette_index: usize) -> Color {
        self.confetti[palette_index % self.confetti.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn test_confetti_color_wraps() {
        let theme = Theme::light();
        assert_eq!(theme.confetti_color(0), theme.confetti_color(5));
    }
}
