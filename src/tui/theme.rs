// src/tui/theme.rs — Light and dark palettes for the portal screens.

use ratatui::style::{Color, Modifier, Style};

use crate::portal::theme::ThemeMode;

/// Styles for one theme mode. Cheap to build; make one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const MOSDAC_BLUE: Color = Color::Rgb(37, 99, 235);
    pub const SKY: Color = Color::Rgb(96, 165, 250);
    pub const CYAN: Color = Color::Rgb(34, 211, 238);
    pub const GREEN: Color = Color::Rgb(34, 197, 94);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const RED: Color = Color::Rgb(239, 68, 68);

    // ── Neutrals ────────────────────────────────────────────────
    pub const GRAY_50: Color = Color::Rgb(249, 250, 251);
    pub const GRAY_200: Color = Color::Rgb(229, 231, 235);
    pub const GRAY_400: Color = Color::Rgb(156, 163, 175);
    pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
    pub const GRAY_600: Color = Color::Rgb(75, 85, 99);
    pub const GRAY_700: Color = Color::Rgb(55, 65, 81);
    pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
    pub const GRAY_900: Color = Color::Rgb(17, 24, 39);

    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn pick(&self, light: Color, dark: Color) -> Color {
        match self.mode {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        }
    }

    /// Parse a `#RRGGBB` data color, falling back to gray.
    pub fn token(hex: &str) -> Color {
        hex.parse::<Color>().unwrap_or(Theme::GRAY_500)
    }

    // ── Semantic styles ──────────────────────────────────────────

    /// Whole-screen background.
    pub fn base(&self) -> Style {
        Style::default()
            .bg(self.pick(Theme::GRAY_50, Theme::GRAY_900))
            .fg(self.pick(Theme::GRAY_800, Theme::GRAY_50))
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.pick(Theme::GRAY_500, Theme::GRAY_400))
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.pick(Theme::GRAY_800, Theme::GRAY_50))
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.pick(Theme::GRAY_200, Theme::GRAY_700))
    }

    pub fn border_focus(&self) -> Style {
        Style::default().fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.pick(Theme::GRAY_800, Theme::GRAY_200))
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.pick(Theme::GRAY_500, Theme::GRAY_400))
    }

    pub fn success(&self) -> Style {
        Style::default().fg(Theme::GREEN)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Theme::AMBER)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Theme::RED)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
    }

    /// Big headline numbers.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Theme::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn table_selected(&self) -> Style {
        Style::default()
            .bg(self.pick(Theme::GRAY_200, Theme::GRAY_700))
            .fg(self.pick(Theme::GRAY_900, Theme::GRAY_50))
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
    }

    pub fn key_desc(&self) -> Style {
        self.text_dim()
    }

    /// Chat bubble text for the user's own messages.
    pub fn user_message(&self) -> Style {
        Style::default().fg(self.pick(Theme::MOSDAC_BLUE, Theme::SKY))
    }

    pub fn bot_message(&self) -> Style {
        self.text()
    }

    /// Color for chart grid lines and graph links.
    pub fn grid(&self) -> Color {
        self.pick(Theme::GRAY_200, Theme::GRAY_600)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
