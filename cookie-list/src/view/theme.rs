//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha palette plus the compatibility accent set
//!
//! Colors are from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const SELECTED_LINE: Color = Color::Rgb(88, 91, 112); // Surface2
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow
pub const BLUE: Color = Color::Rgb(0, 162, 223); // compatibility accent

/// Accent set, switched by the `compatibility` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub border: Color,
    pub secondary: Color,
}

impl Palette {
    pub const fn for_mode(compatibility: bool) -> Self {
        if compatibility {
            Self {
                accent: BLUE,
                border: BLUE,
                secondary: COMMENT,
            }
        } else {
            Self {
                accent: PURPLE,
                border: COMMENT,
                secondary: COMMENT,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(BACKGROUND).fg(FOREGROUND)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn cookie_name(&self) -> Style {
        Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
    }

    pub fn location(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn selected_row(&self) -> Style {
        Style::default().bg(SELECTED_LINE)
    }

    pub fn cursor_row(&self) -> Style {
        Style::default().bg(CURRENT_LINE)
    }

    pub fn checkbox(&self, checked: bool) -> Style {
        if checked {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COMMENT)
        }
    }

    pub fn action_button(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn counter(&self) -> Style {
        Style::default().fg(YELLOW)
    }

    pub fn empty_info(&self) -> Style {
        Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
    }

    pub fn search(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(CYAN)
        } else {
            Style::default().fg(COMMENT)
        }
    }

    pub fn menu_item(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .bg(CURRENT_LINE)
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FOREGROUND)
        }
    }

    pub fn delete_item(&self) -> Style {
        Style::default().fg(RED)
    }

    pub fn export_item(&self) -> Style {
        Style::default().fg(GREEN)
    }
}
