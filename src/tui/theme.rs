//! Theme system for TUI colors and styles
//!
//! Color choices stay consistent with the CLI output (display module).

use iocraft::prelude::Color;

use crate::types::MediaKind;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Record state colors (consistent with CLI badges)
    pub published: Color,
    pub draft: Color,
    pub featured: Color,

    // Media kind colors
    pub kind_image: Color,
    pub kind_video: Color,
    pub kind_other: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            published: Color::Green,
            draft: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            featured: Color::Yellow,

            kind_image: Color::Cyan,
            kind_video: Color::Magenta,
            kind_other: Color::White,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a publish state
    pub fn publish_color(&self, is_published: bool) -> Color {
        if is_published {
            self.published
        } else {
            self.draft
        }
    }

    /// Get the color for a media kind
    pub fn kind_color(&self, kind: &MediaKind) -> Color {
        match kind {
            MediaKind::Image => self.kind_image,
            MediaKind::Video => self.kind_video,
            MediaKind::Other(_) => self.kind_other,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
