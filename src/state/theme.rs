//! Color themes and the context handed to renderers

use ratatui::style::Color;

/// Selectable color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Blue,
        Theme::Green,
        Theme::Purple,
        Theme::Red,
        Theme::Orange,
        Theme::Dark,
    ];

    /// Name stored in the config file
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Dark => "Dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.name() == name)
    }

    pub fn next(self) -> Self {
        match self {
            Self::Blue => Self::Green,
            Self::Green => Self::Purple,
            Self::Purple => Self::Red,
            Self::Red => Self::Orange,
            Self::Orange => Self::Dark,
            Self::Dark => Self::Blue,
        }
    }

    /// Accent color, also used for the theme dot in the header
    pub fn accent(self) -> Color {
        match self {
            Self::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
            Self::Green => Color::Rgb(0x10, 0xb9, 0x81),
            Self::Purple => Color::Rgb(0x8b, 0x5c, 0xf6),
            Self::Red => Color::Rgb(0xef, 0x44, 0x44),
            Self::Orange => Color::Rgb(0xf9, 0x73, 0x16),
            Self::Dark => Color::Rgb(0x63, 0x66, 0xf1),
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub surface: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let base = Self {
            primary: theme.accent(),
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            surface: Color::Reset,
            error: Color::Rgb(0xef, 0x44, 0x44),
            success: Color::Rgb(0x10, 0xb9, 0x81),
            warning: Color::Rgb(0xf9, 0x73, 0x16),
        };
        match theme {
            Theme::Dark => Self {
                surface: Color::Rgb(0x11, 0x18, 0x27),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
                border: Color::Rgb(0x37, 0x41, 0x51),
                ..base
            },
            // Red accents would read as errors
            Theme::Red => Self {
                error: Color::Rgb(0xfb, 0xbf, 0x24),
                ..base
            },
            _ => base,
        }
    }
}

/// The active theme, passed explicitly to every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub palette: Palette,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
        }
    }

    /// Switch to the next theme and return it
    pub fn cycle(&mut self) -> Theme {
        *self = Self::new(self.theme.next());
        self.theme
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blue() {
        assert_eq!(Theme::default(), Theme::Blue);
        assert_eq!(ThemeContext::default().theme, Theme::Blue);
    }

    #[test]
    fn test_next_visits_every_theme() {
        let mut theme = Theme::Blue;
        for expected in Theme::ALL.iter().skip(1) {
            theme = theme.next();
            assert_eq!(theme, *expected);
        }
        assert_eq!(theme.next(), Theme::Blue);
    }

    #[test]
    fn test_from_name() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(Theme::from_name("Blue"), None);
        assert_eq!(Theme::from_name("teal"), None);
    }

    #[test]
    fn test_cycle_updates_palette() {
        let mut ctx = ThemeContext::default();
        assert_eq!(ctx.cycle(), Theme::Green);
        assert_eq!(ctx.palette.primary, Theme::Green.accent());
    }

    #[test]
    fn test_dark_palette_has_surface() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_ne!(palette.surface, Color::Reset);
        assert_eq!(Palette::for_theme(Theme::Blue).surface, Color::Reset);
    }

    #[test]
    fn test_red_theme_keeps_errors_distinct() {
        let palette = Palette::for_theme(Theme::Red);
        assert_ne!(palette.error, palette.primary);
    }
}
