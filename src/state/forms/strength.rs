//! Advisory password strength scoring for the register form

use ratatui::style::Color;

/// Strength of a password on a 0-4 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: &'static str,
    pub color: Color,
}

/// Number of segments in the strength bar
pub const STRENGTH_SEGMENTS: u8 = 4;

const LEVELS: [(&str, Color); 5] = [
    ("Too short", Color::Rgb(0xef, 0x44, 0x44)),
    ("Weak", Color::Rgb(0xf9, 0x73, 0x16)),
    ("Fair", Color::Rgb(0xea, 0xb3, 0x08)),
    ("Good", Color::Rgb(0x3b, 0x82, 0xf6)),
    ("Strong", Color::Rgb(0x10, 0xb9, 0x81)),
];

impl PasswordStrength {
    /// Score a password. Empty passwords have no strength to show.
    pub fn of(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        let criteria = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let score = criteria.iter().filter(|met| **met).count() as u8;
        let (label, color) = LEVELS[score as usize];
        Some(Self {
            score,
            label,
            color,
        })
    }

    /// Whether segment `index` (1-based) of the bar is lit
    pub fn lights_segment(&self, index: u8) -> bool {
        index <= self.score
    }
}
