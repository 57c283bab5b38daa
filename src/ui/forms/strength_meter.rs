//! Password strength bar for the register form

use crate::state::{PasswordStrength, ThemeContext, STRENGTH_SEGMENTS};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const SEGMENT: &str = "▬▬▬▬";

/// Four segments lit up to the score, then the label. None hides the meter.
pub fn strength_line(strength: Option<PasswordStrength>, theme: &ThemeContext) -> Option<Line<'static>> {
    let strength = strength?;
    let mut spans = vec![Span::raw(" ")];
    for index in 1..=STRENGTH_SEGMENTS {
        let color = if strength.lights_segment(index) {
            strength.color
        } else {
            theme.palette.border
        };
        spans.push(Span::styled(SEGMENT, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(strength.label, Style::default().fg(strength.color)));
    Some(Line::from(spans))
}
