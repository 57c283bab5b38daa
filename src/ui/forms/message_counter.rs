//! Remaining-characters counter under the contact message

use crate::state::{ThemeContext, LOW_REMAINING_THRESHOLD, MAX_MESSAGE_LEN};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn counter_line(remaining: usize, theme: &ThemeContext) -> Line<'static> {
    let style = if remaining < LOW_REMAINING_THRESHOLD {
        Style::default()
            .fg(theme.palette.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.muted)
    };
    Line::from(Span::styled(
        format!("{remaining} / {MAX_MESSAGE_LEN} "),
        style,
    ))
    .alignment(Alignment::Right)
}
