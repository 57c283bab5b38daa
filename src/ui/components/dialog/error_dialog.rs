//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::ThemeContext;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen.
///
/// `queued` counts the errors still waiting behind this one.
pub fn render_error_dialog(
    frame: &mut Frame,
    error_message: &str,
    queued: usize,
    theme: &ThemeContext,
) {
    let key_style = Style::default()
        .fg(theme.palette.primary)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];
    if queued > 0 {
        hint.push(Span::styled(
            format!(" ({queued} more)"),
            Style::default().fg(theme.palette.muted),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: theme.palette.error,
            border_color: theme.palette.error,
            background: theme.palette.surface,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
