//! Button and link components for TUI

use crate::state::ThemeContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered, centered button
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    theme: &ThemeContext,
) {
    let palette = &theme.palette;
    let border_style = if is_selected {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.border)
    };

    let text_style = if !is_enabled {
        Style::default().fg(palette.muted)
    } else if is_selected {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {content} "), text_style)))
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a one-line text link
pub fn render_link(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    theme: &ThemeContext,
) {
    let mut style = Style::default()
        .fg(theme.palette.primary)
        .add_modifier(Modifier::UNDERLINED);
    if is_selected {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
