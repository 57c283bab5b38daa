//! Field rendering utilities for forms

use crate::state::{FieldKey, FieldKind, FieldValue, ThemeContext};
use crate::ui::icons::Icon;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";
const MASK: char = '•';

/// Rows a field occupies, without its helper lines
pub fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Checkbox => 1,
        FieldKind::Multiline => 6,
        FieldKind::Text | FieldKind::Email | FieldKind::Secret => 3,
    }
}

/// Everything needed to draw one field
pub struct FieldView<'a, F: FieldKey> {
    pub field: F,
    pub value: FieldValue<'a>,
    pub is_active: bool,
    pub is_revealed: bool,
    pub has_error: bool,
    pub is_locked: bool,
}

/// Text shown in the box: masked for hidden secrets
fn display_text<F: FieldKey>(view: &FieldView<'_, F>) -> String {
    let text = view.value.as_text();
    if view.field.kind().is_secret() && !view.is_revealed {
        text.chars().map(|_| MASK).collect()
    } else {
        text.to_string()
    }
}

pub fn draw_field<F: FieldKey>(
    frame: &mut Frame,
    area: Rect,
    view: &FieldView<'_, F>,
    theme: &ThemeContext,
) {
    let palette = &theme.palette;
    let kind = view.field.kind();

    if kind.is_checkbox() {
        let mark = if view.value.is_checked() { "[x]" } else { "[ ]" };
        let style = if view.is_active {
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let line = Line::from(vec![
            Span::styled(mark, style),
            Span::raw(" "),
            Span::styled(view.field.label(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let border_color = if view.has_error {
        palette.error
    } else if view.is_active {
        palette.primary
    } else {
        palette.border
    };
    let text_style = if view.is_locked {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.text)
    };
    let show_cursor = view.is_active && !view.is_locked;
    let cursor = Span::styled(
        if show_cursor { CURSOR } else { "" },
        Style::default().fg(palette.primary),
    );

    let display = display_text(view);
    let content = if kind.is_multiline() {
        let mut lines: Vec<Line> = display
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(display, text_style), cursor]))
    };

    let title = match Icon::for_field(kind) {
        Some(icon) => format!(" {} {} ", icon.glyph(), view.field.label()),
        None => format!(" {} ", view.field.label()),
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if kind.is_secret() {
        let icon = Icon::for_reveal(view.is_revealed);
        block = block.title(
            Line::from(Span::styled(
                format!(" {} ", icon.glyph()),
                Style::default().fg(palette.muted),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the error line under a field, or nothing
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>, theme: &ThemeContext) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(theme.palette.error),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoginField, RegisterField};

    fn view<'a, F: FieldKey>(field: F, text: &'a str, revealed: bool) -> FieldView<'a, F> {
        FieldView {
            field,
            value: FieldValue::Text(text),
            is_active: false,
            is_revealed: revealed,
            has_error: false,
            is_locked: false,
        }
    }

    #[test]
    fn test_secret_is_masked_per_char() {
        let v = view(RegisterField::Password, "pässwd", false);
        assert_eq!(display_text(&v), "••••••");
    }

    #[test]
    fn test_revealed_secret_is_plain() {
        let v = view(LoginField::Password, "hunter2", true);
        assert_eq!(display_text(&v), "hunter2");
    }

    #[test]
    fn test_plain_field_is_not_masked() {
        let v = view(LoginField::Email, "a@b.c", false);
        assert_eq!(display_text(&v), "a@b.c");
    }

    #[test]
    fn test_heights() {
        assert_eq!(field_height(FieldKind::Checkbox), 1);
        assert_eq!(field_height(FieldKind::Email), 3);
        assert_eq!(field_height(FieldKind::Multiline), 6);
    }
}
