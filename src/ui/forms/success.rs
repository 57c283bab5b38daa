//! Confirmation view shown after a successful submission

use crate::state::{Confirmation, FormKind, Segment, ThemeContext};
use crate::ui::icons::Icon;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn confirmation_lines(
    kind: FormKind,
    confirmation: &Confirmation,
    theme: &ThemeContext,
) -> Vec<Line<'static>> {
    let palette = &theme.palette;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("( {} )", Icon::for_success(kind).glyph()),
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            confirmation.title,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];

    let message: Vec<Span> = confirmation
        .message
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Span::styled(text.clone(), Style::default().fg(palette.muted)),
            Segment::Strong(text) => Span::styled(
                text.clone(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        })
        .collect();
    lines.push(Line::from(message).centered());

    if !confirmation.tips.is_empty() {
        lines.push(Line::from(""));
        for tip in confirmation.tips {
            lines.push(Line::from(vec![
                Span::styled(" • ", Style::default().fg(palette.primary)),
                Span::styled(*tip, Style::default().fg(palette.muted)),
            ]));
        }
    }
    lines
}
