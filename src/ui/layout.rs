//! Shell layout: header, tab bar, body and status bar

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT, TABS_SHORTCUT, THEME_SHORTCUT};
use crate::state::{FormKind, Theme, ThemeContext};
use crate::ui::icons::Icon;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Areas of the shell
pub struct ShellLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn create_layout(area: Rect) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Tabs + gap
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ShellLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Logo on the left, theme dots on the right
pub fn draw_header(frame: &mut Frame, area: Rect, theme: &ThemeContext) {
    let palette = &theme.palette;
    let logo = Line::from(vec![
        Span::styled(
            format!(" {} ", Icon::Arrow.glyph()),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        ),
        Span::styled(
            " FormsKit",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" UI Kit", Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(logo), area);
    frame.render_widget(Paragraph::new(theme_dots(theme.theme)).alignment(Alignment::Right), area);
}

fn theme_dots(active: Theme) -> Line<'static> {
    let mut spans = vec![Span::raw("Theme ")];
    for theme in Theme::ALL {
        let (dot, style) = if theme == active {
            ("◉", Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD))
        } else {
            ("●", Style::default().fg(theme.accent()))
        };
        spans.push(Span::styled(dot, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(format!("{} ", active.label())));
    Line::from(spans)
}

pub fn draw_tabs(frame: &mut Frame, area: Rect, active: FormKind, theme: &ThemeContext) {
    let titles = FormKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("F{} {}", i + 1, kind.tab_label()));
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(theme.palette.muted))
        .highlight_style(
            Style::default()
                .fg(theme.palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

/// Key help or the current notice, with the copyright on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.state.theme.palette;
    let left = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(palette.warning),
        )),
        None => Line::from(Span::styled(
            format!(
                " Tab: next | {SUBMIT_SHORTCUT}: submit | {REVEAL_SHORTCUT}: show password | \
                 {TABS_SHORTCUT}: forms | {THEME_SHORTCUT}: theme | Ctrl+C: quit"
            ),
            Style::default().fg(palette.muted),
        )),
    };
    frame.render_widget(Paragraph::new(left), area);

    let year = chrono::Local::now().year();
    let copyright = Span::styled(
        format!("FormsKit UI Kit ©{year} "),
        Style::default().fg(palette.border),
    );
    frame.render_widget(Paragraph::new(copyright).alignment(Alignment::Right), area);
}
