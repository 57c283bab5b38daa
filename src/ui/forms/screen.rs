//! Generic form card: header, fields, actions and confirmation

use super::field_renderer::{draw_field, draw_field_error, field_height, FieldView};
use super::success::confirmation_lines;
use crate::state::{
    spinner_frame, submit_progress, FieldKey, FormModel, FormScreen, ScreenAction, ThemeContext,
};
use crate::ui::components::{render_button, render_link, BUTTON_HEIGHT};
use crate::ui::icons::Icon;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};

/// Widest the card gets
pub const CARD_WIDTH: u16 = 64;

/// One vertical slot of the card
enum Row<F> {
    Subtitle,
    Banner(String),
    Field(F),
    FieldError(F),
    Extra(Line<'static>),
    Confirmation(Vec<Line<'static>>),
    Action(ScreenAction),
    Progress,
    Spacer,
}

/// Draw `screen` as a centered card.
///
/// `extra` may add one line under a field (strength meter, counter).
pub fn draw_screen<V, E>(
    frame: &mut Frame,
    area: Rect,
    screen: &FormScreen<V>,
    theme: &ThemeContext,
    extra: E,
) where
    V: FormModel,
    E: Fn(V::Field, &V) -> Option<Line<'static>>,
{
    let rows = build_rows(screen, theme, &extra);
    let inner_width = area.width.min(CARD_WIDTH).saturating_sub(4);
    let heights: Vec<u16> = rows.iter().map(|row| row_height(row, inner_width)).collect();
    let card = card_area(area, heights.iter().sum::<u16>() + 2);

    let kind = V::KIND;
    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            format!(" {} {} ", Icon::for_form(kind).glyph(), kind.title()),
            Style::default()
                .fg(theme.palette.primary)
                .add_modifier(Modifier::BOLD),
        )]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.palette.primary))
        .style(Style::default().bg(theme.palette.surface));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints(constraints)
        .split(inner);

    for (row, chunk) in rows.into_iter().zip(chunks.iter()) {
        draw_row(frame, *chunk, row, screen, theme);
    }
}

fn build_rows<V, E>(screen: &FormScreen<V>, theme: &ThemeContext, extra: &E) -> Vec<Row<V::Field>>
where
    V: FormModel,
    E: Fn(V::Field, &V) -> Option<Line<'static>>,
{
    let mut rows = Vec::new();

    if let Some(confirmation) = screen.phase().confirmation() {
        rows.push(Row::Confirmation(confirmation_lines(
            V::KIND,
            confirmation,
            theme,
        )));
        rows.push(Row::Spacer);
    } else {
        rows.push(Row::Subtitle);
        rows.push(Row::Spacer);
        if let Some(message) = screen.submit_error() {
            rows.push(Row::Banner(message.to_string()));
            rows.push(Row::Spacer);
        }
        for field in V::Field::ALL {
            rows.push(Row::Field(*field));
            if !field.kind().is_checkbox() {
                rows.push(Row::FieldError(*field));
            }
            if let Some(line) = extra(*field, screen.values()) {
                rows.push(Row::Extra(line));
            }
        }
        rows.push(Row::Spacer);
    }

    for action in screen.actions() {
        rows.push(Row::Action(*action));
        if *action == ScreenAction::Submit && screen.phase().is_submitting() {
            rows.push(Row::Progress);
        }
    }
    rows
}

fn row_height<F: FieldKey>(row: &Row<F>, width: u16) -> u16 {
    match row {
        Row::Subtitle => 2,
        Row::Field(field) => field_height(field.kind()),
        Row::Confirmation(lines) => {
            let width = usize::from(width.max(1));
            lines
                .iter()
                .map(|line| line.width().div_ceil(width).max(1) as u16)
                .sum()
        }
        Row::Action(action) if action.is_button() => BUTTON_HEIGHT,
        Row::Banner(_)
        | Row::FieldError(_)
        | Row::Extra(_)
        | Row::Action(_)
        | Row::Progress
        | Row::Spacer => 1,
    }
}

/// Center a card of `height` rows in `area`
fn card_area(area: Rect, height: u16) -> Rect {
    let width = area.width.min(CARD_WIDTH);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_row<V: FormModel>(
    frame: &mut Frame,
    area: Rect,
    row: Row<V::Field>,
    screen: &FormScreen<V>,
    theme: &ThemeContext,
) {
    let palette = &theme.palette;
    match row {
        Row::Subtitle => {
            let subtitle = Paragraph::new(Span::styled(
                V::KIND.subtitle(),
                Style::default().fg(palette.muted),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(subtitle, area);
        }
        Row::Banner(message) => {
            let banner = Paragraph::new(Line::from(Span::styled(
                format!("⚠ {message}"),
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(banner, area);
        }
        Row::Field(field) => {
            let view = FieldView {
                field,
                value: screen.values().value(field),
                is_active: screen.focused_field() == Some(field),
                is_revealed: screen.is_revealed(field),
                has_error: screen.session().error(field).is_some(),
                is_locked: screen.phase().is_submitting(),
            };
            draw_field(frame, area, &view, theme);
        }
        Row::FieldError(field) => {
            draw_field_error(frame, area, screen.session().error(field), theme);
        }
        Row::Extra(line) => frame.render_widget(Paragraph::new(line), area),
        Row::Confirmation(lines) => {
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        }
        Row::Action(action) => draw_action(frame, area, action, screen, theme),
        Row::Progress => {
            let ratio = screen
                .phase()
                .elapsed()
                .map(|elapsed| submit_progress(elapsed, V::KIND.simulated_delay()))
                .unwrap_or(0.0);
            let gauge = LineGauge::default()
                .ratio(f64::from(ratio))
                .label("")
                .line_set(symbols::line::THICK)
                .filled_style(Style::default().fg(palette.primary))
                .unfilled_style(Style::default().fg(palette.border));
            frame.render_widget(gauge, area);
        }
        Row::Spacer => {}
    }
}

fn draw_action<V: FormModel>(
    frame: &mut Frame,
    area: Rect,
    action: ScreenAction,
    screen: &FormScreen<V>,
    theme: &ThemeContext,
) {
    let kind = V::KIND;
    let is_selected = screen.focused_action() == Some(action);
    let label = action.label(kind);

    match action {
        ScreenAction::Submit => match screen.phase().elapsed() {
            Some(elapsed) => {
                let content = format!("{} {}", spinner_frame(elapsed), kind.busy_label());
                render_button(frame, area, &content, false, false, theme);
            }
            None => {
                let content = format!("{label} {}", Icon::for_submit(kind).glyph());
                render_button(frame, area, &content, is_selected, true, theme);
            }
        },
        ScreenAction::BackToLogin => {
            let content = format!("{} {label}", Icon::Back.glyph());
            render_button(frame, area, &content, is_selected, true, theme);
        }
        ScreenAction::BackToSignIn => {
            let content = format!("{} {label}", Icon::Back.glyph());
            render_link(frame, area, &content, is_selected, theme);
        }
        ScreenAction::Retry => render_button(frame, area, label, is_selected, true, theme),
        ScreenAction::ForgotPassword | ScreenAction::SignIn => {
            render_link(frame, area, label, is_selected, theme)
        }
    }
}
