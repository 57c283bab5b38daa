//! UI module for rendering the TUI

mod components;
mod forms;
mod icons;
mod layout;

use crate::app::App;
use components::render_error_dialog;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.state.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.surface)),
        area,
    );

    let shell = layout::create_layout(area);
    layout::draw_header(frame, shell.header, theme);
    layout::draw_tabs(frame, shell.tabs, app.state.active_tab, theme);
    forms::draw_form(frame, shell.body, &app.form, theme);
    layout::draw_status_bar(frame, shell.status, app);

    if let Some(error) = app.state.current_error() {
        let queued = app.state.pending_errors().saturating_sub(1);
        render_error_dialog(frame, error, queued, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::FormKind;
    use crate::submit::MockSubmitAction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn app() -> App {
        App::with_action(TuiConfig::default(), None, Arc::new(MockSubmitAction::new()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_screen_renders() {
        let out = render(&app());
        assert!(out.contains("FormsKit"));
        assert!(out.contains("F1 Sign In"));
        assert!(out.contains("Email address"));
        assert!(out.contains("[ ] Remember me"));
        assert!(out.contains("Forgot password?"));
    }

    #[test]
    fn test_every_tab_renders_its_title() {
        let mut app = app();
        for kind in FormKind::ALL {
            app.select_tab(kind);
            let out = render(&app);
            assert!(out.contains(kind.title()), "missing title for {kind:?}");
        }
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "hunter2");
        let out = render(&app);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("•••••••"));
    }

    #[test]
    fn test_validation_errors_render() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let out = render(&app);
        assert!(out.contains("Email is required."));
        assert!(out.contains("Password is required."));
        assert!(out.contains("Please fix the highlighted fields."));
    }

    #[test]
    fn test_strength_meter_appears_with_password() {
        let mut app = app();
        app.select_tab(FormKind::Register);
        assert!(!render(&app).contains("Too short"));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        assert!(render(&app).contains("Too short"));
    }

    #[test]
    fn test_message_counter() {
        let mut app = app();
        app.select_tab(FormKind::Contact);
        assert!(render(&app).contains("500 / 500"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = app();
        app.push_error("Submission failed: offline");
        app.push_error("second");
        let out = render(&app);
        assert!(out.contains("Submission failed: offline"));
        assert!(out.contains("(1 more)"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let mut app = app();
        app.push_error("a fairly long error message that needs wrapping");
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        app.select_tab(FormKind::Contact);
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
