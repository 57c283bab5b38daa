//! Form rendering module
//!
//! - `field_renderer`: a single field box with its error line
//! - `screen`: the generic card every form is drawn in
//! - `strength_meter`, `message_counter`: per-form extras under a field
//! - `success`: the confirmation view

mod field_renderer;
mod message_counter;
mod screen;
mod strength_meter;
mod success;

use crate::state::{ContactField, FormState, RegisterField, ThemeContext};
use ratatui::{layout::Rect, Frame};

/// Draw the mounted form
pub fn draw_form(frame: &mut Frame, area: Rect, form: &FormState, theme: &ThemeContext) {
    match form {
        FormState::Login(screen) => screen::draw_screen(frame, area, screen, theme, |_, _| None),
        FormState::Register(screen) => {
            screen::draw_screen(frame, area, screen, theme, |field, values| {
                if field == RegisterField::Password {
                    strength_meter::strength_line(values.strength(), theme)
                } else {
                    None
                }
            })
        }
        FormState::Contact(screen) => {
            screen::draw_screen(frame, area, screen, theme, |field, values| {
                (field == ContactField::Message)
                    .then(|| message_counter::counter_line(values.remaining(), theme))
            })
        }
        FormState::PasswordReset(screen) => {
            screen::draw_screen(frame, area, screen, theme, |_, _| None)
        }
    }
}
