//! Application state and key handling

use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::state::{
    AppState, FieldKind, FormKind, FormState, OutcomeApplied, ScreenAction, SubmitAttempt,
};
use crate::submit::{SimulatedLatency, SubmitAction, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Shell state: theme, active tab, error queue
    pub state: AppState,
    /// The mounted form
    pub form: FormState,
    submit_action: Arc<dyn SubmitAction>,
    outcomes_tx: UnboundedSender<SubmitOutcome>,
    outcomes_rx: UnboundedReceiver<SubmitOutcome>,
    config: TuiConfig,
    /// Where theme changes are saved; None disables saving
    config_path: Option<PathBuf>,
    quit: bool,
}

impl App {
    /// Create an app that submits with simulated latency
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> Self {
        let action = match config.simulated_delay() {
            Some(delay) => SimulatedLatency::with_delay(delay),
            None => SimulatedLatency::new(),
        };
        Self::with_action(config, config_path, Arc::new(action))
    }

    pub fn with_action(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        submit_action: Arc<dyn SubmitAction>,
    ) -> Self {
        let active_tab = config.initial_tab();
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.theme(), active_tab),
            form: FormState::mount(active_tab),
            submit_action,
            outcomes_tx,
            outcomes_rx,
            config,
            config_path,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is in flight (drives the redraw rate)
    pub fn is_submitting(&self) -> bool {
        self.form.phase().is_submitting()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::F(n @ 1..=4) => {
                self.select_tab(FormKind::ALL[usize::from(n) - 1]);
                return Ok(());
            }
            KeyCode::F(5) => {
                self.cycle_theme();
                return Ok(());
            }
            _ => {}
        }

        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => {
                    self.form.toggle_reveal();
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => self.handle_enter()?,
            KeyCode::Backspace => self.form.backspace()?,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.form.input_char(c)?
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_enter(&mut self) -> Result<()> {
        if let Some(action) = self.form.focused_action() {
            self.activate(action);
            return Ok(());
        }
        match self.form.focused_kind() {
            Some(FieldKind::Multiline) => self.form.input_char('\n')?,
            Some(FieldKind::Checkbox) => self.form.toggle_checkbox()?,
            _ => self.submit(),
        }
        Ok(())
    }

    /// Run a focused button or link
    pub fn activate(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Submit => self.submit(),
            ScreenAction::Retry => {
                self.form.retry();
            }
            _ => {
                if let Some(target) = action.target() {
                    self.select_tab(target);
                }
            }
        }
    }

    fn submit(&mut self) {
        let attempt = self
            .form
            .submit(Arc::clone(&self.submit_action), &self.outcomes_tx);
        if attempt == SubmitAttempt::Invalid {
            self.state.status_message = Some("Please fix the highlighted fields.".to_string());
        }
    }

    /// Mount the form for `kind`, discarding the current one and its pending submission
    pub fn select_tab(&mut self, kind: FormKind) {
        if self.state.active_tab == kind {
            return;
        }
        tracing::info!(from = self.state.active_tab.name(), to = kind.name(), "switching tab");
        if self.form.phase().is_submitting() {
            tracing::debug!(
                form = self.form.kind().name(),
                session = %self.form.id(),
                "cancelling pending submission"
            );
        }
        self.state.active_tab = kind;
        self.form = FormState::mount(kind);
    }

    /// Move to the next theme and persist the choice
    pub fn cycle_theme(&mut self) {
        let theme = self.state.theme.cycle();
        tracing::info!(theme = theme.name(), "theme changed");
        self.config.set_theme(theme);

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!(error = %e, path = %path.display(), "failed to save config");
                self.state.status_message = Some(format!("Could not save theme: {e}"));
            }
        }
    }

    /// Apply every submit completion that has arrived since the last call
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        if let OutcomeApplied::Failed(message) = self.form.apply_outcome(outcome) {
            self.push_error(format!("Submission failed: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SubmitPhase, Theme};
    use crate::submit::MockSubmitAction;
    use std::time::Duration;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(action: MockSubmitAction) -> App {
        App::with_action(TuiConfig::default(), None, Arc::new(action))
    }

    fn idle_app() -> App {
        app_with(MockSubmitAction::new())
    }

    fn fill_login(app: &mut App) {
        type_text(app, "u@d.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "secret1");
    }

    async fn settle(app: &mut App) {
        let outcome = app.outcomes_rx.recv().await.unwrap();
        app.apply_outcome(outcome);
    }

    mod construction {
        use super::*;

        #[test]
        fn test_defaults() {
            let app = idle_app();
            assert_eq!(app.state.active_tab, FormKind::Login);
            assert_eq!(app.form.kind(), FormKind::Login);
            assert_eq!(app.state.theme.theme, Theme::Blue);
            assert!(!app.should_quit());
            assert!(!app.is_submitting());
        }

        #[test]
        fn test_config_picks_tab_and_theme() {
            let config = TuiConfig {
                theme: Some("dark".to_string()),
                initial_tab: Some("forgot".to_string()),
                simulated_delay_ms: Some(10),
            };
            let app = App::new(config, None);
            assert_eq!(app.state.theme.theme, Theme::Dark);
            assert_eq!(app.form.kind(), FormKind::PasswordReset);
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = idle_app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_function_keys_switch_tabs() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::F(3))).unwrap();
            assert_eq!(app.form.kind(), FormKind::Contact);
            app.handle_key(key(KeyCode::F(4))).unwrap();
            assert_eq!(app.state.active_tab, FormKind::PasswordReset);
            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.form.kind(), FormKind::Login);
        }

        #[test]
        fn test_same_tab_keeps_form() {
            let mut app = idle_app();
            type_text(&mut app, "abc");
            let id = app.form.id();
            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.form.id(), id);
        }

        #[test]
        fn test_switching_tab_discards_values() {
            let mut app = idle_app();
            type_text(&mut app, "abc");
            app.handle_key(key(KeyCode::F(2))).unwrap();
            app.handle_key(key(KeyCode::F(1))).unwrap();
            match &app.form {
                FormState::Login(screen) => assert_eq!(screen.values().email, ""),
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }

        #[test]
        fn test_enter_on_invalid_form_sets_status() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.form.phase().is_editing());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please fix the highlighted fields.")
            );
            // Any key clears the notice
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.state.status_message.is_none());
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::F(3))).unwrap();
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            type_text(&mut app, "hi");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "there");
            match &app.form {
                FormState::Contact(screen) => assert_eq!(screen.values().message, "hi\nthere"),
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }

        #[test]
        fn test_enter_on_checkbox_toggles() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Up)).unwrap();
            app.handle_key(key(KeyCode::Up)).unwrap();
            app.handle_key(key(KeyCode::Up)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            match &app.form {
                FormState::Login(screen) => assert!(screen.values().remember),
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }

        #[test]
        fn test_forgot_link_navigates() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.form.focused_action(), Some(ScreenAction::ForgotPassword));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.form.kind(), FormKind::PasswordReset);

            app.handle_key(key(KeyCode::BackTab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.form.kind(), FormKind::Login);
        }

        #[test]
        fn test_ctrl_r_reveals_password() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(ctrl('r')).unwrap();
            match &app.form {
                FormState::Login(screen) => {
                    assert!(screen.is_revealed(crate::state::LoginField::Password))
                }
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }

        #[test]
        fn test_ctrl_letters_do_not_type() {
            let mut app = idle_app();
            app.handle_key(ctrl('x')).unwrap();
            match &app.form {
                FormState::Login(screen) => assert_eq!(screen.values().email, ""),
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }
    }

    mod theme {
        use super::*;

        #[test]
        fn test_f5_cycles_and_saves() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            let mut app = App::with_action(
                TuiConfig::default(),
                Some(path.clone()),
                Arc::new(MockSubmitAction::new()),
            );

            app.handle_key(key(KeyCode::F(5))).unwrap();
            assert_eq!(app.state.theme.theme, Theme::Green);
            let saved = TuiConfig::load_from(&path).unwrap();
            assert_eq!(saved.theme(), Theme::Green);
        }

        #[test]
        fn test_save_failure_is_reported_not_fatal() {
            let dir = TempDir::new().unwrap();
            // A directory where the file should be makes the write fail
            let path = dir.path().join("config.json");
            std::fs::create_dir(&path).unwrap();
            let mut app = App::with_action(
                TuiConfig::default(),
                Some(path),
                Arc::new(MockSubmitAction::new()),
            );

            app.handle_key(key(KeyCode::F(5))).unwrap();
            assert_eq!(app.state.theme.theme, Theme::Green);
            assert!(app
                .state
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Could not save theme")));
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_ctrl_s_submits_and_succeeds() {
            let mut mock = MockSubmitAction::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_login(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.is_submitting());
            settle(&mut app).await;

            assert!(matches!(app.form.phase(), SubmitPhase::Success(_)));
            assert_eq!(app.form.focused_action(), Some(ScreenAction::Retry));

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.form.phase().is_editing());
        }

        #[tokio::test]
        async fn test_failure_opens_error_dialog() {
            let mut mock = MockSubmitAction::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("server said no")));
            let mut app = app_with(mock);
            fill_login(&mut app);

            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(
                app.state.current_error(),
                Some("Submission failed: server said no")
            );
            assert!(app.form.phase().is_editing());

            // Modal: typing is swallowed until dismissed
            app.handle_key(key(KeyCode::Char('z'))).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_errors());
            match &app.form {
                FormState::Login(screen) => assert_eq!(screen.values().password, "secret1"),
                other => panic!("unexpected form {:?}", other.kind()),
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_tab_switch_drops_pending_submission() {
            let mut app = App::new(TuiConfig::default(), None);
            fill_login(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.is_submitting());

            app.handle_key(key(KeyCode::F(2))).unwrap();
            tokio::time::sleep(Duration::from_secs(3)).await;
            app.drain_outcomes();

            assert_eq!(app.form.kind(), FormKind::Register);
            assert!(app.form.phase().is_editing());
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_late_outcome_for_old_session_is_ignored() {
            let mut app = idle_app();
            let old_id = app.form.id();
            app.handle_key(key(KeyCode::F(2))).unwrap();
            app.outcomes_tx
                .send(SubmitOutcome {
                    session: old_id,
                    result: Err("late".to_string()),
                })
                .unwrap();

            app.drain_outcomes();
            assert!(!app.state.has_errors());
            assert!(app.form.phase().is_editing());
        }
    }
}
