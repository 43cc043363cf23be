//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages sent back from the background submission timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Completed,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Sender handed to the submission timer task
    submit_tx: mpsc::UnboundedSender<SubmissionEvent>,
    /// Receiver polled by the event loop
    submit_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    /// Handle of the in-flight timer task, aborted on quit
    submit_task: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            quit: false,
            submit_tx,
            submit_rx,
            submit_task: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Check if a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.state.submission.is_in_progress()
    }

    /// Request shutdown, aborting any in-flight submission timer
    pub fn quit(&mut self) {
        if let Some(task) = self.submit_task.take() {
            task.abort();
        }
        self.quit = true;
    }

    /// Handle a key event, dispatching by current view and dialog state
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.dialog_open() {
            self.handle_dialog_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key)?,
        }
        Ok(())
    }

    /// Drain completion messages from the submission timer task
    pub fn poll_submission(&mut self) {
        while let Ok(event) = self.submit_rx.try_recv() {
            match event {
                SubmissionEvent::Completed => self.finish_submission(),
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Shortcuts that work from anywhere on the form
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.try_submit();
                return Ok(());
            }
            KeyCode::Char('e') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_contact_email()?;
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit();
                return Ok(());
            }
            _ => {}
        }

        // The form is frozen for the duration of the simulated submission
        if self.is_submitting() {
            return Ok(());
        }

        let on_submit_row = self.state.form.is_submit_row_active();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_position(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_position(),
            KeyCode::Enter if on_submit_row => self.try_submit(),
            KeyCode::Enter => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    if field.is_multiline {
                        field.push_newline();
                    } else {
                        self.state.form.next_position();
                    }
                }
            }
            KeyCode::Char(c)
                if !on_submit_row && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_submit_row => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.confirmation = None;
            }
            _ => {}
        }
    }

    /// Start the simulated submission if the form allows it.
    /// Invalid or already-submitting states are a no-op; the submit
    /// control is rendered disabled in those cases.
    pub fn try_submit(&mut self) {
        if !self.state.can_submit() {
            tracing::debug!("submit ignored: form invalid or submission in flight");
            return;
        }

        self.state.submission.begin();
        self.state.status_message = None;

        let delay = self.config.submit_delay();
        let tx = self.submit_tx.clone();
        tracing::info!(delay_ms = delay.as_millis() as u64, "submission started");
        self.submit_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver only closes on shutdown; nothing to do then
            let _ = tx.send(SubmissionEvent::Completed);
        }));
    }

    /// Complete the submission: reset the draft exactly once and show
    /// the confirmation notice.
    fn finish_submission(&mut self) {
        if !self.is_submitting() {
            return;
        }

        let receipt = self.state.submission.finish();
        self.state.form.reset();
        tracing::info!(reference = %receipt.reference, "submission completed");
        self.state.confirmation = Some(receipt);
        self.submit_task = None;
    }

    fn copy_contact_email(&mut self) -> Result<()> {
        let email = self.config.contact_email().to_string();
        self.copy_to_clipboard(&email)?;
        self.state.status_message = Some(format!("Copied {email} to clipboard"));
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
