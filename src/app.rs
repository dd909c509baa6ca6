//! Application wiring and key handling

use crate::config::TuiConfig;
use crate::service::LoanClient;
use crate::state::{AppState, FocusField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the loan decision service
    pub service: LoanClient,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let service = LoanClient::new(config.service_url);

        Ok(Self {
            state: AppState::default(),
            service,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Editing is frozen while a request is outstanding; quit stays
        // live through the global Ctrl+C handler in main.
        if self.state.form.submission.is_in_flight() {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Left | KeyCode::Right
                if matches!(self.state.focus, FocusField::PersonType) =>
            {
                self.state.toggle_person_type();
            }
            KeyCode::Enter => {
                if matches!(self.state.focus, FocusField::Submit) {
                    self.state.form.submit(&self.service).await;
                } else {
                    self.state.next_field();
                }
            }
            KeyCode::Char(c) => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }

        Ok(())
    }
}
