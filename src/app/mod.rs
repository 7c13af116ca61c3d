//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which screen element has focus
//! - [`AppMessage`] - Messages for async communication
//! - [`submit`] - The submission handler

mod handlers;
mod keys;
mod messages;
pub mod submit;
mod types;

pub use messages::AppMessage;
pub use submit::{PendingSubmission, SubmitOutcome};
pub use types::Focus;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

use crate::client::PredictionClient;
use crate::domain::{FormAction, FormState};
use crate::state::UiState;

/// Period of [`App::tick`].
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Timer for the event loop's tick arm. Created once per loop so input
/// events do not reset it; late ticks are skipped.
///
/// Must be called from within a tokio runtime.
pub fn tick_interval() -> Interval {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Main application state
pub struct App {
    /// Values entered on the form
    pub form: FormState,
    /// Loading, error, result and dialog state
    pub ui: UiState,
    /// Element receiving key input
    pub focus: Focus,
    /// Client used by spawned prediction tasks
    pub client: PredictionClient,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Tick counter for spinner animation
    pub tick_count: u64,
    /// First visible line of the form body; follows focus on every draw
    pub scroll_offset: u16,
    /// Cached terminal width
    pub terminal_width: u16,
    /// Cached terminal height
    pub terminal_height: u16,
}

impl App {
    pub fn new(client: PredictionClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            form: FormState::default(),
            ui: UiState::default(),
            focus: Focus::default(),
            client,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            scroll_offset: 0,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Apply a form edit through the reducer.
    pub fn dispatch(&mut self, action: FormAction) {
        let form = std::mem::take(&mut self.form);
        self.form = form.reduce(action);
        self.mark_dirty();
    }

    /// Validate and, when valid, send the prediction request in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) {
        self.mark_dirty();
        match self.ui.begin_submission(&self.form) {
            SubmitOutcome::Started(pending) => {
                if self.focus == Focus::Result {
                    self.focus = Focus::Submit;
                }
                let client = self.client.clone();
                let message_tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.predict(&pending.request).await;
                    let _ = message_tx.send(AppMessage::PredictionFinished {
                        generation: pending.generation,
                        outcome,
                    });
                });
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Busy => {}
        }
    }

    /// Probe the service in the background and report the outcome.
    pub fn start_health_check(&self) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let status = client.health_check().await;
            let _ = message_tx.send(AppMessage::HealthChecked(status));
        });
    }

    /// Advance animations and timers by one ~16ms tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.ui.tick_error_banner() {
            self.mark_dirty();
        }
    }

    /// Whether something on screen animates without input.
    pub fn is_animating(&self) -> bool {
        self.ui.loading
    }

    pub fn focus_next(&mut self) {
        self.ui.reveal_result = false;
        self.focus = self.focus.next(self.ui.result.is_some());
    }

    pub fn focus_prev(&mut self) {
        self.ui.reveal_result = false;
        self.focus = self.focus.prev(self.ui.result.is_some());
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}

#[cfg(test)]
impl App {
    /// App backed by a mock HTTP client that answers nothing.
    pub(crate) fn for_tests() -> Self {
        use crate::adapters::mock::MockHttpClient;
        use crate::config::AppConfig;
        use std::sync::Arc;

        let client = PredictionClient::with_http(&AppConfig::default(), Arc::new(MockHttpClient::new()));
        App::new(client)
    }
}
