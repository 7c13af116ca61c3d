//! Transient UI state for the prediction screen.
//!
//! Nothing here outlives the screen. `result` and `error` are cleared when a
//! new submission starts.

use crate::client::ServiceStatus;
use crate::domain::PredictionResult;

/// Ticks (~16ms each) the error banner stays up before it dismisses itself.
pub const ERROR_BANNER_TICKS: u32 = 3500 / 16;

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// A prediction request is in flight
    pub loading: bool,
    /// Banner text; empty means no banner
    pub error: String,
    /// Most recent successful prediction
    pub result: Option<PredictionResult>,
    pub show_disclaimer: bool,
    pub details_visible: bool,
    /// Token of the most recently accepted submission
    pub generation: u64,
    /// Ticks the current banner has been visible
    pub error_age: u32,
    pub service_status: ServiceStatus,
    /// Keep the result card in view until focus next moves
    pub reveal_result: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading: false,
            error: String::new(),
            result: None,
            show_disclaimer: false,
            details_visible: false,
            generation: 0,
            error_age: 0,
            service_status: ServiceStatus::Unknown,
            reveal_result: false,
        }
    }
}

impl UiState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.error_age = 0;
    }

    pub fn dismiss_error(&mut self) {
        self.error.clear();
        self.error_age = 0;
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Age the banner by one tick. Returns true when it was dismissed.
    pub fn tick_error_banner(&mut self) -> bool {
        if !self.has_error() {
            return false;
        }
        self.error_age += 1;
        if self.error_age >= ERROR_BANNER_TICKS {
            self.dismiss_error();
            return true;
        }
        false
    }

    pub fn open_disclaimer(&mut self) {
        self.show_disclaimer = true;
    }

    pub fn close_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    /// Open the details dialog. Does nothing without a result.
    pub fn open_details(&mut self) {
        self.details_visible = self.result.is_some();
    }

    pub fn close_details(&mut self) {
        self.details_visible = false;
    }

    /// Whether a modal dialog is covering the form.
    pub fn has_dialog(&self) -> bool {
        self.show_disclaimer || self.details_visible
    }
}
