//! Message handling for the App.

use super::{App, AppMessage, Focus};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PredictionFinished {
                generation,
                outcome,
            } => {
                let applied = self.ui.complete_submission(generation, outcome);
                if applied && self.ui.result.is_none() && self.focus == Focus::Result {
                    self.focus = Focus::Submit;
                }
            }
            AppMessage::HealthChecked(status) => {
                self.ui.service_status = status;
            }
        }
    }
}
