//! Status Indicator Component
//!
//! Renders the spinner shown while a prediction is pending and the service
//! status badge in the header.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::client::ServiceStatus;
use crate::ui::theme::{COLOR_DIM, COLOR_LOW_RISK};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen
const TICKS_PER_FRAME: u64 = 6;

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for the app's tick counter
pub fn frame_for_tick(tick: u64) -> usize {
    ((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a spinner line with a message
pub fn render_spinner(message: &str, frame: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {} ", get_spinner_char(frame)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render the service status badge
pub fn render_service_status(status: ServiceStatus) -> Vec<Span<'static>> {
    match status {
        ServiceStatus::Unknown => vec![Span::styled(
            "\u{25CB} checking",
            Style::default().fg(COLOR_DIM),
        )],
        ServiceStatus::Online { response_time_ms } => vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_LOW_RISK)),
            Span::styled(
                format!("online {}ms", response_time_ms),
                Style::default().fg(COLOR_DIM),
            ),
        ],
        ServiceStatus::Offline => vec![
            Span::styled("\u{25CF} ", Style::default().fg(Color::Red)),
            Span::styled("offline", Style::default().fg(COLOR_DIM)),
        ],
    }
}

// ============================================================================
// Tests
// ============================================================================
