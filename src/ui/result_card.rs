//! Result card shown below the submit button.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::components::{frame_for_tick, render_spinner};
use super::theme::{COLOR_DIM, COLOR_HIGH_RISK, COLOR_LOW_RISK};
use crate::domain::{display_probability, PredictionResult, ProbabilityDisplay};
use crate::state::UiState;

/// Message shown in the pending card
pub const PENDING_MESSAGE: &str = "Calculating your risk...";

/// Footer line inviting the user to open the details dialog
pub const DETAILS_PROMPT: &str = "Press Enter for details & tips.";

/// Color for a result's risk class.
pub fn risk_color(result: &PredictionResult) -> Color {
    if result.is_high_risk() {
        COLOR_HIGH_RISK
    } else {
        COLOR_LOW_RISK
    }
}

fn gutter(color: Color, focused: bool) -> Span<'static> {
    let bar = if focused { "  \u{2588} " } else { "  \u{258C} " };
    Span::styled(bar, Style::default().fg(color))
}

/// Render the card for the current result, or the pending card while loading.
pub fn render_result_card(
    ui: &UiState,
    focused: bool,
    tick: u64,
) -> Vec<Line<'static>> {
    let display = display_probability(ui.result.as_ref());
    let (result, text) = match (&ui.result, display) {
        (Some(result), ProbabilityDisplay::Text(text)) => (result, text),
        _ => return vec![render_spinner(PENDING_MESSAGE, frame_for_tick(tick))],
    };

    let color = risk_color(result);
    let icon = if result.is_high_risk() { "\u{26A0}" } else { "\u{2714}" };

    let mut lines = vec![
        Line::from(vec![
            gutter(color, focused),
            Span::styled(
                format!("{} {}", icon, result.risk_label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            gutter(color, focused),
            Span::styled("Estimated Chance: ", Style::default().fg(Color::Gray)),
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
    ];

    if let Some(summary) = result.model_summary() {
        lines.push(Line::from(vec![
            gutter(color, focused),
            Span::styled(
                summary,
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        gutter(color, focused),
        Span::styled(DETAILS_PROMPT, Style::default().fg(COLOR_DIM)),
    ]));

    lines
}
