//! UI rendering for the stroke-risk screen
//!
//! The screen is split into three rows:
//! - Header with the title, service status and the disclaimer shortcut
//! - A scrolling body holding the five form sections, consent, submit and
//!   the result card
//! - A footer with key hints, replaced by the error banner while one is up
//!
//! Dialogs (details, disclaimer) are drawn over everything else.
//!
//! ## Responsive Layout System
//!
//! All render functions receive a `LayoutContext`. Row-style option groups
//! collapse into columns and dialogs widen on compact terminals.

pub mod components;
pub mod dialogs;
pub mod form;
pub mod layout;
pub mod result_card;
pub mod theme;

pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use components::render_service_status;
use dialogs::{render_details, render_disclaimer};
use form::{build_form, follow_focus};
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR_BG, COLOR_HEADER};

/// Title shown in the header
pub const APP_TITLE: &str = "Stroke Risk";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_body(frame, chunks[1], app, &ctx);
    render_footer(frame, chunks[2], app);

    if app.ui.details_visible {
        if let Some(result) = app.ui.result.as_ref() {
            render_details(frame, area, &ctx, result);
        }
    }
    if app.ui.show_disclaimer {
        render_disclaimer(frame, area, &ctx);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut right = render_service_status(app.ui.service_status);
    right.push(Span::styled("  F1 Disclaimer ", Style::default().fg(COLOR_DIM)));

    let right_width: usize = right.iter().map(|s| s.width()).sum();
    let left = Span::styled(
        format!(" {}", APP_TITLE),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    let gap = (area.width as usize).saturating_sub(left.width() + right_width);

    let mut spans = vec![left, Span::raw(" ".repeat(gap))];
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let width = ctx.form_width().min(area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let view = build_form(app, ctx);
    let offset = follow_focus(
        app.scroll_offset as usize,
        view.focus_span,
        column.height as usize,
        view.lines.len(),
    );
    app.scroll_offset = offset.min(u16::MAX as usize) as u16;

    let body = Paragraph::new(view.lines).scroll((app.scroll_offset, 0));
    frame.render_widget(body, column);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.ui.has_error() {
        Line::from(vec![
            Span::styled(
                format!(" \u{2717} {} ", app.ui.error),
                Style::default()
                    .fg(Color::White)
                    .bg(COLOR_ERROR_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Esc to dismiss", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(Span::styled(
            " Tab/\u{2191}\u{2193} move \u{00B7} \u{2190}\u{2192}/1-9 choose \u{00B7} Space consent \u{00B7} Ctrl+S predict \u{00B7} Ctrl+Q quit",
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::client::ServiceStatus;
    use crate::domain::PredictionResult;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_initial_screen() {
        let mut app = App::for_tests();
        let text = draw(&mut app, 100, 30);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Step 1"));
        assert!(text.contains("checking"));
    }

    #[test]
    fn test_render_error_banner() {
        let mut app = App::for_tests();
        app.ui.set_error("You must agree to the disclaimer.");
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("You must agree to the disclaimer."));
        assert!(text.contains("Esc to dismiss"));
    }

    #[test]
    fn test_render_scrolls_to_focused_submit() {
        let mut app = App::for_tests();
        app.focus = Focus::Submit;
        let text = draw(&mut app, 100, 24);
        assert!(text.contains("Predict Stroke Risk"));
        assert!(app.scroll_offset > 0);
    }

    #[test]
    fn test_render_high_risk_result() {
        let mut app = App::for_tests();
        app.ui.result = Some(PredictionResult {
            probability: Some(82.3),
            probability_str: None,
            prediction: 1,
            model_votes: None,
            model_probs: None,
        });
        app.focus = Focus::Result;
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("High Risk"));
        assert!(text.contains("82.30%"));
    }

    #[test]
    fn test_render_disclaimer_over_form() {
        let mut app = App::for_tests();
        app.ui.open_disclaimer();
        let text = draw(&mut app, 100, 40);
        assert!(text.contains("Medical Disclaimer"));
        assert!(text.contains("I Understand"));
    }

    #[test]
    fn test_render_offline_status() {
        let mut app = App::for_tests();
        app.ui.service_status = ServiceStatus::Offline;
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = App::for_tests();
        app.ui.open_disclaimer();
        draw(&mut app, 20, 6);
    }
}
