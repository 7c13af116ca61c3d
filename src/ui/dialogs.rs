//! Modal dialogs: the medical disclaimer and the result details.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::result_card::risk_color;
use super::theme::{COLOR_ACCENT, COLOR_STEP, COLOR_WARNING};
use crate::domain::PredictionResult;

pub const DISCLAIMER_TITLE: &str = "Medical Disclaimer";
pub const DETAILS_TITLE: &str = "About Your Result";

/// Rows a set of lines needs when word-wrapped to `width`.
///
/// Counts by display width. Word wrapping can break early and need an
/// extra row, so callers leave a spare one.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| {
            let len: usize = line.spans.iter().map(|s| s.content.width()).sum();
            len.div_ceil(width).max(1) as u16
        })
        .sum()
}

fn button_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("[ {} ]", label),
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
    .centered()
}

pub fn disclaimer_lines() -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Gray);
    vec![
        Line::from(Span::styled("This app does not provide medical advice.", bold)),
        Line::from(Span::styled(
            "The risk estimates shown here are for informational and educational purposes only.",
            body,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "This tool is based on statistical data and cannot replace a medical evaluation or diagnosis by a licensed healthcare provider. If you have urgent symptoms (such as sudden numbness, severe headache, confusion, vision loss, or difficulty speaking), ",
                body,
            ),
            Span::styled(
                "seek emergency medical care immediately",
                Style::default()
                    .fg(COLOR_WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", body),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "By using this app, you agree that the results are for planning and awareness, and not for diagnosis or treatment.",
            body,
        )),
        Line::from(""),
        button_line("I Understand"),
    ]
}

pub fn details_lines(result: &PredictionResult) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                result.risk_label(),
                Style::default()
                    .fg(risk_color(result))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" of stroke based on the data you provided."),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("What to do: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(result.advice(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        button_line("Close"),
    ]
}

fn render_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    mut config: DialogFrameConfig,
    lines: Vec<Line<'static>>,
) {
    // One column of padding each side inside the border
    let text_width = config.frame_width(ctx, area.width).saturating_sub(4);
    config.content_height = wrapped_height(&lines, text_width) + 1;

    let inner = render_dialog_frame(frame, area, ctx, &config);
    let padded = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded);
}

pub fn render_disclaimer(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let config = DialogFrameConfig::new(DISCLAIMER_TITLE, 0)
        .title_color(COLOR_WARNING)
        .max_width(72);
    render_dialog(frame, area, ctx, config, disclaimer_lines());
}

pub fn render_details(frame: &mut Frame, area: Rect, ctx: &LayoutContext, result: &PredictionResult) {
    let config = DialogFrameConfig::new(DETAILS_TITLE, 0).title_color(COLOR_STEP);
    render_dialog(frame, area, ctx, config, details_lines(result));
}
