//! Form body rendering.
//!
//! The whole form is built as one list of lines so it can scroll as a unit.
//! While building, the line range of the focused element is recorded so the
//! caller can keep it on screen.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::components::{
    render_input_field, render_option_group, render_spinner, frame_for_tick, InputFieldConfig,
    OptionGroupConfig,
};
use super::layout::LayoutContext;
use super::result_card::render_result_card;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_STEP};
use crate::app::{App, Focus};
use crate::domain::options::{
    EVER_MARRIED_OPTIONS, GENDER_OPTIONS, HEART_DISEASE_OPTIONS, HYPERTENSION_OPTIONS,
    RESIDENCE_OPTIONS, SMOKING_OPTIONS, WORK_TYPE_OPTIONS,
};
use crate::domain::validation::field_helper;
use crate::domain::{FormState, OptionField, TextField};

/// Hint under the optional glucose field
pub const GLUCOSE_HINT: &str = "If unknown, leave blank.";

/// Label of the submit button
pub const SUBMIT_LABEL: &str = "Predict Stroke Risk";

/// Rendered form body
#[derive(Debug, Clone)]
pub struct FormView {
    pub lines: Vec<Line<'static>>,
    /// First and last line (inclusive) of the focused element
    pub focus_span: (usize, usize),
}

struct FormBuilder {
    lines: Vec<Line<'static>>,
    focus_span: (usize, usize),
}

impl FormBuilder {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn element(&mut self, focused: bool, lines: Vec<Line<'static>>) {
        if focused && !lines.is_empty() {
            let start = self.lines.len();
            self.focus_span = (start, start + lines.len() - 1);
        }
        self.lines.extend(lines);
    }

    /// Widen the focus span so it also covers the lines pushed by `lines`.
    fn reveal(&mut self, lines: Vec<Line<'static>>) {
        if !lines.is_empty() {
            let start = self.lines.len();
            let end = start + lines.len() - 1;
            self.focus_span = (self.focus_span.0.min(start), self.focus_span.1.max(end));
        }
        self.lines.extend(lines);
    }

    fn section(&mut self, step: u8, title: &str) {
        self.blank();
        self.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("Step {}", step),
                Style::default().fg(COLOR_STEP).add_modifier(Modifier::BOLD),
            ),
        ]));
        self.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    fn question(&mut self, prompt: &str) {
        self.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(prompt.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }
}

/// Lines for the option group bound to `field`.
pub fn option_lines(
    field: OptionField,
    form: &FormState,
    focused: bool,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    let config = OptionGroupConfig::new(field.layout())
        .selected(field.selected_index(form))
        .focused(focused);
    match field {
        OptionField::Gender => render_option_group(&GENDER_OPTIONS, &config, ctx),
        OptionField::Hypertension => render_option_group(&HYPERTENSION_OPTIONS, &config, ctx),
        OptionField::HeartDisease => render_option_group(&HEART_DISEASE_OPTIONS, &config, ctx),
        OptionField::EverMarried => render_option_group(&EVER_MARRIED_OPTIONS, &config, ctx),
        OptionField::WorkType => render_option_group(&WORK_TYPE_OPTIONS, &config, ctx),
        OptionField::Residence => render_option_group(&RESIDENCE_OPTIONS, &config, ctx),
        OptionField::Smoking => render_option_group(&SMOKING_OPTIONS, &config, ctx),
    }
}

fn text_lines(
    field: TextField,
    form: &FormState,
    focused: bool,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    let mut config = InputFieldConfig::new(field.label(), form.text(field))
        .focused(focused)
        .placeholder(field.placeholder())
        .error(field_helper(form, field));
    if field == TextField::Glucose {
        config = config.hint(GLUCOSE_HINT);
    }
    render_input_field(&config, ctx)
}

fn consent_line(consent: bool, focused: bool) -> Line<'static> {
    let box_style = if focused {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let checkbox = if consent { "[x] " } else { "[ ] " };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(checkbox, box_style),
        Span::styled("I have read and agree to the", Style::default().fg(Color::Gray)),
        Span::styled(
            " medical disclaimer",
            Style::default()
                .fg(COLOR_STEP)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(".", Style::default().fg(Color::Gray)),
        Span::styled("  (F1 to read)", Style::default().fg(COLOR_DIM)),
    ])
}

fn submit_line(app: &App, focused: bool) -> Line<'static> {
    if app.ui.loading {
        return render_spinner(SUBMIT_LABEL, frame_for_tick(app.tick_count));
    }

    let enabled = app.form.consent;
    let style = match (enabled, focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Gray).add_modifier(Modifier::REVERSED),
        (false, false) => Style::default().fg(COLOR_DIM),
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ \u{2315} {} ]", SUBMIT_LABEL), style),
    ])
}

/// Build the scrollable form body for the current app state.
pub fn build_form(app: &App, ctx: &LayoutContext) -> FormView {
    let form = &app.form;
    let focus = app.focus;
    let mut b = FormBuilder {
        lines: Vec::with_capacity(80),
        focus_span: (0, 0),
    };

    b.section(1, OptionField::Gender.prompt());
    b.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "Why?",
            Style::default().fg(COLOR_STEP).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " This is only for medical risk calculation.",
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    b.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "We support everyone's gender identity.",
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    b.element(
        focus == Focus::Gender,
        option_lines(OptionField::Gender, form, focus == Focus::Gender, ctx),
    );

    b.section(2, "Your Age & BMI");
    b.element(
        focus == Focus::Age,
        text_lines(TextField::Age, form, focus == Focus::Age, ctx),
    );
    b.element(
        focus == Focus::Bmi,
        text_lines(TextField::Bmi, form, focus == Focus::Bmi, ctx),
    );

    b.section(3, "Medical History");
    for (field, slot) in [
        (OptionField::Hypertension, Focus::Hypertension),
        (OptionField::HeartDisease, Focus::HeartDisease),
        (OptionField::EverMarried, Focus::EverMarried),
    ] {
        b.question(field.prompt());
        b.element(focus == slot, option_lines(field, form, focus == slot, ctx));
    }

    b.section(4, "Lifestyle & Residence");
    for (field, slot) in [
        (OptionField::WorkType, Focus::WorkType),
        (OptionField::Residence, Focus::Residence),
        (OptionField::Smoking, Focus::Smoking),
    ] {
        b.question(field.prompt());
        b.element(focus == slot, option_lines(field, form, focus == slot, ctx));
    }

    b.section(5, "Metabolic Markers");
    b.element(
        focus == Focus::Glucose,
        text_lines(TextField::Glucose, form, focus == Focus::Glucose, ctx),
    );

    b.blank();
    b.element(
        focus == Focus::Consent,
        vec![consent_line(form.consent, focus == Focus::Consent)],
    );
    b.blank();
    b.element(
        focus == Focus::Submit,
        vec![submit_line(app, focus == Focus::Submit)],
    );

    if app.ui.loading || app.ui.result.is_some() {
        b.blank();
        let card = render_result_card(&app.ui, focus == Focus::Result, app.tick_count);
        if app.ui.reveal_result && focus != Focus::Result {
            b.reveal(card);
        } else {
            b.element(focus == Focus::Result, card);
        }
    }
    b.blank();

    FormView {
        lines: b.lines,
        focus_span: b.focus_span,
    }
}

/// Scroll offset that keeps `span` inside a viewport of `height` rows.
pub fn follow_focus(current: usize, span: (usize, usize), height: usize, total: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let mut offset = current;
    if span.0 < offset {
        offset = span.0;
    } else if span.1 >= offset + height {
        offset = (span.1 + 1).saturating_sub(height);
    }
    offset.min(total.saturating_sub(height))
}
