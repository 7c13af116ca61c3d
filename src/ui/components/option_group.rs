//! Option Group Component
//!
//! Renders a mutually exclusive set of labelled choices for one form field.
//! Uses the `▶` marker for the selected entry and tints it with the entry's
//! accent color. Row groups fall back to one entry per line on compact
//! terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::domain::{OptionLayout, SelectOption};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{accent_color, COLOR_ACCENT, COLOR_DIM};

/// How the group should be drawn
#[derive(Debug, Clone, Copy)]
pub struct OptionGroupConfig {
    /// Index of the selected entry, if any
    pub selected: Option<usize>,
    /// Whether the group currently has focus
    pub focused: bool,
    /// Preferred layout on a roomy terminal
    pub layout: OptionLayout,
}

impl OptionGroupConfig {
    pub fn new(layout: OptionLayout) -> Self {
        Self {
            selected: None,
            focused: false,
            layout,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Layout actually used for `config` under `ctx`.
pub fn effective_layout(config: &OptionGroupConfig, ctx: &LayoutContext) -> OptionLayout {
    if ctx.stacks_options() {
        OptionLayout::Column
    } else {
        config.layout
    }
}

fn entry_spans<T>(
    idx: usize,
    option: &SelectOption<T>,
    config: &OptionGroupConfig,
    ctx: &LayoutContext,
) -> Vec<Span<'static>> {
    let is_selected = config.selected == Some(idx);
    let mut spans = Vec::with_capacity(4);

    // Digit shortcuts are only useful while the group has focus
    if config.focused && ctx.shows_digit_hints() {
        spans.push(Span::styled(
            format!("{} ", idx + 1),
            Style::default().fg(COLOR_DIM),
        ));
    }

    if is_selected {
        let marker_style = if config.focused {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let mut text_style = Style::default().fg(accent_color(option.accent));
        if config.focused {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled("▶ ".to_string(), marker_style));
        spans.push(Span::styled(format!("{} ", option.icon), text_style));
        spans.push(Span::styled(option.label.to_string(), text_style));
    } else {
        let text_style = Style::default().fg(COLOR_DIM);
        spans.push(Span::styled("  ".to_string(), text_style));
        spans.push(Span::styled(format!("{} ", option.icon), text_style));
        spans.push(Span::styled(option.label.to_string(), text_style));
    }

    spans
}

/// Render an option group as one or more lines.
///
/// # Example
/// ```ignore
/// let config = OptionGroupConfig::new(OptionLayout::Row).selected(Some(0)).focused(true);
/// let lines = render_option_group(&GENDER_OPTIONS, &config, &ctx);
/// ```
pub fn render_option_group<T>(
    options: &[SelectOption<T>],
    config: &OptionGroupConfig,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    match effective_layout(config, ctx) {
        OptionLayout::Row => {
            let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
            for (idx, option) in options.iter().enumerate() {
                spans.extend(entry_spans(idx, option, config, ctx));
                if idx + 1 < options.len() {
                    spans.push(Span::raw("    "));
                }
            }
            vec![Line::from(spans)]
        }
        OptionLayout::Column => options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
                spans.extend(entry_spans(idx, option, config, ctx));
                Line::from(spans)
            })
            .collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
