//! Input Field Component
//!
//! A text input with focus handling, placeholder, and inline helper display.
//! Drawn as lines with a rounded box so it can scroll with the rest of the
//! form body.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional hint displayed below the input when there is no error
    pub hint: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            hint: None,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set an error message to display
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Set a hint shown while there is no error
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Calculate the height needed for an input field
///
/// Returns the number of rows needed:
/// - 1 for label
/// - 3 for input box (border + content + border)
/// - 1 for error or hint (if present)
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() || config.hint.is_some() {
        height += 1;
    }
    height
}

/// Render an input field with label, input box, and optional error or hint
pub fn render_input_field(config: &InputFieldConfig, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(calculate_input_field_height(config) as usize);
    let box_width = ctx.input_width().max(8) as usize;
    let inner_width = box_width - 2;

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(config.label.to_string(), label_style),
    ]));

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let border_style = Style::default().fg(border_color);

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };
    let text_style = if showing_placeholder {
        Style::default().fg(COLOR_DIM).bg(COLOR_INPUT_BG)
    } else if config.focused {
        Style::default().fg(Color::White).bg(COLOR_INPUT_BG)
    } else {
        Style::default().fg(COLOR_DIM).bg(COLOR_INPUT_BG)
    };

    // Block cursor sits after the value, before any placeholder
    let cursor = if config.focused { "\u{2588}" } else { "" };
    if showing_placeholder && config.focused {
        content.insert_str(0, cursor);
    } else {
        content.push_str(cursor);
    }
    let content = format!(" {}", content);
    let pad = inner_width.saturating_sub(content.width());

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("╭{}╮", "─".repeat(inner_width)), border_style),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("│".to_string(), border_style),
        Span::styled(content, text_style),
        Span::styled(" ".repeat(pad), Style::default().bg(COLOR_INPUT_BG)),
        Span::styled("│".to_string(), border_style),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("╰{}╯", "─".repeat(inner_width)), border_style),
    ]));

    if let Some(error) = config.error {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("\u{2717} ", Style::default().fg(Color::Red)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]));
    } else if let Some(hint) = config.hint {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(hint.to_string(), Style::default().fg(COLOR_DIM)),
        ]));
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================
