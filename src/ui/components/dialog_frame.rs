//! Dialog Frame Component
//!
//! The rounded box both dialogs (disclaimer, result details) sit in. It is
//! centered over the screen, blanks what is underneath, and hands back the
//! inner area for the dialog's text.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Rows taken by the top and bottom border
const BORDER_ROWS: u16 = 2;

/// Title, size bounds and content height of a dialog
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    /// Rows of content, borders excluded
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            title_color: COLOR_HEADER,
            content_height,
            min_width: 30,
            max_width: 64,
        }
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    /// Outer width of the frame inside an area `area_width` columns wide.
    pub fn frame_width(&self, ctx: &LayoutContext, area_width: u16) -> u16 {
        ctx.dialog_width(self.min_width, self.max_width)
            .min(area_width)
    }

    /// Outer height of the frame, borders included.
    pub fn frame_height(&self) -> u16 {
        self.content_height + BORDER_ROWS
    }

    /// Frame rectangle centered in `area`, clipped to it.
    pub fn frame_area(&self, ctx: &LayoutContext, area: Rect) -> Rect {
        let width = self.frame_width(ctx, area.width);
        let height = self.frame_height().min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

/// Draw the frame over a cleared background and return its inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_area = config.frame_area(ctx, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
