//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal size and answers the sizing questions
//! the form asks: how wide the column is, whether option rows must stack,
//! how wide a dialog may grow.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Below this many columns the screen is extra small
    pub const XS_WIDTH: u16 = 60;
    /// Below this many columns option rows no longer fit
    pub const SM_WIDTH: u16 = 80;

    pub const XS_HEIGHT: u16 = 16;
    pub const SM_HEIGHT: u16 = 24;
}

/// Widest the form column grows, in columns.
pub const MAX_FORM_WIDTH: u16 = 88;

/// Widest a text input box grows on a roomy terminal.
pub const MAX_INPUT_WIDTH: u16 = 40;

/// Coarse size bucket for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeClass {
    /// Under 60x16: drop every decoration that is not essential
    ExtraSmall,
    /// Under 80x24: stack option rows, widen dialogs
    Compact,
    Regular,
}

/// Terminal dimensions plus the sizing rules derived from them.
///
/// # Example
///
/// ```
/// use stroke_risk::ui::layout::{LayoutContext, SizeClass};
///
/// let ctx = LayoutContext::new(70, 30);
/// assert_eq!(ctx.size_class(), SizeClass::Compact);
/// assert!(ctx.stacks_options());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn size_class(&self) -> SizeClass {
        use breakpoints::*;
        if self.width < XS_WIDTH || self.height < XS_HEIGHT {
            SizeClass::ExtraSmall
        } else if self.width < SM_WIDTH || self.height < SM_HEIGHT {
            SizeClass::Compact
        } else {
            SizeClass::Regular
        }
    }

    /// Whether fewer than 80 columns are available.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Row-style option groups fall back to one entry per line.
    pub fn stacks_options(&self) -> bool {
        self.size_class() != SizeClass::Regular
    }

    /// Digit shortcuts are drawn next to focused options.
    pub fn shows_digit_hints(&self) -> bool {
        self.size_class() != SizeClass::ExtraSmall
    }

    /// Width of the centered form column.
    pub fn form_width(&self) -> u16 {
        self.width.min(MAX_FORM_WIDTH)
    }

    /// Width of a text input box inside the form column.
    pub fn input_width(&self) -> u16 {
        let available = self.form_width().saturating_sub(4);
        if self.is_narrow() {
            available
        } else {
            available.min(MAX_INPUT_WIDTH)
        }
    }

    /// Dialog width clamped to `[min, max]` and never wider than the screen.
    ///
    /// Regular terminals give a dialog half the width, compact ones 80%, and
    /// extra small ones everything but a two-column margin on each side.
    pub fn dialog_width(&self, min: u16, max: u16) -> u16 {
        let share = |percent: u32| ((self.width as u32 * percent) / 100) as u16;
        let width = match self.size_class() {
            SizeClass::ExtraSmall => self.width.saturating_sub(4).min(max),
            SizeClass::Compact if self.is_narrow() => share(80).clamp(min, max),
            _ => share(50).clamp(min, max),
        };
        width.min(self.width)
    }
}
