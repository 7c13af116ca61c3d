//! Reusable UI Components
//!
//! Building blocks shared by the form body, the result card and the dialogs.
//! All components take a [`LayoutContext`](crate::ui::layout::LayoutContext)
//! for responsive sizing.
//!
//! ## Components
//!
//! - `OptionGroup` - Mutually exclusive choices with an arrow marker
//! - `InputField` - Text input with focus handling, placeholder, and inline errors
//! - `StatusIndicator` - Spinner and service status badge
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod option_group;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig};
pub use option_group::{render_option_group, OptionGroupConfig};
pub use status_indicator::{frame_for_tick, render_service_status, render_spinner};
