//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_error_dialog};
