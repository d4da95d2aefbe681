//! Form rendering module
//!
//! - `field_renderer`: single field widgets
//! - `lead_form`: the lead capture form and its side panel
//! - `confirmation`: thank-you card after a successful submission

mod confirmation;
mod field_renderer;
mod lead_form;

pub use lead_form::draw as draw_lead_form;
