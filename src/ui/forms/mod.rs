//! Form rendering module
//!
//! This module contains UI components for rendering the admission form:
//! - `field_renderer`: Field rendering utilities
//! - `attachment_list`: Picked documents and photos
//! - `admission_form`: The form screen itself

mod admission_form;
mod attachment_list;
mod field_renderer;

pub use admission_form::draw_admission_form;
pub use attachment_list::attachment_items;
