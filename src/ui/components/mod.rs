//! Reusable UI components

mod dialog;

pub use dialog::{render_notice_dialog, render_path_prompt};
