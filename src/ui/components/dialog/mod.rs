//! Dialog components for TUI

mod base;
mod notice_dialog;
mod path_prompt_dialog;

pub use notice_dialog::render_notice_dialog;
pub use path_prompt_dialog::render_path_prompt;
