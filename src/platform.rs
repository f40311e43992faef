//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the fallback submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_FALLBACK_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_FALLBACK_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+W/Ctrl+W also work as fallback)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Pick document shortcut display
pub const PICK_DOCUMENT_SHORTCUT: &str = "Ctrl+D";

/// Pick photo shortcut display
pub const PICK_PHOTO_SHORTCUT: &str = "Ctrl+O";
