//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the send shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for the form help text.
/// Ctrl+S works on all platforms.
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Whether `modifiers` holds the send modifier (or plain Ctrl)
pub fn is_send_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(SEND_MODIFIER | KeyModifiers::CONTROL)
}
