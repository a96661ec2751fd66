//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for editor shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Save preview preferences shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
#[cfg(target_os = "macos")]
pub const SAVE_DEFAULTS_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const SAVE_DEFAULTS_SHORTCUT: &str = "Ctrl+D";
