//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy-contact-email shortcut display
/// - macOS: "Cmd+E"
/// - Linux/Windows: "Ctrl+E"
#[cfg(target_os = "macos")]
pub const COPY_EMAIL_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const COPY_EMAIL_SHORTCUT: &str = "Ctrl+E";
