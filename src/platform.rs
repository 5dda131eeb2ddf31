//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the alternate submit shortcut (W)
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Shortcut that advances on steps 1-2 and submits on step 3
pub const PRIMARY_SHORTCUT: &str = "Ctrl+S";

/// Shortcut that only advances
pub const NEXT_SHORTCUT: &str = "Ctrl+N";
