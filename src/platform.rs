//! Platform-specific key bindings and their display strings

use crossterm::event::KeyModifiers;

/// Modifier for the submit and reveal shortcuts
/// - macOS: SUPER (Cmd key) or CONTROL
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility shortcut display
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

pub const THEME_SHORTCUT: &str = "F5";

pub const TABS_SHORTCUT: &str = "F1-F4";

/// True if `modifiers` hold the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(SHORTCUT_MODIFIERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_is_a_shortcut_everywhere() {
        assert!(is_shortcut(KeyModifiers::CONTROL));
        assert!(is_shortcut(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert!(!is_shortcut(KeyModifiers::NONE));
        assert!(!is_shortcut(KeyModifiers::SHIFT));
    }
}
