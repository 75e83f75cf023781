//! Mode-switching keyboard shortcuts.
//!
//! Connects terminal key events to the accelerator keys declared in the
//! category manifest. Alt+1 through Alt+5 switch between calculator modes.

use crate::models::{ViewMode, VirtualKey};
use crate::nav;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Modifier that must be held for a mode accelerator.
pub const ACCELERATOR_MODIFIER: KeyModifiers = KeyModifiers::ALT;

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key pressed
    pub code: KeyCode,
    /// Modifiers held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Binding that triggers `key`, or `None` for `VirtualKey::None`.
    #[must_use]
    pub fn for_virtual_key(key: VirtualKey) -> Option<Self> {
        key.digit()
            .map(|d| Self::new(KeyCode::Char(d), ACCELERATOR_MODIFIER))
    }

    /// Parses `alt+1`, `Alt+2` or a bare digit (Alt implied).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.trim().to_ascii_lowercase();
        let digit = lower.strip_prefix("alt+").unwrap_or(&lower);

        let mut chars = digit.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => {
                Some(Self::new(KeyCode::Char(c), ACCELERATOR_MODIFIER))
            }
            _ => None,
        }
    }
}

/// Accelerator table built from the manifest.
pub struct AcceleratorRegistry {
    bindings: HashMap<KeyBinding, VirtualKey>,
}

impl AcceleratorRegistry {
    /// Registers every accelerator the manifest declares.
    #[must_use]
    pub fn new() -> Self {
        let mut keys = Vec::new();
        nav::get_category_accelerator_keys(&mut keys);

        let bindings = keys
            .into_iter()
            .filter_map(|key| KeyBinding::for_virtual_key(key).map(|b| (b, key)))
            .collect();

        Self { bindings }
    }

    /// Accelerator for a key event, or `VirtualKey::None`.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> VirtualKey {
        self.lookup_binding(KeyBinding::from_event(event))
    }

    /// Accelerator for a binding, or `VirtualKey::None`.
    #[must_use]
    pub fn lookup_binding(&self, binding: KeyBinding) -> VirtualKey {
        self.bindings.get(&binding).copied().unwrap_or_default()
    }

    /// Mode selected by a key event, or `ViewMode::None`.
    #[must_use]
    pub fn view_mode_for_event(&self, event: KeyEvent) -> ViewMode {
        nav::get_view_mode_for_virtual_key(self.lookup(event))
    }

    /// Number of registered accelerators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true when no accelerators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for AcceleratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
