//! Which namespaced series are currently shown.
//!
//! The mapping defaults absent keys to unselected. Tri-state (checked /
//! indeterminate / unchecked) is never stored: it is derived on every read
//! from the mapping and the key list in question, so stale keys left behind
//! by a removed dataset cannot influence the answer.

use std::collections::HashMap;

/// Selection mapping over namespaced series keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: HashMap<String, bool>,
}

impl SelectionState {
    /// Whether one series is currently shown. Absent keys read as `false`.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.get(key).copied().unwrap_or(false)
    }

    /// Flip a single series on or off.
    pub fn toggle_one(&mut self, key: &str) {
        let v = self.is_selected(key);
        self.selected.insert(key.to_string(), !v);
    }

    /// Tri-state batch toggle: if every key in `keys` is selected, deselect
    /// them all; otherwise select them all. The batch is applied atomically,
    /// every listed key ends up with the same target value.
    pub fn toggle_group<S: AsRef<str>>(&mut self, keys: &[S]) {
        let target = !self.is_all_checked(keys);
        for k in keys {
            self.selected.insert(k.as_ref().to_string(), target);
        }
    }

    /// Same batch rule applied to every loaded key (the caller passes the
    /// full key list across all datasets).
    pub fn toggle_all<S: AsRef<str>>(&mut self, all_keys: &[S]) {
        self.toggle_group(all_keys);
    }

    /// `true` iff `keys` is non-empty and every key is selected.
    pub fn is_all_checked<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        !keys.is_empty() && keys.iter().all(|k| self.is_selected(k.as_ref()))
    }

    /// `true` iff at least one key in `keys` is selected.
    pub fn is_some_checked<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().any(|k| self.is_selected(k.as_ref()))
    }
}
