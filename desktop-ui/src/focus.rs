//! Window stacking
//!
//! [`FocusRegistry`] tracks the mounted windows of one [`WindowManager`] and
//! their stacking values. Focusing a window drops every other window back to
//! the base value, so at most one window is ever on top.

use dioxus::prelude::*;
use shared_types::{WindowId, BASE_Z_INDEX, FOCUSED_Z_INDEX};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusRegistry {
    windows: Vec<(WindowId, u32)>,
}

impl FocusRegistry {
    pub fn register(&mut self, id: WindowId) {
        if self.z_index(&id).is_none() {
            self.windows.push((id, BASE_Z_INDEX));
        }
    }

    pub fn unregister(&mut self, id: &WindowId) {
        self.windows.retain(|(window_id, _)| window_id != id);
    }

    /// Raise `id` above its siblings. Returns false for unknown windows,
    /// leaving the current order untouched.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        if self.z_index(id).is_none() {
            return false;
        }

        for (window_id, z_index) in self.windows.iter_mut() {
            *z_index = if window_id == id {
                FOCUSED_Z_INDEX
            } else {
                BASE_Z_INDEX
            };
        }
        true
    }

    pub fn z_index(&self, id: &WindowId) -> Option<u32> {
        self.windows
            .iter()
            .find(|(window_id, _)| window_id == id)
            .map(|(_, z_index)| *z_index)
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .find(|(_, z_index)| *z_index == FOCUSED_Z_INDEX)
            .map(|(window_id, _)| window_id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct FocusContext {
    registry: Signal<FocusRegistry>,
}

impl FocusContext {
    pub fn register(&self, id: WindowId) {
        let mut registry = self.registry;
        registry.write().register(id);
    }

    /// Tolerates a registry that was already dropped with its manager.
    pub fn unregister(&self, id: &WindowId) {
        let mut registry = self.registry;
        let Ok(mut windows) = registry.try_write() else {
            return;
        };
        windows.unregister(id);
    }

    pub fn focus(&self, id: &WindowId) {
        let mut registry = self.registry;
        if registry.write().focus(id) {
            dioxus_logger::tracing::debug!("Focused window {}", id);
        }
    }

    pub fn z_index(&self, id: &WindowId) -> Option<u32> {
        self.registry.read().z_index(id)
    }
}

/// Parent coordinator for a group of sibling windows.
#[component]
pub fn WindowManager(children: Element) -> Element {
    use_context_provider(|| FocusContext {
        registry: Signal::new(FocusRegistry::default()),
    });

    rsx! {
        div {
            class: "window-manager",
            style: "position: relative; width: 100%; height: 100%;",
            {children}
        }
    }
}

pub fn use_focus() -> Option<FocusContext> {
    try_use_context::<FocusContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> WindowId {
        WindowId(name.to_string())
    }

    #[test]
    fn last_focused_window_wins() {
        let mut registry = FocusRegistry::default();
        registry.register(id("a"));
        registry.register(id("b"));

        assert!(registry.focus(&id("a")));
        assert!(registry.focus(&id("b")));

        assert_eq!(registry.z_index(&id("b")), Some(FOCUSED_Z_INDEX));
        assert_eq!(registry.z_index(&id("a")), Some(BASE_Z_INDEX));
        assert_eq!(registry.focused(), Some(&id("b")));
    }

    #[test]
    fn at_most_one_window_on_top() {
        let mut registry = FocusRegistry::default();
        for name in ["a", "b", "c", "d"] {
            registry.register(id(name));
        }
        for name in ["c", "a", "d", "a", "b"] {
            registry.focus(&id(name));
            let on_top = ["a", "b", "c", "d"]
                .iter()
                .filter(|n| registry.z_index(&id(n)) == Some(FOCUSED_Z_INDEX))
                .count();
            assert_eq!(on_top, 1);
        }
    }

    #[test]
    fn unknown_window_does_not_reset_stack() {
        let mut registry = FocusRegistry::default();
        registry.register(id("a"));
        registry.focus(&id("a"));

        assert!(!registry.focus(&id("ghost")));
        assert_eq!(registry.z_index(&id("a")), Some(FOCUSED_Z_INDEX));
    }

    #[test]
    fn register_is_idempotent_and_unregister_removes() {
        let mut registry = FocusRegistry::default();
        registry.register(id("a"));
        registry.focus(&id("a"));
        registry.register(id("a"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.z_index(&id("a")), Some(FOCUSED_Z_INDEX));

        registry.unregister(&id("a"));
        assert!(registry.is_empty());
        assert_eq!(registry.focused(), None);
    }
}
