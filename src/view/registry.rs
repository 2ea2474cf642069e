use std::rc::Rc;

use super::SharedView;

/// Shared handle to a registry. Controllers of one document hold clones of
/// the same handle.
pub type SharedRegistry = Rc<ViewRegistry>;

/// Views keyed by an opaque string, in insertion order.
///
/// The first inserted view is the default active view for controllers.
/// Several keys may alias the same view.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    entries: Vec<(String, SharedView)>,
}

impl ViewRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `view` under `key`. Replacing an existing key keeps its
    /// position and returns the previous view.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        view: SharedView,
    ) -> Option<SharedView> {
        let key = key.into();
        if let Some((_, slot)) =
            self.entries.iter_mut().find(|(k, _)| *k == key)
        {
            return Some(std::mem::replace(slot, view));
        }
        self.entries.push((key, view));
        None
    }

    /// Wrap the registry in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedRegistry {
        Rc::new(self)
    }

    /// View registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SharedView> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// First registered entry.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &SharedView)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `key` is registered.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedView)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct views in order of first registration; aliases collapse.
    #[must_use]
    pub fn unique_views(&self) -> Vec<SharedView> {
        let mut views: Vec<SharedView> = Vec::with_capacity(self.entries.len());
        for (_, view) in &self.entries {
            if !views.iter().any(|v| Rc::ptr_eq(v, view)) {
                views.push(Rc::clone(view));
            }
        }
        views
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no view is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
