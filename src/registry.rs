//! Explicit "already bound" bookkeeping.
//!
//! DESIGN
//! ======
//! Instead of tagging DOM nodes with ad hoc marker properties, components
//! that must act at most once per element keep a `Registry` of the elements
//! they have handled. Elements are compared with `PartialEq`, which for
//! browser handles is node identity.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Set of elements a component has already handled.
#[derive(Clone, Debug)]
pub struct Registry<E> {
    bound: Vec<E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { bound: Vec::new() }
    }
}

impl<E: PartialEq> Registry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `element` has already been recorded.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.bound.iter().any(|e| e == element)
    }

    /// Record `element`. Returns `false` if it was already present.
    pub fn insert(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.bound.push(element);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
