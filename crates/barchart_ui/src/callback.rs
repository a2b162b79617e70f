//! Optional event handler wrapper used by widgets.
//!
//! Widgets hold a `Callback<T, M>` instead of a bare `Option<Box<dyn Fn(T) -> M>>`;
//! an unset callback simply produces no message.

use std::fmt;

/// An optional boxed handler turning a widget value into an application message.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// An empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler, if one is set.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_some", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_produces_nothing() {
        let cb: Callback<usize, usize> = Callback::none();
        assert_eq!(cb.call(3), None);
        assert!(!cb.is_some());
    }

    #[test]
    fn test_call_maps_value() {
        let cb = Callback::new(|i: usize| i * 2);
        assert_eq!(cb.call(4), Some(8));
    }
}
