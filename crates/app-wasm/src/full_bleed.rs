//! Full-bleed document styling
//!
//! The canvas fills the page, so the body loses its default margin and
//! scrollbars while the viewer is mounted. [`FullBleedGuard`] applies the
//! styles on acquire and puts the previous inline values back on drop.

use web_sys::CssStyleDeclaration;

use crate::error::ShellError;

/// Inline styles applied to the body while the guard is held
pub const FULL_BLEED_STYLES: [(&str, &str); 3] =
    [("margin", "0"), ("padding", "0"), ("overflow", "hidden")];

/// A set of inline style properties
pub trait StyleTarget {
    /// Current inline value, empty when unset
    fn get(&self, property: &str) -> Result<String, ShellError>;

    /// Set an inline value; an empty value removes the property
    fn set(&mut self, property: &str, value: &str) -> Result<(), ShellError>;
}

/// Holds the full-bleed styles on a target until dropped
pub struct FullBleedGuard<S: StyleTarget> {
    target: S,
    saved: Vec<(&'static str, String)>,
}

impl<S: StyleTarget> FullBleedGuard<S> {
    /// Record the current values and apply the full-bleed styles.
    ///
    /// On failure any styles already applied are rolled back.
    pub fn acquire(mut target: S) -> Result<Self, ShellError> {
        let mut saved = Vec::with_capacity(FULL_BLEED_STYLES.len());
        for (property, _) in FULL_BLEED_STYLES {
            saved.push((property, target.get(property)?));
        }

        for (applied, (property, value)) in FULL_BLEED_STYLES.iter().enumerate() {
            if let Err(e) = target.set(property, value) {
                restore(&mut target, &saved[..applied]);
                return Err(e);
            }
        }

        Ok(Self { target, saved })
    }

    pub fn target(&self) -> &S {
        &self.target
    }
}

impl<S: StyleTarget> Drop for FullBleedGuard<S> {
    fn drop(&mut self) {
        restore(&mut self.target, &self.saved);
    }
}

fn restore<S: StyleTarget>(target: &mut S, saved: &[(&'static str, String)]) {
    for (property, value) in saved {
        // Best effort; nothing useful can be done with a failure here
        let _ = target.set(property, value);
    }
}

/// Inline style of a DOM element
pub struct ElementStyle(CssStyleDeclaration);

impl ElementStyle {
    /// Style of the document body
    pub fn body(document: &web_sys::Document) -> Result<Self, ShellError> {
        let body = document.body().ok_or(ShellError::NoBody)?;
        Ok(Self(body.style()))
    }
}

impl StyleTarget for ElementStyle {
    fn get(&self, property: &str) -> Result<String, ShellError> {
        Ok(self.0.get_property_value(property)?)
    }

    fn set(&mut self, property: &str, value: &str) -> Result<(), ShellError> {
        if value.is_empty() {
            self.0.remove_property(property)?;
        } else {
            self.0.set_property(property, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory style map shared with the test after the guard is dropped
    #[derive(Clone, Default)]
    struct MemoryStyle {
        values: Rc<RefCell<HashMap<String, String>>>,
        fail_on: Option<&'static str>,
    }

    impl MemoryStyle {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let style = Self::default();
            for (k, v) in pairs {
                style.values.borrow_mut().insert(k.to_string(), v.to_string());
            }
            style
        }

        fn value(&self, property: &str) -> String {
            self.values.borrow().get(property).cloned().unwrap_or_default()
        }
    }

    impl StyleTarget for MemoryStyle {
        fn get(&self, property: &str) -> Result<String, ShellError> {
            Ok(self.value(property))
        }

        fn set(&mut self, property: &str, value: &str) -> Result<(), ShellError> {
            if self.fail_on == Some(property) {
                return Err(ShellError::Dom(format!("cannot set {}", property)));
            }
            let mut values = self.values.borrow_mut();
            if value.is_empty() {
                values.remove(property);
            } else {
                values.insert(property.to_string(), value.to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_acquire_applies_full_bleed() {
        let style = MemoryStyle::default();
        let guard = FullBleedGuard::acquire(style.clone()).unwrap();
        assert_eq!(guard.target().value("margin"), "0");
        assert_eq!(style.value("padding"), "0");
        assert_eq!(style.value("overflow"), "hidden");
    }

    #[test]
    fn test_drop_restores_previous_values() {
        let style = MemoryStyle::with(&[("margin", "8px"), ("overflow", "auto"), ("color", "red")]);
        let guard = FullBleedGuard::acquire(style.clone()).unwrap();
        drop(guard);

        assert_eq!(style.value("margin"), "8px");
        assert_eq!(style.value("overflow"), "auto");
        // Previously unset properties are removed again
        assert!(!style.values.borrow().contains_key("padding"));
        assert_eq!(style.value("color"), "red");
    }

    #[test]
    fn test_failed_acquire_rolls_back() {
        let mut style = MemoryStyle::with(&[("margin", "8px")]);
        style.fail_on = Some("overflow");

        let result = FullBleedGuard::acquire(style.clone());
        assert!(matches!(result, Err(ShellError::Dom(_))));
        assert_eq!(style.value("margin"), "8px");
        assert!(!style.values.borrow().contains_key("padding"));
    }
}
