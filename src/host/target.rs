//! The document-level presentation root.

use std::cell::RefCell;
use std::rc::Rc;

use crate::theme::ColorMode;

/// Something that carries presentation markers, like the class list of a
/// document's root element.
pub trait PresentationTarget {
    /// Adds a marker. Adding a marker that is already present is a no-op.
    fn add_marker(&self, marker: &str);

    /// Removes a marker. Removing an absent marker is a no-op.
    fn remove_marker(&self, marker: &str);
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for Rc<T> {
    fn add_marker(&self, marker: &str) {
        (**self).add_marker(marker)
    }

    fn remove_marker(&self, marker: &str) {
        (**self).remove_marker(marker)
    }
}

/// Applies `mode` to `target`, clearing both color markers first so exactly
/// one of them is present afterwards.
pub fn apply_color_mode<T: PresentationTarget + ?Sized>(target: &T, mode: ColorMode) {
    for marker in ColorMode::ALL {
        target.remove_marker(marker.marker());
    }
    target.add_marker(mode.marker());
}

/// An ordered set of class names standing in for a root element.
///
/// Classes other than the color markers are left untouched by the store.
#[derive(Debug, Default)]
pub struct ClassList {
    classes: RefCell<Vec<String>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a class list with initial classes (duplicates are dropped).
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = Self::new();
        for class in classes {
            list.add_marker(class.as_ref());
        }
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    /// Returns a copy of the classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Returns the color modes whose markers are present.
    pub fn color_modes(&self) -> Vec<ColorMode> {
        ColorMode::ALL
            .into_iter()
            .filter(|mode| self.contains(mode.marker()))
            .collect()
    }

    /// Returns the applied color mode if exactly one marker is present.
    pub fn color_mode(&self) -> Option<ColorMode> {
        match self.color_modes().as_slice() {
            [mode] => Some(*mode),
            _ => None,
        }
    }
}

impl PresentationTarget for ClassList {
    fn add_marker(&self, marker: &str) {
        if !self.contains(marker) {
            self.classes.borrow_mut().push(marker.to_string());
        }
    }

    fn remove_marker(&self, marker: &str) {
        self.classes.borrow_mut().retain(|c| c != marker);
    }
}
