//! Light/dark theme flag provided as an app-wide context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use crate::util::dark_mode;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug)]
pub struct ThemeState {
    pub dark: bool,
    storage: Arc<dyn KeyValueStore>,
}

impl ThemeState {
    /// Load the stored preference and apply it to the document.
    #[must_use]
    pub fn from_preference(storage: Arc<dyn KeyValueStore>) -> Self {
        let dark = dark_mode::read_preference(storage.as_ref());
        dark_mode::apply(dark);
        Self { dark, storage }
    }

    pub fn toggle(&mut self) {
        self.dark = dark_mode::toggle(self.storage.as_ref(), self.dark);
    }
}
