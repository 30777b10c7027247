//! Wrapper struct holding all the tab areas of a main window.
use crate::models::{Size, TabArea};
use crate::utils::helpers;

/// Ordered collection of named tab areas plus the active index. Tab titles
/// need not be unique; lookup by title resolves to the first match.
#[derive(Debug, Default)]
pub struct TabList {
    tabs: Vec<TabArea>,
    current_index: Option<usize>,
}

impl TabList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabArea> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TabArea> {
        self.tabs.iter_mut()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TabArea> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TabArea> {
        self.tabs.get_mut(index)
    }

    /// First tab with the given title.
    #[must_use]
    pub fn by_title(&self, title: &str) -> Option<&TabArea> {
        self.tabs.iter().find(|tab| tab.title == title)
    }

    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.current_index = Some(index);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&TabArea> {
        self.tabs.get(self.current_index?)
    }

    pub fn current_mut(&mut self) -> Option<&mut TabArea> {
        self.tabs.get_mut(self.current_index?)
    }

    /// Append a new empty tab and make it current. Returns its index.
    pub fn add_tab(&mut self, title: impl Into<String>, size: Size) -> usize {
        self.tabs.push(TabArea::new(title, size));
        let index = self.tabs.len() - 1;
        self.current_index = Some(index);
        index
    }

    /// Remove a tab, dropping all its windows, and fix up the active index.
    pub fn remove_tab(&mut self, index: usize) -> Option<TabArea> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);
        self.current_index = helpers::index_after_removal(self.tabs.len(), self.current_index, index);
        Some(tab)
    }
}
