//! A tab area: an ordered collection of sub-windows plus the active index.
use crate::layouts;
use crate::models::{Size, SubWindow, WindowId, WindowRect, WindowState};
use crate::utils::helpers;
use crate::widgets::{Confirm, Widget};

/// One tab of the main window, holding a free-floating arrangement of
/// sub-windows. Insertion order doubles as activation history unless
/// explicitly reordered. Dropping an area drops all its windows.
#[derive(Debug)]
pub struct TabArea {
    pub title: String,
    windows: Vec<SubWindow>,
    current_index: Option<usize>,
    size: Size,
}

impl TabArea {
    #[must_use]
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            windows: Vec::new(),
            current_index: None,
            size,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubWindow> {
        self.windows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SubWindow> {
        self.windows.iter_mut()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SubWindow> {
        self.windows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SubWindow> {
        self.windows.get_mut(index)
    }

    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.windows.len() {
            self.current_index = Some(index);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&SubWindow> {
        self.windows.get(self.current_index?)
    }

    pub fn current_mut(&mut self) -> Option<&mut SubWindow> {
        self.windows.get_mut(self.current_index?)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Wrap a widget in a new sub-window and make it current. The title
    /// falls back to an automatically generated one.
    pub fn add_widget(
        &mut self,
        id: WindowId,
        widget: Box<dyn Widget>,
        title: Option<String>,
        rect: WindowRect,
    ) -> &mut SubWindow {
        let title = title.unwrap_or_else(|| format!("Window-{id}"));
        tracing::info!(window = id, title, tab = self.title, "adding sub-window");
        self.push_window(SubWindow::new(id, widget, title, rect))
    }

    /// Append an existing window (e.g. moved from another tab) and make it
    /// current.
    pub fn push_window(&mut self, window: SubWindow) -> &mut SubWindow {
        self.windows.push(window);
        self.current_index = Some(self.windows.len() - 1);
        self.windows.last_mut().unwrap_or_else(|| unreachable!())
    }

    /// Remove a window without any confirmation, fixing up the active index.
    pub fn remove_window(&mut self, index: usize) -> Option<SubWindow> {
        if index >= self.windows.len() {
            return None;
        }
        let window = self.windows.remove(index);
        self.current_index =
            helpers::index_after_removal(self.windows.len(), self.current_index, index);
        Some(window)
    }

    /// Close a window, asking `confirm` first if it holds unsaved changes.
    /// A declined confirmation aborts the close: the window stays exactly as
    /// it was. Returns whether the window was closed.
    pub fn close_window(&mut self, index: usize, confirm: &mut dyn Confirm) -> bool {
        let Some(window) = self.windows.get(index) else {
            return false;
        };
        if window.is_modified() {
            let message = format!("{:?} has unsaved changes. Close anyway?", window.title);
            if !confirm.confirm(&message) {
                tracing::info!(window = window.id, "close cancelled");
                return false;
            }
        }
        self.remove_window(index).is_some()
    }

    /// Close every window in the area behind a single batched confirmation
    /// listing the modified titles. Declining leaves all windows untouched.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> bool {
        let modified: Vec<&str> = self
            .windows
            .iter()
            .filter(|w| w.is_modified())
            .map(|w| w.title.as_str())
            .collect();
        if !modified.is_empty() {
            let message = format!(
                "Some windows are modified:\n{}\nClose without saving?",
                modified
                    .iter()
                    .map(|t| format!("- {t}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            if !confirm.confirm(&message) {
                return false;
            }
        }
        self.windows.clear();
        self.current_index = None;
        true
    }

    /// React to a viewport resize: anchored windows are repositioned so the
    /// offset from their corner stays constant; unanchored rects are left
    /// untouched.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        for window in &mut self.windows {
            if let Some(rect) = window.anchor().apply_anchor(size, window.rect().size()) {
                window.set_rect_only(rect);
            }
        }
    }

    /// The geometry a window currently occupies, derived from its state.
    /// `None` for minimized windows.
    #[must_use]
    pub fn effective_rect(&self, index: usize) -> Option<WindowRect> {
        let window = self.windows.get(index)?;
        match window.state() {
            WindowState::Minimized => None,
            WindowState::Normal => Some(window.rect()),
            WindowState::Maximized | WindowState::FullScreen => {
                Some(WindowRect::new(0, 0, self.size.width, self.size.height))
            }
        }
    }

    /// Tile all windows into a near-square grid. See [`layouts::tile_windows`].
    pub fn tile_windows(&mut self) {
        layouts::tile_windows(self.size, &mut self.windows);
    }

    /// Minimize every window except the current one.
    pub fn minimize_others(&mut self) {
        let Some(current) = self.current_index else {
            return;
        };
        for (i, window) in self.windows.iter_mut().enumerate() {
            if i != current {
                window.set_state(WindowState::Minimized);
            }
        }
    }

    /// Restore every minimized window to normal.
    pub fn show_all(&mut self) {
        for window in &mut self.windows {
            if window.state() == WindowState::Minimized {
                window.set_state(WindowState::Normal);
            }
        }
    }

    pub fn activate_next(&mut self) {
        self.activate_relative(1);
    }

    pub fn activate_previous(&mut self) {
        self.activate_relative(-1);
    }

    fn activate_relative(&mut self, shift: i64) {
        let current = self.current_index.unwrap_or(0);
        self.current_index = helpers::wrapping_index(self.windows.len(), current, shift);
    }

    /// Move all windows out of the area, leaving it empty.
    pub(crate) fn drain_windows(&mut self) -> Vec<SubWindow> {
        self.current_index = None;
        std::mem::take(&mut self.windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Payload, Value, WindowAnchor};
    use crate::widgets::{AutoConfirm, PayloadEditor};

    struct Decline;
    impl Confirm for Decline {
        fn confirm(&mut self, _message: &str) -> bool {
            false
        }
    }

    const SIZE: Size = Size::new(800, 600);

    fn area_with(count: usize) -> TabArea {
        let mut area = TabArea::new("tab", SIZE);
        let payload = Payload::new(Value::Text("body".into()));
        for i in 0..count {
            area.add_widget(
                i as u32,
                Box::new(PayloadEditor::new(&payload)),
                Some(format!("w{i}")),
                WindowRect::new(20, 20, 200, 100),
            );
        }
        area
    }

    #[test]
    fn adding_makes_the_new_window_current() {
        let area = area_with(3);
        assert_eq!(area.current_index(), Some(2));
        assert_eq!(area.current().unwrap().title, "w2");
    }

    #[test]
    fn declined_confirmation_aborts_the_close() {
        let mut area = area_with(2);
        area.get_mut(0).unwrap().set_modified(true);
        let before = area.get(0).unwrap().rect();

        assert!(!area.close_window(0, &mut Decline));
        assert_eq!(area.len(), 2);
        assert_eq!(area.get(0).unwrap().rect(), before);
        assert!(area.get(0).unwrap().is_modified());
    }

    #[test]
    fn unmodified_windows_close_without_asking() {
        let mut area = area_with(2);
        assert!(area.close_window(0, &mut Decline));
        assert_eq!(area.len(), 1);
    }

    #[test]
    fn clear_is_all_or_nothing() {
        let mut area = area_with(3);
        area.get_mut(1).unwrap().set_modified(true);

        assert!(!area.clear(&mut Decline));
        assert_eq!(area.len(), 3);

        assert!(area.clear(&mut AutoConfirm));
        assert!(area.is_empty());
        assert_eq!(area.current_index(), None);
    }

    #[test]
    fn resize_repositions_only_anchored_windows() {
        let mut area = area_with(2);
        let rect = WindowRect::new(600, 500, 200, 100);
        area.get_mut(0).unwrap().set_rect(SIZE, rect);
        area.get_mut(0)
            .unwrap()
            .set_anchor(SIZE, WindowAnchor::BottomRightConst { right: 0, bottom: 0 });
        let free = area.get(1).unwrap().rect();

        area.resize(Size::new(1000, 800));
        assert_eq!(area.get(0).unwrap().rect(), WindowRect::new(800, 700, 200, 100));
        assert_eq!(area.get(1).unwrap().rect(), free);
    }

    #[test]
    fn effective_rect_follows_the_state() {
        let mut area = area_with(1);
        assert_eq!(area.effective_rect(0), Some(WindowRect::new(20, 20, 200, 100)));

        area.get_mut(0).unwrap().set_state(WindowState::Maximized);
        assert_eq!(area.effective_rect(0), Some(WindowRect::new(0, 0, 800, 600)));

        area.get_mut(0).unwrap().set_state(WindowState::Minimized);
        assert_eq!(area.effective_rect(0), None);
    }

    #[test]
    fn minimize_others_spares_the_current_window() {
        let mut area = area_with(3);
        area.set_current(1);
        area.minimize_others();
        assert_eq!(area.get(0).unwrap().state(), WindowState::Minimized);
        assert_eq!(area.get(1).unwrap().state(), WindowState::Normal);
        assert_eq!(area.get(2).unwrap().state(), WindowState::Minimized);

        area.show_all();
        assert!(area.iter().all(|w| w.state() == WindowState::Normal));
    }

    #[test]
    fn activation_cycles_through_windows() {
        let mut area = area_with(3);
        area.set_current(2);
        area.activate_next();
        assert_eq!(area.current_index(), Some(0));
        area.activate_previous();
        assert_eq!(area.current_index(), Some(2));
    }

    #[test]
    fn removal_fixes_up_the_current_index() {
        let mut area = area_with(3);
        area.set_current(2);
        area.remove_window(0);
        assert_eq!(area.current_index(), Some(1));
        assert_eq!(area.current().unwrap().title, "w2");
    }
}
