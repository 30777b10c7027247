//! The main-window state: the tab list, dock widgets, provider registry and
//! the dispatch paths between them.
//!
//! All mutation happens on the host's event thread; the workspace holds no
//! locks and assumes no concurrent access. Multi-step operations validate
//! before they mutate, so a failure or a declined confirmation leaves the
//! workspace untouched.
use std::path::{Path, PathBuf};

use crate::config::{NewWidgetBehavior, WorkspaceSettings};
use crate::models::{
    next_duplicate_title, DockId, DockSide, DockWidget, Payload, Size, SubWindow, TabList,
    WindowId, WindowRect, WindowState,
};
use crate::registry::{ProviderRegistry, ReadInput};
use crate::widgets::{AutoConfirm, Confirm, Widget};
use crate::{CoreError, Result};

/// The root object of one main window.
pub struct Workspace {
    pub settings: WorkspaceSettings,
    registry: ProviderRegistry,
    tabs: TabList,
    docks: Vec<DockWidget>,
    clipboard: Option<Payload>,
    area_size: Size,
    app_scope: Option<String>,
    next_window_id: WindowId,
    next_dock_id: DockId,
}

impl Workspace {
    /// A workspace with the builtin providers registered. `app_scope` keys
    /// the per-application widget-class override map.
    #[must_use]
    pub fn new(app_scope: Option<&str>) -> Self {
        Self::with_registry(app_scope, ProviderRegistry::with_defaults())
    }

    #[must_use]
    pub fn with_registry(app_scope: Option<&str>, registry: ProviderRegistry) -> Self {
        let settings = WorkspaceSettings::default();
        Self {
            area_size: settings.default_area_size,
            settings,
            registry,
            tabs: TabList::new(),
            docks: Vec::new(),
            clipboard: None,
            app_scope: app_scope.map(ToString::to_string),
            next_window_id: 0,
            next_dock_id: 0,
        }
    }

    #[must_use]
    pub const fn tabs(&self) -> &TabList {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabList {
        &mut self.tabs
    }

    #[must_use]
    pub const fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn app_scope(&self) -> Option<&str> {
        self.app_scope.as_deref()
    }

    #[must_use]
    pub const fn area_size(&self) -> Size {
        self.area_size
    }

    /// Propagate a main-window resize to every tab area, which re-applies
    /// the anchors of its windows.
    pub fn resize(&mut self, size: Size) {
        tracing::debug!(?size, "workspace resize");
        self.area_size = size;
        for tab in self.tabs.iter_mut() {
            tab.resize(size);
        }
    }

    /// Add a new tab and make it current. Returns its index.
    pub fn add_tab(&mut self, title: Option<&str>) -> usize {
        let title = title.map_or_else(|| format!("Tab-{}", self.tabs.len() + 1), ToString::to_string);
        self.tabs.add_tab(title, self.area_size)
    }

    fn alloc_window_id(&mut self) -> WindowId {
        self.next_window_id += 1;
        self.next_window_id
    }

    fn cascade_rect(&self, occupied: usize) -> WindowRect {
        let base = self.settings.default_window_rect;
        let step = 24 * (occupied % 8) as i32;
        WindowRect::new(base.left() + step, base.top() + step, base.width(), base.height())
    }

    /// Wrap a widget in a sub-window. Placement follows
    /// [`NewWidgetBehavior`]: either into the current tab (creating one if
    /// none exists), or into a fresh tab where the window fills the view.
    /// Returns `(tab_index, window_index)`.
    pub fn add_widget(
        &mut self,
        widget: Box<dyn Widget>,
        title: Option<String>,
    ) -> (usize, usize) {
        let id = self.alloc_window_id();
        let tab_index = match self.settings.new_widget_behavior {
            NewWidgetBehavior::Window => match self.tabs.current_index() {
                Some(index) => index,
                None => self.add_tab(Some("Tab")),
            },
            NewWidgetBehavior::Tab => self.add_tab(title.as_deref()),
        };
        self.tabs.set_current(tab_index);
        let occupied = self.tabs.get(tab_index).map_or(0, crate::models::TabArea::len);
        let rect = self.cascade_rect(occupied);
        let tab = self
            .tabs
            .get_mut(tab_index)
            .unwrap_or_else(|| unreachable!());
        let window = tab.add_widget(id, widget, title, rect);
        if self.settings.new_widget_behavior == NewWidgetBehavior::Tab {
            window.set_state(WindowState::FullScreen);
        }
        let window_index = tab.len() - 1;
        (tab_index, window_index)
    }

    /// Resolve a widget class for the payload's type tag, instantiate it and
    /// wrap it in a sub-window.
    pub fn add_payload(&mut self, payload: Payload) -> Result<(usize, usize)> {
        let class = self
            .registry
            .resolve_widget_class(self.app_scope.as_deref(), payload.type_tag())
            .clone();
        tracing::info!(tag = %payload.type_tag(), class = class.name(), "adding payload");
        let widget = class.from_payload(&payload)?;
        Ok(self.add_widget(widget, payload.display_title()))
    }

    /// Read a local file and open it as a new sub-window.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<(usize, usize)> {
        self.read_input(ReadInput::Single(path.as_ref().to_path_buf()))
    }

    /// Read a group of files through a provider that accepts path lists.
    pub fn read_files(&mut self, paths: Vec<PathBuf>) -> Result<(usize, usize)> {
        self.read_input(ReadInput::Multiple(paths))
    }

    fn read_input(&mut self, input: ReadInput) -> Result<(usize, usize)> {
        let reader = self.registry.resolve_reader(&input)?;
        let payload = reader(&input)?;
        self.add_payload(payload)
    }

    /// Export a window's content and write it through a resolved writer.
    /// On success the window is marked unmodified.
    pub fn save_window(&mut self, tab: usize, window: usize, destination: &Path) -> Result<()> {
        let payload = self
            .window(tab, window)?
            .to_payload()
            .ok_or_else(|| CoreError::NotExportable(self.window_title(tab, window)))?;
        let writer = self.registry.resolve_writer(&payload)?;
        writer(&payload, destination)?;
        tracing::info!(tab, window, path = %destination.display(), "window saved");
        self.window_mut(tab, window)?.set_modified(false);
        Ok(())
    }

    /// Duplicate a window: export its payload, bump the bracketed counter in
    /// the title and open the copy as a new window in the same tab.
    pub fn duplicate_window(&mut self, tab: usize, window: usize) -> Result<(usize, usize)> {
        let source = self.window(tab, window)?;
        let title = next_duplicate_title(&source.title);
        let payload = source
            .to_payload()
            .ok_or_else(|| CoreError::NotExportable(source.title.clone()))?
            .with_title(title);
        self.tabs.set_current(tab);
        self.add_payload(payload)
    }

    /// Move a window into a dedicated new tab and make it full screen. The
    /// move is atomic: it either fully happens or nothing changes, and the
    /// window is never absent from all tabs. Returns the new tab's index.
    pub fn full_screen_in_new_tab(&mut self, tab: usize, window: usize) -> Result<usize> {
        // validate before creating the tab so failure has no side effects
        let title = self.window_title_checked(tab, window)?;
        let mut moved = self
            .tabs
            .get_mut(tab)
            .and_then(|t| t.remove_window(window))
            .unwrap_or_else(|| unreachable!());
        moved.set_state(WindowState::FullScreen);
        let new_tab = self.add_tab(Some(&title));
        self.tabs
            .get_mut(new_tab)
            .unwrap_or_else(|| unreachable!())
            .push_window(moved);
        tracing::info!(from = tab, to = new_tab, "window promoted to its own tab");
        Ok(new_tab)
    }

    /// Move every window of `source` into `target` and remove the now-empty
    /// source tab. Returns false (and changes nothing) for bad indices.
    pub fn merge_tabs(&mut self, source: usize, target: usize) -> bool {
        if source == target
            || self.tabs.get(source).is_none()
            || self.tabs.get(target).is_none()
        {
            return false;
        }
        let windows = self
            .tabs
            .get_mut(source)
            .unwrap_or_else(|| unreachable!())
            .drain_windows();
        let target_tab = self.tabs.get_mut(target).unwrap_or_else(|| unreachable!());
        for window in windows {
            target_tab.push_window(window);
        }
        self.tabs.remove_tab(source);
        let target = if source < target { target - 1 } else { target };
        self.tabs.set_current(target);
        true
    }

    /// Close a tab after one batched confirmation over its modified windows.
    pub fn close_tab(&mut self, index: usize, confirm: &mut dyn Confirm) -> bool {
        let Some(tab) = self.tabs.get_mut(index) else {
            return false;
        };
        let cleared = if self.settings.confirm_on_close {
            tab.clear(confirm)
        } else {
            tab.clear(&mut AutoConfirm)
        };
        if cleared {
            self.tabs.remove_tab(index);
        }
        cleared
    }

    /// Close one window, honoring `confirm_on_close`.
    pub fn close_window(&mut self, tab: usize, window: usize, confirm: &mut dyn Confirm) -> bool {
        let Some(tab) = self.tabs.get_mut(tab) else {
            return false;
        };
        if self.settings.confirm_on_close {
            tab.close_window(window, confirm)
        } else {
            tab.close_window(window, &mut AutoConfirm)
        }
    }

    /// Track a host-owned dock widget. The core stores only its state; the
    /// host keeps the widget itself and looks it up by the returned id.
    pub fn add_dock_widget(&mut self, title: &str, side: DockSide) -> DockId {
        self.next_dock_id += 1;
        let id = self.next_dock_id;
        self.docks.push(DockWidget::new(id, title, side));
        id
    }

    #[must_use]
    pub fn dock(&self, id: DockId) -> Option<&DockWidget> {
        self.docks.iter().find(|dock| dock.id == id)
    }

    pub fn set_dock_visible(&mut self, id: DockId, visible: bool) -> bool {
        self.dock_mut(id).is_some_and(|dock| {
            dock.visible = visible;
            true
        })
    }

    pub fn set_dock_title(&mut self, id: DockId, title: &str) -> bool {
        self.dock_mut(id).is_some_and(|dock| {
            dock.title = title.to_string();
            true
        })
    }

    fn dock_mut(&mut self, id: DockId) -> Option<&mut DockWidget> {
        self.docks.iter_mut().find(|dock| dock.id == id)
    }

    #[must_use]
    pub fn docks(&self) -> &[DockWidget] {
        &self.docks
    }

    pub fn set_clipboard(&mut self, payload: Payload) {
        self.clipboard = Some(payload);
    }

    #[must_use]
    pub const fn clipboard(&self) -> Option<&Payload> {
        self.clipboard.as_ref()
    }

    /// `(tab_index, window_index)` of the active window, if any.
    #[must_use]
    pub fn current_window_pos(&self) -> Option<(usize, usize)> {
        let tab = self.tabs.current_index()?;
        let window = self.tabs.get(tab)?.current_index()?;
        Some((tab, window))
    }

    pub(crate) fn window(&self, tab: usize, window: usize) -> Result<&SubWindow> {
        self.tabs
            .get(tab)
            .and_then(|t| t.get(window))
            .ok_or(CoreError::WindowNotFound { tab, window })
    }

    pub(crate) fn window_mut(&mut self, tab: usize, window: usize) -> Result<&mut SubWindow> {
        self.tabs
            .get_mut(tab)
            .and_then(|t| t.get_mut(window))
            .ok_or(CoreError::WindowNotFound { tab, window })
    }

    fn window_title(&self, tab: usize, window: usize) -> String {
        self.window(tab, window)
            .map(|w| w.title.clone())
            .unwrap_or_default()
    }

    fn window_title_checked(&self, tab: usize, window: usize) -> Result<String> {
        Ok(self.window(tab, window)?.title.clone())
    }
}
