//! A floating sub-window wrapping one content widget.
use std::fmt;

use crate::models::{Payload, Size, WindowAnchor, WindowId, WindowRect, WindowState};
use crate::widgets::Widget;

/// One floating window inside a tab area. Owns its content widget
/// exclusively; a widget is never shared across sub-windows.
pub struct SubWindow {
    pub id: WindowId,
    pub title: String,
    state: WindowState,
    rect: WindowRect,
    anchor: WindowAnchor,
    widget: Box<dyn Widget>,
}

impl fmt::Debug for SubWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubWindow {{ id: {}, title: {:?}, state: {}, rect: {:?} }}",
            self.id, self.title, self.state, self.rect
        )
    }
}

impl SubWindow {
    #[must_use]
    pub fn new(id: WindowId, widget: Box<dyn Widget>, title: String, rect: WindowRect) -> Self {
        Self {
            id,
            title,
            state: WindowState::Normal,
            rect,
            anchor: WindowAnchor::NoAnchor,
            widget,
        }
    }

    #[must_use]
    pub const fn state(&self) -> WindowState {
        self.state
    }

    /// Set the window state. Minimizing and restoring never touch `rect` or
    /// `anchor`; the rect stays valid for the next return to `Normal`.
    pub fn set_state(&mut self, state: WindowState) {
        if self.state != state {
            tracing::debug!(window = self.id, from = %self.state, to = %state, "window state");
            self.state = state;
        }
    }

    pub fn toggle_full_screen(&mut self) {
        self.set_state(self.state.toggled_full_screen());
    }

    #[must_use]
    pub const fn rect(&self) -> WindowRect {
        self.rect
    }

    /// Manual move/resize by the user. Refreshes the anchor so the new
    /// position becomes the offset future parent resizes preserve; it does
    /// not clear the anchor.
    pub fn set_rect(&mut self, parent: Size, rect: WindowRect) {
        self.rect = rect;
        self.anchor = self.anchor.update_for_window_rect(parent, rect);
    }

    /// Geometry write that bypasses anchor re-derivation. Used by anchor
    /// recompute itself and by tiling.
    pub(crate) fn set_rect_only(&mut self, rect: WindowRect) {
        self.rect = rect;
    }

    #[must_use]
    pub const fn anchor(&self) -> WindowAnchor {
        self.anchor
    }

    /// Anchor the window at its current position: the offset is captured
    /// from the current rect at the chosen corner.
    pub fn set_anchor(&mut self, parent: Size, anchor: WindowAnchor) {
        self.anchor = anchor.update_for_window_rect(parent, self.rect);
    }

    pub fn clear_anchor(&mut self) {
        self.anchor = WindowAnchor::NoAnchor;
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.widget.is_modified()
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.widget.set_modified(modified);
    }

    #[must_use]
    pub fn is_exportable(&self) -> bool {
        self.widget.is_exportable()
    }

    /// Export the widget's content, titled with the window title when the
    /// widget does not provide one. `None` for non-exportable widgets.
    #[must_use]
    pub fn to_payload(&self) -> Option<Payload> {
        let payload = self.widget.to_payload()?;
        if payload.title.is_some() {
            Some(payload)
        } else {
            Some(payload.with_title(self.title.clone()))
        }
    }

    #[must_use]
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        self.widget.as_mut()
    }
}

/// Title for a duplicated window: `"Foo"` becomes `"Foo [1]"`, `"Foo [1]"`
/// becomes `"Foo [2]"`. A pure string transform; collisions across windows
/// are possible and not deduplicated.
#[must_use]
pub fn next_duplicate_title(title: &str) -> String {
    if let Some((head, last)) = title.rsplit_once(' ') {
        if let Some(digits) = last.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if let Ok(n) = digits.parse::<u64>() {
                return format!("{head} [{}]", n + 1);
            }
        }
    }
    format!("{title} [1]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{PayloadEditor, Widget};
    use crate::models::Value;

    fn window() -> SubWindow {
        let payload = Payload::new(Value::Text("hello".into()));
        SubWindow::new(
            1,
            Box::new(PayloadEditor::new(&payload)),
            "Win".to_string(),
            WindowRect::new(10, 20, 200, 100),
        )
    }

    #[test]
    fn duplicate_titles_count_up() {
        assert_eq!(next_duplicate_title("Foo"), "Foo [1]");
        assert_eq!(next_duplicate_title("Foo [1]"), "Foo [2]");
        assert_eq!(next_duplicate_title("Foo [9]"), "Foo [10]");
        // bracketed suffixes that are not counters are left alone
        assert_eq!(next_duplicate_title("Foo [bar]"), "Foo [bar] [1]");
        assert_eq!(next_duplicate_title("Foo[2]"), "Foo[2] [1]");
    }

    #[test]
    fn minimizing_preserves_rect_and_anchor() {
        let parent = Size::new(800, 600);
        let mut win = window();
        win.set_anchor(parent, WindowAnchor::TopLeftConst { left: 0, top: 0 });
        let (rect, anchor) = (win.rect(), win.anchor());

        win.set_state(WindowState::Minimized);
        win.set_state(WindowState::Normal);
        assert_eq!(win.rect(), rect);
        assert_eq!(win.anchor(), anchor);
    }

    #[test]
    fn manual_move_re_anchors_at_the_same_corner() {
        let parent = Size::new(800, 600);
        let mut win = window();
        win.set_anchor(parent, WindowAnchor::BottomRightConst { right: 0, bottom: 0 });

        win.set_rect(parent, WindowRect::new(600, 500, 200, 100));
        assert_eq!(
            win.anchor(),
            WindowAnchor::BottomRightConst { right: 0, bottom: 0 }
        );

        win.set_rect(parent, WindowRect::new(500, 400, 200, 100));
        assert_eq!(
            win.anchor(),
            WindowAnchor::BottomRightConst { right: 100, bottom: 100 }
        );
    }

    #[test]
    fn exported_payload_inherits_the_window_title() {
        let win = window();
        assert_eq!(win.to_payload().unwrap().title.as_deref(), Some("Win"));
    }

    #[test]
    fn non_exportable_widget_yields_no_payload() {
        struct Plain;
        impl Widget for Plain {}
        let win = SubWindow::new(1, Box::new(Plain), "p".into(), WindowRect::default());
        assert!(win.to_payload().is_none());
        assert!(!win.is_exportable());
    }
}
