//! Applies [`Command`]s to a [`Workspace`].
use crate::command::{Command, WindowAlign};
use crate::models::WindowState;
use crate::widgets::{AutoConfirm, Confirm};
use crate::workspace::Workspace;
use crate::Result;

impl Workspace {
    /// Apply a command. Returns whether anything changed. Window-level
    /// commands silently do nothing when no window is active; hard failures
    /// (no provider, bad index) surface as errors with no partial mutation.
    pub fn execute(&mut self, command: Command, confirm: &mut dyn Confirm) -> Result<bool> {
        tracing::debug!(?command, "executing");
        match command {
            Command::NewTab { title } => {
                self.add_tab(title.as_deref());
                Ok(true)
            }
            Command::CloseTab { index } => Ok(self.close_tab(index, confirm)),
            Command::MergeTabs { source, target } => Ok(self.merge_tabs(source, target)),
            Command::ReadFile { path } => {
                self.read_file(&path)?;
                Ok(true)
            }
            Command::SaveWindowAs { path } => {
                let Some((tab, window)) = self.current_window_pos() else {
                    return Ok(false);
                };
                self.save_window(tab, window, &path)?;
                Ok(true)
            }
            Command::CloseWindow => {
                let Some((tab, window)) = self.current_window_pos() else {
                    return Ok(false);
                };
                Ok(self.close_window(tab, window, confirm))
            }
            Command::CloseAllWindows => {
                let ask = self.settings.confirm_on_close;
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                if ask {
                    Ok(tab.clear(confirm))
                } else {
                    Ok(tab.clear(&mut AutoConfirm))
                }
            }
            Command::DuplicateWindow => {
                let Some((tab, window)) = self.current_window_pos() else {
                    return Ok(false);
                };
                self.duplicate_window(tab, window)?;
                Ok(true)
            }
            Command::RenameWindow { title } => Ok(self.with_current_window(|window| {
                window.title = title;
            })),
            // Entering FullScreen always goes through the tab move: a full
            // screen window never shares a tab with other windows.
            Command::SetWindowState { state: WindowState::FullScreen } => {
                let Some((tab, window)) = self.current_window_pos() else {
                    return Ok(false);
                };
                self.full_screen_in_new_tab(tab, window)?;
                Ok(true)
            }
            Command::SetWindowState { state } => Ok(self.with_current_window(|window| {
                window.set_state(state);
            })),
            Command::ToggleFullScreen => {
                Ok(self.with_current_window(crate::models::SubWindow::toggle_full_screen))
            }
            Command::FullScreenInNewTab => {
                let Some((tab, window)) = self.current_window_pos() else {
                    return Ok(false);
                };
                self.full_screen_in_new_tab(tab, window)?;
                Ok(true)
            }
            Command::MinimizeOtherWindows => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                tab.minimize_others();
                Ok(true)
            }
            Command::ShowAllWindows => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                tab.show_all();
                Ok(true)
            }
            Command::AlignWindow { align } => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                let size = tab.size();
                let Some(window) = tab.current_mut() else {
                    return Ok(false);
                };
                let rect = window.rect();
                let aligned = match align {
                    WindowAlign::Left => rect.align_left(),
                    WindowAlign::Right => rect.align_right(size),
                    WindowAlign::Top => rect.align_top(size),
                    WindowAlign::Bottom => rect.align_bottom(size),
                    WindowAlign::Center => rect.align_center(size),
                };
                window.set_rect(size, aligned);
                Ok(true)
            }
            Command::ResizeWindow { fx, fy } => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                let size = tab.size();
                let Some(window) = tab.current_mut() else {
                    return Ok(false);
                };
                let resized = window.rect().resize_relative(fx, fy);
                window.set_rect(size, resized);
                Ok(true)
            }
            Command::SetAnchor { anchor } => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                let size = tab.size();
                let Some(window) = tab.current_mut() else {
                    return Ok(false);
                };
                window.set_anchor(size, anchor);
                Ok(true)
            }
            Command::UnsetAnchor => Ok(self.with_current_window(|window| {
                window.clear_anchor();
            })),
            Command::TileWindows => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                tab.tile_windows();
                Ok(true)
            }
            Command::ActivateNextWindow => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                tab.activate_next();
                Ok(true)
            }
            Command::ActivatePreviousWindow => {
                let Some(tab) = self.tabs_mut().current_mut() else {
                    return Ok(false);
                };
                tab.activate_previous();
                Ok(true)
            }
            Command::CopyWindowToClipboard => {
                let Some(payload) = self
                    .tabs()
                    .current()
                    .and_then(crate::models::TabArea::current)
                    .and_then(crate::models::SubWindow::to_payload)
                else {
                    return Ok(false);
                };
                self.set_clipboard(payload);
                Ok(true)
            }
        }
    }

    fn with_current_window(&mut self, f: impl FnOnce(&mut crate::models::SubWindow)) -> bool {
        match self.tabs_mut().current_mut().and_then(crate::models::TabArea::current_mut) {
            Some(window) => {
                f(window);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Payload, Value, WindowAnchor, WindowRect};

    struct Decline;
    impl Confirm for Decline {
        fn confirm(&mut self, _message: &str) -> bool {
            false
        }
    }

    fn ui_with_window() -> Workspace {
        let mut ws = Workspace::new(None);
        ws.add_payload(Payload::new(Value::Text("body".into())).with_title("Doc"))
            .unwrap();
        ws
    }

    #[test]
    fn toggle_full_screen_follows_the_coupled_rule() {
        let mut ws = ui_with_window();
        ws.execute(Command::ToggleFullScreen, &mut AutoConfirm).unwrap();
        assert_eq!(ws.window(0, 0).unwrap().state(), WindowState::Maximized);
        ws.execute(Command::ToggleFullScreen, &mut AutoConfirm).unwrap();
        assert_eq!(ws.window(0, 0).unwrap().state(), WindowState::Normal);

        ws.execute(
            Command::SetWindowState { state: WindowState::Minimized },
            &mut AutoConfirm,
        )
        .unwrap();
        ws.execute(Command::ToggleFullScreen, &mut AutoConfirm).unwrap();
        assert_eq!(ws.window(0, 0).unwrap().state(), WindowState::Maximized);
    }

    #[test]
    fn entering_full_screen_moves_the_window_to_its_own_tab() {
        let mut ws = ui_with_window();
        ws.add_payload(Payload::new(Value::Text("other".into())).with_title("Other"))
            .unwrap();
        assert_eq!(ws.tabs().get(0).unwrap().len(), 2);

        assert!(ws
            .execute(
                Command::SetWindowState { state: WindowState::FullScreen },
                &mut AutoConfirm,
            )
            .unwrap());
        assert_eq!(ws.tabs().len(), 2);
        assert_eq!(ws.tabs().get(0).unwrap().len(), 1);
        let moved = ws.window(1, 0).unwrap();
        assert_eq!(moved.title, "Other");
        assert_eq!(moved.state(), WindowState::FullScreen);
        // the non-FullScreen states still apply in place
        ws.tabs_mut().set_current(0);
        ws.execute(
            Command::SetWindowState { state: WindowState::Minimized },
            &mut AutoConfirm,
        )
        .unwrap();
        assert_eq!(ws.window(0, 0).unwrap().state(), WindowState::Minimized);
        assert_eq!(ws.tabs().len(), 2);
    }

    #[test]
    fn declined_close_keeps_the_window_intact() {
        let mut ws = ui_with_window();
        ws.window_mut(0, 0).unwrap().set_modified(true);
        let rect = ws.window(0, 0).unwrap().rect();
        let state = ws.window(0, 0).unwrap().state();

        let changed = ws.execute(Command::CloseWindow, &mut Decline).unwrap();
        assert!(!changed);
        let win = ws.window(0, 0).unwrap();
        assert_eq!(win.rect(), rect);
        assert_eq!(win.state(), state);
        assert!(win.is_modified());
    }

    #[test]
    fn accepted_close_removes_the_window() {
        let mut ws = ui_with_window();
        ws.window_mut(0, 0).unwrap().set_modified(true);
        assert!(ws.execute(Command::CloseWindow, &mut AutoConfirm).unwrap());
        assert_eq!(ws.tabs().get(0).unwrap().len(), 0);
    }

    #[test]
    fn window_commands_without_a_window_are_no_ops() {
        let mut ws = Workspace::new(None);
        assert!(!ws.execute(Command::ToggleFullScreen, &mut AutoConfirm).unwrap());
        assert!(!ws.execute(Command::DuplicateWindow, &mut AutoConfirm).unwrap());
        assert!(!ws
            .execute(Command::RenameWindow { title: "x".into() }, &mut AutoConfirm)
            .unwrap());
    }

    #[test]
    fn rename_and_anchor_apply_to_the_current_window() {
        let mut ws = ui_with_window();
        ws.execute(Command::RenameWindow { title: "Renamed".into() }, &mut AutoConfirm)
            .unwrap();
        assert_eq!(ws.window(0, 0).unwrap().title, "Renamed");

        ws.execute(
            Command::SetAnchor { anchor: WindowAnchor::TopLeftConst { left: 0, top: 0 } },
            &mut AutoConfirm,
        )
        .unwrap();
        assert!(ws.window(0, 0).unwrap().anchor().is_anchored());

        ws.execute(Command::UnsetAnchor, &mut AutoConfirm).unwrap();
        assert!(!ws.window(0, 0).unwrap().anchor().is_anchored());
    }

    #[test]
    fn close_all_ignores_the_prompt_when_confirmation_is_disabled() {
        let mut ws = ui_with_window();
        ws.window_mut(0, 0).unwrap().set_modified(true);

        assert!(!ws.execute(Command::CloseAllWindows, &mut Decline).unwrap());
        assert_eq!(ws.tabs().get(0).unwrap().len(), 1);

        ws.settings.confirm_on_close = false;
        assert!(ws.execute(Command::CloseAllWindows, &mut Decline).unwrap());
        assert!(ws.tabs().get(0).unwrap().is_empty());
    }

    #[test]
    fn align_commands_snap_the_window_to_the_area_edges() {
        let mut ws = ui_with_window();
        let size = ws.area_size();
        ws.window_mut(0, 0)
            .unwrap()
            .set_rect(size, WindowRect::new(100, 100, 200, 100));

        ws.execute(Command::AlignWindow { align: WindowAlign::Right }, &mut AutoConfirm)
            .unwrap();
        assert_eq!(
            ws.window(0, 0).unwrap().rect(),
            WindowRect::new(size.width - 200, 100, 200, 100)
        );

        ws.execute(Command::AlignWindow { align: WindowAlign::Center }, &mut AutoConfirm)
            .unwrap();
        assert_eq!(
            ws.window(0, 0).unwrap().rect(),
            WindowRect::new((size.width - 200) / 2, (size.height - 100) / 2, 200, 100)
        );
    }

    #[test]
    fn resize_command_scales_the_window_rect() {
        let mut ws = ui_with_window();
        let size = ws.area_size();
        ws.window_mut(0, 0)
            .unwrap()
            .set_rect(size, WindowRect::new(10, 20, 100, 50));

        ws.execute(Command::ResizeWindow { fx: 2.0, fy: 2.0 }, &mut AutoConfirm)
            .unwrap();
        assert_eq!(ws.window(0, 0).unwrap().rect(), WindowRect::new(20, 40, 200, 100));
    }

    #[test]
    fn duplicate_command_copies_the_current_window() {
        let mut ws = ui_with_window();
        assert!(ws.execute(Command::DuplicateWindow, &mut AutoConfirm).unwrap());
        assert_eq!(ws.tabs().get(0).unwrap().len(), 2);
        assert_eq!(ws.window(0, 1).unwrap().title, "Doc [1]");
    }

    #[test]
    fn copy_window_to_clipboard_exports_the_payload() {
        let mut ws = ui_with_window();
        assert!(ws.execute(Command::CopyWindowToClipboard, &mut AutoConfirm).unwrap());
        let clip = ws.clipboard().unwrap();
        assert_eq!(clip.value, Value::Text("body".into()));
        assert_eq!(clip.title.as_deref(), Some("Doc"));
    }
}
