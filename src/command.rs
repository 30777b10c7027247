//! Workspace operations expressed as data, so hosts can bind them to menus
//! or keybindings however they like.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{WindowAnchor, WindowState};

/// Edge or center the current window snaps to inside its tab area.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WindowAlign {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// One workspace mutation. Window-level commands apply to the current
/// window of the current tab and are no-ops when there is none.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    NewTab { title: Option<String> },
    CloseTab { index: usize },
    MergeTabs { source: usize, target: usize },
    ReadFile { path: PathBuf },
    SaveWindowAs { path: PathBuf },
    CloseWindow,
    CloseAllWindows,
    DuplicateWindow,
    RenameWindow { title: String },
    SetWindowState { state: WindowState },
    ToggleFullScreen,
    FullScreenInNewTab,
    MinimizeOtherWindows,
    ShowAllWindows,
    AlignWindow { align: WindowAlign },
    ResizeWindow { fx: f64, fy: f64 },
    SetAnchor { anchor: WindowAnchor },
    UnsetAnchor,
    TileWindows,
    ActivateNextWindow,
    ActivatePreviousWindow,
    CopyWindowToClipboard,
}
