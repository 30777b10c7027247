//! Host-tunable behavior of the workspace core.
use serde::{Deserialize, Serialize};

use crate::models::{Size, WindowRect};

/// What happens when a widget is added without further placement hints:
/// wrap it in a window of the active tab, or give it a tab of its own.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NewWidgetBehavior {
    #[default]
    Window,
    Tab,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub new_widget_behavior: NewWidgetBehavior,
    /// Rect given to new sub-windows, cascaded a little per window.
    pub default_window_rect: WindowRect,
    /// Viewport size before the host reports a real one.
    pub default_area_size: Size,
    /// Ask before closing modified windows. Disabled in headless hosts.
    pub confirm_on_close: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            new_widget_behavior: NewWidgetBehavior::default(),
            default_window_rect: WindowRect::new(40, 40, 400, 300),
            default_area_size: Size::new(800, 600),
            confirm_on_close: true,
        }
    }
}
