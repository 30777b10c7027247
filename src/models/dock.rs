//! Persistent edge panels of the main window.
use serde::{Deserialize, Serialize};

use crate::models::DockId;

/// Main-window edge a dock widget is attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DockSide {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

/// Visibility/title state of a dock widget. The core only tracks state; the
/// widget's storage belongs to the host, which looks it up by `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DockWidget {
    pub id: DockId,
    pub title: String,
    pub side: DockSide,
    pub visible: bool,
}

impl DockWidget {
    #[must_use]
    pub fn new(id: DockId, title: impl Into<String>, side: DockSide) -> Self {
        Self {
            id,
            title: title.into(),
            side,
            visible: true,
        }
    }
}
