use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// State of a sub-window inside its tab area.
///
/// `rect` is only meaningful in `Normal`; the other states derive their
/// effective geometry from the parent area. `FullScreen` additionally
/// implies the window has been promoted into a dedicated tab.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "min")]
    Minimized,
    #[serde(rename = "max")]
    Maximized,
    #[serde(rename = "full")]
    FullScreen,
}

impl WindowState {
    /// The one coupled transition rule: a maximized window toggles back to
    /// normal, every other state toggles to maximized.
    #[must_use]
    pub fn toggled_full_screen(self) -> Self {
        if self == Self::Maximized {
            Self::Normal
        } else {
            Self::Maximized
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Minimized => "min",
            Self::Maximized => "max",
            Self::FullScreen => "full",
        };
        write!(f, "{name}")
    }
}

impl FromStr for WindowState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "min" => Ok(Self::Minimized),
            "max" => Ok(Self::Maximized),
            "full" => Ok(Self::FullScreen),
            other => Err(CoreError::InvalidState(other.to_string())),
        }
    }
}
