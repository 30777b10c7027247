//! Core data model for a tabbed multi-document workspace: the typed payload
//! container, the tab/sub-window hierarchy and its window-state machine, the
//! corner-anchor geometry system and the provider registries that pick a
//! reader, writer or widget class for a payload at runtime.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise in the geometry math.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::default_trait_access
)]

pub mod builtins;
mod command;
pub mod config;
mod handlers;
pub mod layouts;
pub mod logging;
pub mod models;
pub mod profile;
pub mod registry;
pub mod utils;
pub mod widgets;
pub mod workspace;

pub use command::{Command, WindowAlign};
pub use config::{NewWidgetBehavior, WorkspaceSettings};
pub use models::{
    Payload, Size, SubWindow, TabArea, TabList, TypeTag, Value, WindowAnchor, WindowRect,
    WindowState,
};
pub use profile::AppProfile;
pub use registry::ProviderRegistry;
pub use widgets::{Confirm, Widget, WidgetClass};
pub use workspace::Workspace;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no reader provider matched {0}")]
    NoReaderFound(String),
    #[error("no writer provider matched type tag {0}")]
    NoWriterFound(models::TypeTag),
    #[error("provider for {tag} expected a {expected} value")]
    UnsupportedValueType {
        tag: models::TypeTag,
        expected: &'static str,
    },
    #[error("unknown anchor type: {0}")]
    InvalidAnchor(String),
    #[error("unknown window state: {0}")]
    InvalidState(String),
    #[error("window {window} in tab {tab} does not exist")]
    WindowNotFound { tab: usize, window: usize },
    #[error("widget of {0:?} is not exportable")]
    NotExportable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing error: {0}")]
    SerdeParse(#[from] serde_json::Error),
    #[error("XDG error: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}
