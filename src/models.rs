//! Objects used to build the workspace data model.
mod anchor;
mod dock;
mod payload;
mod rect;
mod tab;
mod tab_list;
mod window;
mod window_state;

pub use anchor::WindowAnchor;
pub use dock::{DockSide, DockWidget};
pub use payload::{Payload, TypeTag, Value};
pub use rect::{Size, WindowRect};
pub use tab::TabArea;
pub use tab_list::TabList;
pub use window::{next_duplicate_title, SubWindow};
pub use window_state::WindowState;

pub type WindowId = u32;
pub type DockId = u32;
