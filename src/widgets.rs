//! Contracts between the core and its host: content widgets, widget-class
//! factories and the synchronous confirmation hook.
use std::fmt;
use std::sync::Arc;

use crate::models::Payload;
use crate::Result;

/// Contract implemented by any content widget hosted in a sub-window.
///
/// Construction goes through a [`WidgetClass`] factory; a widget that keeps
/// the default `to_payload`/`is_exportable` is non-exportable, which gates
/// save-related actions in the surrounding UI.
pub trait Widget {
    /// Export the widget's content. `None` marks the widget non-exportable.
    fn to_payload(&self) -> Option<Payload> {
        None
    }

    fn is_exportable(&self) -> bool {
        false
    }

    fn is_modified(&self) -> bool {
        false
    }

    fn set_modified(&mut self, _modified: bool) {}
}

type WidgetFactory = Arc<dyn Fn(&Payload) -> Result<Box<dyn Widget>>>;

/// A named factory resolving a payload into a widget instance.
#[derive(Clone)]
pub struct WidgetClass {
    name: &'static str,
    factory: WidgetFactory,
}

impl WidgetClass {
    pub fn new(
        name: &'static str,
        factory: impl Fn(&Payload) -> Result<Box<dyn Widget>> + 'static,
    ) -> Self {
        Self {
            name,
            factory: Arc::new(factory),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn from_payload(&self, payload: &Payload) -> Result<Box<dyn Widget>> {
        (self.factory)(payload)
    }
}

impl fmt::Debug for WidgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetClass").field("name", &self.name).finish()
    }
}

/// Read-only viewer used when no widget class is registered for a tag.
pub struct FallbackViewer {
    payload: Payload,
}

impl FallbackViewer {
    #[must_use]
    pub fn new(payload: &Payload) -> Self {
        Self {
            payload: payload.clone(),
        }
    }

    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }
}

// Non-exportable and never modified: the defaults are the contract.
impl Widget for FallbackViewer {}

pub fn fallback_widget_class() -> WidgetClass {
    WidgetClass::new("fallback-viewer", |payload| {
        Ok(Box::new(FallbackViewer::new(payload)))
    })
}

/// Exportable widget holding a payload and a modified flag. Backs the
/// builtin text/table/image widget classes.
pub struct PayloadEditor {
    payload: Payload,
    modified: bool,
}

impl PayloadEditor {
    #[must_use]
    pub fn new(payload: &Payload) -> Self {
        Self {
            payload: payload.clone(),
            modified: false,
        }
    }

    pub fn replace_payload(&mut self, payload: Payload) {
        self.payload = payload;
        self.modified = true;
    }
}

impl Widget for PayloadEditor {
    fn to_payload(&self) -> Option<Payload> {
        Some(self.payload.clone())
    }

    fn is_exportable(&self) -> bool {
        true
    }

    fn is_modified(&self) -> bool {
        self.modified
    }

    fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }
}

pub fn payload_editor_class(name: &'static str) -> WidgetClass {
    WidgetClass::new(name, |payload| Ok(Box::new(PayloadEditor::new(payload))))
}

/// Synchronous confirmation hook supplied by the host UI. A `false` answer
/// aborts the asking operation with no partial side effects.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Confirmation that always accepts. Used when confirmation is disabled in
/// the settings and in headless tests.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}
