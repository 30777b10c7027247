//! Runtime resolution of readers, writers and widget classes.
//!
//! Three independent registries, owned by the [`Workspace`](crate::Workspace)
//! rather than living in module globals, so independent workspace instances
//! (and tests) do not share provider state.
//!
//! Reader and writer providers are probe functions: given an input they
//! either hand back a concrete handler or decline with `None`. Declining is
//! the normal negative-result channel and never an error.
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::{Payload, TypeTag};
use crate::widgets::{fallback_widget_class, payload_editor_class, WidgetClass};
use crate::{CoreError, Result};

/// Input handed to reader providers: one path or a group of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadInput {
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl ReadInput {
    #[must_use]
    pub fn as_single(&self) -> Option<&Path> {
        match self {
            Self::Single(path) => Some(path),
            Self::Multiple(_) => None,
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(path) => path.display().to_string(),
            Self::Multiple(paths) => paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&Path> for ReadInput {
    fn from(path: &Path) -> Self {
        Self::Single(path.to_path_buf())
    }
}

pub type ReaderFn = Box<dyn Fn(&ReadInput) -> Result<Payload>>;
pub type WriterFn = Box<dyn Fn(&Payload, &Path) -> Result<()>>;
pub type ReaderProvider = Box<dyn Fn(&ReadInput) -> Option<ReaderFn>>;
pub type WriterProvider = Box<dyn Fn(&Payload) -> Option<WriterFn>>;

/// The reader, writer and widget-class registries of one application scope.
pub struct ProviderRegistry {
    readers: Vec<ReaderProvider>,
    writers: Vec<WriterProvider>,
    global_widgets: HashMap<TypeTag, WidgetClass>,
    app_widgets: HashMap<String, HashMap<TypeTag, WidgetClass>>,
    fallback: WidgetClass,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderRegistry {
    /// An empty registry: no providers, fallback widget class only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            writers: Vec::new(),
            global_widgets: HashMap::new(),
            app_widgets: HashMap::new(),
            fallback: fallback_widget_class(),
        }
    }

    /// A registry pre-loaded with the builtin file providers and the builtin
    /// widget classes for `"text"`, `"table"` and `"image"`. Because
    /// resolution prefers later registrations, anything registered
    /// afterwards overrides these defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::builtins::io::register_default_providers(&mut registry);
        for tag in ["text", "table", "image"] {
            registry.register_widget_class(TypeTag::name(tag), payload_editor_class("payload-editor"), None);
        }
        registry
    }

    /// Append a reader provider. Providers registered later take precedence
    /// over earlier ones, so plugins override the builtin defaults.
    pub fn register_reader_provider(&mut self, provider: ReaderProvider) {
        self.readers.push(provider);
    }

    /// Append a writer provider. Same precedence rule as readers.
    pub fn register_writer_provider(&mut self, provider: WriterProvider) {
        self.writers.push(provider);
    }

    /// Register a widget class for an exact type tag, either in the
    /// per-application override map or in the global map.
    pub fn register_widget_class(&mut self, tag: TypeTag, class: WidgetClass, app: Option<&str>) {
        tracing::debug!(%tag, class = class.name(), app, "registering widget class");
        match app {
            Some(app) => {
                self.app_widgets.entry(app.to_string()).or_default().insert(tag, class);
            }
            None => {
                self.global_widgets.insert(tag, class);
            }
        }
    }

    /// Probe the reader providers, most recently registered first, and
    /// return the first match.
    pub fn resolve_reader(&self, input: &ReadInput) -> Result<ReaderFn> {
        self.readers
            .iter()
            .rev()
            .find_map(|provider| provider(input))
            .ok_or_else(|| CoreError::NoReaderFound(input.display()))
    }

    /// Probe the writer providers, most recently registered first. Providers
    /// match on the payload's type tag (via `is_subtype_of` against their
    /// declared capability), not on the destination path.
    pub fn resolve_writer(&self, payload: &Payload) -> Result<WriterFn> {
        self.writers
            .iter()
            .rev()
            .find_map(|provider| provider(payload))
            .ok_or_else(|| CoreError::NoWriterFound(payload.type_tag().clone()))
    }

    /// Pick the widget class for a type tag: the app-scope override map
    /// first, then the global map, then the fallback viewer.
    ///
    /// Exact-tag lookup only. Hierarchical matching is reserved for
    /// reader/writer capabilities; a class registered for `"text"` does not
    /// serve `"text.custom"`.
    #[must_use]
    pub fn resolve_widget_class(&self, app: Option<&str>, tag: &TypeTag) -> &WidgetClass {
        if let Some(class) = app
            .and_then(|app| self.app_widgets.get(app))
            .and_then(|map| map.get(tag))
        {
            return class;
        }
        self.global_widgets.get(tag).unwrap_or(&self.fallback)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("readers", &self.readers.len())
            .field("writers", &self.writers.len())
            .field("global_widgets", &self.global_widgets.len())
            .field("app_scopes", &self.app_widgets.len())
            .finish()
    }
}
