//! The generic value container moved between files, the clipboard and
//! widgets.
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Hashable identifier classifying a payload's content kind.
///
/// Name tags are dot-segmented (`"text.markdown"` is a subtype of `"text"`).
/// Numeric tags exist for hosts that key payloads off something other than a
/// name; they are subtypes only of themselves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TypeTag {
    Name(String),
    Id(u64),
}

impl TypeTag {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// True iff this tag equals `ancestor`, or is a dot-separated name whose
    /// prefix truncated at a dot boundary equals `ancestor`.
    #[must_use]
    pub fn is_subtype_of(&self, ancestor: &Self) -> bool {
        if self == ancestor {
            return true;
        }
        match (self, ancestor) {
            (Self::Name(tag), Self::Name(prefix)) => tag
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.')),
            _ => false,
        }
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// Content carried by a payload. Opaque to the core except for defaulting
/// the type tag; widgets and providers interpret it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Table(Vec<Vec<String>>),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl Value {
    /// Tag used when a payload is built without an explicit type tag.
    #[must_use]
    pub fn kind_tag(&self) -> TypeTag {
        TypeTag::name(match self {
            Self::Text(_) => "text",
            Self::Table(_) => "table",
            Self::Bytes(_) => "bytes",
            Self::Json(_) => "json",
        })
    }
}

/// Value plus metadata: the unit of every transfer of content between
/// files, the clipboard and widgets.
///
/// The type tag is fixed at construction; deriving a payload with a
/// different tag goes through [`Payload::with_type_tag`], which consumes the
/// payload and returns a new one, so a stored payload and an exported copy
/// never alias.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Payload {
    pub value: Value,
    type_tag: TypeTag,
    pub source: Option<PathBuf>,
    pub title: Option<String>,
    pub extensions: Vec<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Payload {
    /// Build a payload tagged with the value's own kind.
    #[must_use]
    pub fn new(value: Value) -> Self {
        let type_tag = value.kind_tag();
        Self {
            value,
            type_tag,
            source: None,
            title: None,
            extensions: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_type_tag(self, type_tag: impl Into<TypeTag>) -> Self {
        Self {
            type_tag: type_tag.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_source(self, source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_extensions(self, extensions: Vec<String>) -> Self {
        Self { extensions, ..self }
    }

    #[must_use]
    pub const fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    #[must_use]
    pub fn is_subtype_of(&self, ancestor: &TypeTag) -> bool {
        self.type_tag.is_subtype_of(ancestor)
    }

    /// The explicit title, falling back to the source's file name.
    #[must_use]
    pub fn display_title(&self) -> Option<String> {
        self.title.clone().or_else(|| {
            self.source
                .as_deref()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_follows_dot_boundaries() {
        let abc = TypeTag::name("a.b.c");
        assert!(abc.is_subtype_of(&TypeTag::name("a.b")));
        assert!(abc.is_subtype_of(&TypeTag::name("a")));
        assert!(abc.is_subtype_of(&TypeTag::name("a.b.c")));
        assert!(!TypeTag::name("a.b").is_subtype_of(&abc));
        // prefix must end at a dot, not mid-segment
        assert!(!TypeTag::name("a.bc").is_subtype_of(&TypeTag::name("a.b")));
    }

    #[test]
    fn numeric_tags_are_subtypes_only_of_themselves() {
        assert!(TypeTag::Id(7).is_subtype_of(&TypeTag::Id(7)));
        assert!(!TypeTag::Id(7).is_subtype_of(&TypeTag::Id(8)));
        assert!(!TypeTag::Id(7).is_subtype_of(&TypeTag::name("7")));
    }

    #[test]
    fn tag_defaults_from_the_value_kind() {
        assert_eq!(
            Payload::new(Value::Text("hi".into())).type_tag(),
            &TypeTag::name("text")
        );
        assert_eq!(
            Payload::new(Value::Table(vec![])).type_tag(),
            &TypeTag::name("table")
        );
    }

    #[test]
    fn title_falls_back_to_the_source_file_name() {
        let payload = Payload::new(Value::Text(String::new())).with_source("/tmp/notes.txt");
        assert_eq!(payload.display_title().as_deref(), Some("notes.txt"));

        let titled = payload.with_title("My notes");
        assert_eq!(titled.display_title().as_deref(), Some("My notes"));

        assert_eq!(Payload::new(Value::Text(String::new())).display_title(), None);
    }

    #[test]
    fn with_type_tag_returns_a_new_payload() {
        let payload = Payload::new(Value::Text("x".into()));
        let retagged = payload.clone().with_type_tag("text.markdown");
        assert_eq!(payload.type_tag(), &TypeTag::name("text"));
        assert_eq!(retagged.type_tag(), &TypeTag::name("text.markdown"));
    }
}
