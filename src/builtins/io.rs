//! Default reader and writer providers: plain text, delimited tables and
//! raster image files.
//!
//! Image payloads carry the undecoded file bytes tagged `"image"`; pixel
//! decoding belongs to the rendering plugin.
use std::fs;
use std::path::Path;

use crate::models::{Payload, TypeTag, Value};
use crate::registry::{ProviderRegistry, ReadInput, ReaderFn, WriterFn};
use crate::{CoreError, Result};

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "rst", "log", "json", "toml", "yaml", "yml", "ini", "cfg", "py", "rs", "sh",
    "html", "css", "js",
];
const TEXT_FILE_NAMES: &[&str] = &["README", "LICENSE", "Makefile", "Dockerfile", ".gitignore"];

/// Register the builtin providers. They are expected to be the oldest
/// registrations in a registry so every plugin takes precedence.
pub fn register_default_providers(registry: &mut ProviderRegistry) {
    registry.register_reader_provider(Box::new(default_reader_provider));
    registry.register_writer_provider(Box::new(default_writer_provider));
}

fn default_reader_provider(input: &ReadInput) -> Option<ReaderFn> {
    // groups of paths are not handled by the defaults
    let path = input.as_single()?;
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let read: fn(&Path) -> Result<Payload> = match ext.as_deref() {
        Some("csv") => read_csv,
        Some("tsv") => read_tsv,
        Some("png" | "jpg" | "jpeg") => read_image,
        Some(e) if TEXT_EXTENSIONS.contains(&e) => read_text,
        _ if TEXT_FILE_NAMES.contains(&name) => read_text,
        _ => return None,
    };
    Some(Box::new(move |input| {
        let path = input
            .as_single()
            .ok_or_else(|| CoreError::NoReaderFound(input.display()))?;
        read(path)
    }))
}

fn read_text(path: &Path) -> Result<Payload> {
    Ok(Payload::new(Value::Text(fs::read_to_string(path)?)).with_source(path))
}

fn read_csv(path: &Path) -> Result<Payload> {
    read_table(path, ',')
}

fn read_tsv(path: &Path) -> Result<Payload> {
    read_table(path, '\t')
}

fn read_table(path: &Path, delimiter: char) -> Result<Payload> {
    let text = fs::read_to_string(path)?;
    Ok(Payload::new(Value::Table(parse_delimited(&text, delimiter))).with_source(path))
}

fn read_image(path: &Path) -> Result<Payload> {
    Ok(Payload::new(Value::Bytes(fs::read(path)?))
        .with_type_tag("image")
        .with_source(path))
}

fn default_writer_provider(payload: &Payload) -> Option<WriterFn> {
    if payload.is_subtype_of(&TypeTag::name("text")) {
        Some(Box::new(write_text))
    } else if payload.is_subtype_of(&TypeTag::name("table")) {
        Some(Box::new(write_table))
    } else if payload.is_subtype_of(&TypeTag::name("image")) {
        Some(Box::new(write_image))
    } else {
        None
    }
}

fn write_text(payload: &Payload, path: &Path) -> Result<()> {
    match &payload.value {
        Value::Text(text) => Ok(fs::write(path, text)?),
        _ => Err(unsupported(payload, "text")),
    }
}

fn write_table(payload: &Payload, path: &Path) -> Result<()> {
    let Value::Table(rows) = &payload.value else {
        return Err(unsupported(payload, "table"));
    };
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => '\t',
        _ => ',',
    };
    Ok(fs::write(path, format_delimited(rows, delimiter))?)
}

fn write_image(payload: &Payload, path: &Path) -> Result<()> {
    match &payload.value {
        Value::Bytes(bytes) => Ok(fs::write(path, bytes)?),
        _ => Err(unsupported(payload, "bytes")),
    }
}

fn unsupported(payload: &Payload, expected: &'static str) -> CoreError {
    CoreError::UnsupportedValueType {
        tag: payload.type_tag().clone(),
        expected,
    }
}

/// Split delimited text into rows. Double quotes wrap fields containing the
/// delimiter, quotes or newlines; a doubled quote escapes a quote.
fn parse_delimited(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                c if c == delimiter => row.push(std::mem::take(&mut field)),
                c => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

fn format_delimited(rows: &[Vec<String>], delimiter: char) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .map(|f| {
                if f.contains(delimiter) || f.contains('"') || f.contains('\n') {
                    format!("\"{}\"", f.replace('"', "\"\""))
                } else {
                    f.clone()
                }
            })
            .collect();
        out.push_str(&line.join(&delimiter.to_string()));
        out.push('\n');
    }
    out
}
