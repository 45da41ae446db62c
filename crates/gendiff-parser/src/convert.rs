//! Decode document bytes and normalize them into a [`Mapping`].

use gendiff_types::{Mapping, Value};
use tracing::debug;

use crate::document::DocumentFormat;
use crate::error::{ParseError, ParseResult};

/// Parse `bytes` as a document of the given format.
///
/// An empty document or a top-level null is an empty mapping. Any other
/// non-mapping top level is rejected.
pub fn parse_bytes(bytes: &[u8], format: DocumentFormat) -> ParseResult<Mapping> {
    debug!(%format, bytes = bytes.len(), "parsing document");

    let value = match format {
        DocumentFormat::Json => parse_json(bytes)?,
        DocumentFormat::Yaml => parse_yaml(bytes)?,
        DocumentFormat::Toml => parse_toml(bytes)?,
    };

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(ParseError::NotAMapping {
            format,
            found: other.kind(),
        }),
    }
}

fn parse_json(bytes: &[u8]) -> ParseResult<Value> {
    if is_blank(bytes) {
        return Ok(Value::Null);
    }
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ParseError::syntax(DocumentFormat::Json, e))?;
    Ok(Value::from(value))
}

fn parse_yaml(bytes: &[u8]) -> ParseResult<Value> {
    if is_blank(bytes) {
        return Ok(Value::Null);
    }
    let mut value: serde_yaml::Value = serde_yaml::from_slice(bytes)
        .map_err(|e| ParseError::syntax(DocumentFormat::Yaml, e))?;
    // `<<: *anchor` merge keys are only resolved on request.
    value
        .apply_merge()
        .map_err(|e| ParseError::syntax(DocumentFormat::Yaml, e))?;
    from_yaml(value)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn parse_toml(bytes: &[u8]) -> ParseResult<Value> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ParseError::syntax(DocumentFormat::Toml, e))?;
    let table: toml::Table =
        toml::from_str(text).map_err(|e| ParseError::syntax(DocumentFormat::Toml, e))?;
    Ok(from_toml(toml::Value::Table(table)))
}

fn from_yaml(value: serde_yaml::Value) -> ParseResult<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<ParseResult<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(entries) => {
            let mut map = Mapping::new();
            for (key, item) in entries {
                let key = yaml_key(key)?;
                if map.contains_key(&key) {
                    return Err(ParseError::syntax(
                        DocumentFormat::Yaml,
                        format!("duplicate mapping key '{key}'"),
                    ));
                }
                map.insert(key, from_yaml(item)?);
            }
            Value::Mapping(map)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

/// Scalar keys are stringified the way they were written; complex keys are rejected.
/// Two keys that stringify the same (`1` and `"1"`) are a duplicate.
fn yaml_key(key: serde_yaml::Value) -> ParseResult<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => Err(ParseError::syntax(
            DocumentFormat::Yaml,
            "mapping keys must be scalars",
        )),
    }
}

fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, from_toml(v)))
                .collect(),
        ),
    }
}
