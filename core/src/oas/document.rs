#![deny(missing_docs)]

//! # API Description Loading
//!
//! Decodes a Swagger 2.0 / OpenAPI 3.x description into an order-preserving
//! value tree. No schema validation happens here: the only hard requirement
//! is that the top level is an object.

use crate::error::{AppError, AppResult};
use crate::oas::lookup::{child, path};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Encoding of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON (`swagger.json`, `openapi.json`).
    Json,
    /// YAML (`openapi.yaml`, `openapi.yml`).
    Yaml,
}

impl SourceFormat {
    /// Picks the decoder from the file extension. Anything that is not
    /// `.yaml`/`.yml` is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => SourceFormat::Yaml,
            _ => SourceFormat::Json,
        }
    }
}

/// A decoded API description.
///
/// Member order of every mapping is the order of the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescription {
    root: Map<String, Value>,
}

impl ApiDescription {
    /// Wraps an already decoded value.
    ///
    /// Fails with [`AppError::InputParse`] when the value is not an object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(AppError::InputParse {
                path: PathBuf::new(),
                message: format!(
                    "top-level value must be an object, found {}",
                    kind_name(&other)
                ),
                line: 1,
                column: 1,
            }),
        }
    }

    /// Decodes a JSON description.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Decodes a YAML description.
    ///
    /// YAML allows non-string mapping keys (`200:` for a status code); they
    /// are converted to their textual form.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Self::from_value(yaml_to_json(value))
    }

    /// Decodes `content` with the given decoder.
    pub fn parse(content: &str, format: SourceFormat) -> AppResult<Self> {
        match format {
            SourceFormat::Json => Self::from_json_str(content),
            SourceFormat::Yaml => Self::from_yaml_str(content),
        }
    }

    /// The `swagger` or `openapi` version string, when declared.
    pub fn spec_version(&self) -> Option<&str> {
        self.root
            .get("swagger")
            .or_else(|| self.root.get("openapi"))
            .and_then(Value::as_str)
    }

    /// Iterates `paths` as `(path, path item)` pairs in source order.
    ///
    /// A missing or non-object `paths` yields nothing.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|paths| paths.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// The mapping rendered in the Models section.
    ///
    /// Swagger 2.0 `definitions` wins whenever the key exists, even when it is
    /// empty or `null`; OpenAPI 3.x `components.schemas` is only consulted in
    /// its absence. The chosen value must be a non-empty object to render.
    pub fn model_schemas(&self) -> Option<&Map<String, Value>> {
        let models = match self.root.get("definitions") {
            Some(definitions) => definitions,
            None => self
                .root
                .get("components")
                .and_then(|components| child(components, "schemas"))?,
        };

        models.as_object().filter(|map| !map.is_empty())
    }

    /// Raw access to a top-level key path.
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        path(self.root.get(*first)?, rest)
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads and decodes the description stored at `input`.
///
/// The decoder is chosen by [`SourceFormat::from_path`]. Read failures map to
/// [`AppError::InputIo`], decode failures to [`AppError::InputParse`].
pub fn load_api_description(input: &Path) -> AppResult<ApiDescription> {
    let content = fs::read_to_string(input).map_err(|source| AppError::InputIo {
        path: input.to_path_buf(),
        source,
    })?;

    let format = SourceFormat::from_path(input);
    tracing::debug!(?input, ?format, bytes = content.len(), "decoding API description");

    let api = ApiDescription::parse(&content, format).map_err(|e| e.with_input_path(input))?;
    tracing::info!(
        ?input,
        version = api.spec_version().unwrap_or("unknown"),
        "loaded API description"
    );
    Ok(api)
}
