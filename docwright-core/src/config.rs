//! YAML project config (`bootstrap.yml`) loader.
//!
//! The document is kept as an untyped tree; only the configuration page
//! template decides which keys matter.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::error::ConfigError;

/// Parsed project config.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectConfig(pub YamlValue);

impl ProjectConfig {
    /// Resolve a dotted key path such as `spring.application.name`.
    ///
    /// Keys that themselves contain dots (`logging.level.eterea.eureka.service`)
    /// are found by trying the longest joined run of segments first.
    pub fn lookup(&self, dotted: &str) -> Option<&YamlValue> {
        let segments: Vec<&str> = dotted.split('.').collect();
        lookup_segments(&self.0, &segments)
    }

    /// Convert to a JSON tree for template rendering.
    ///
    /// Non-string mapping keys are stringified and YAML tags are dropped, so
    /// any document that parsed also renders.
    pub fn to_json(&self) -> JsonValue {
        yaml_to_json(&self.0)
    }
}

/// Load and parse the YAML file at `path`.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse YAML text. An empty document yields a null config.
pub fn parse_config(contents: &str) -> Result<ProjectConfig, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(ProjectConfig(YamlValue::Null));
    }
    serde_yaml::from_str(contents).map(ProjectConfig)
}

fn lookup_segments<'a>(node: &'a YamlValue, segments: &[&str]) -> Option<&'a YamlValue> {
    if segments.is_empty() {
        return Some(node);
    }
    let YamlValue::Mapping(map) = node else {
        return None;
    };
    (1..=segments.len()).rev().find_map(|take| {
        let key = segments[..take].join(".");
        map.get(key.as_str())
            .and_then(|child| lookup_segments(child, &segments[take..]))
    })
}

fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            }
        }
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(seq) => JsonValue::Array(seq.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(key_to_string(k), yaml_to_json(v));
            }
            JsonValue::Object(out)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
