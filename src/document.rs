use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` and `.yml` files are YAML, everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// An OpenAPI document whose root is known to carry a `servers` array.
///
/// Everything besides `servers` is kept as an opaque [`Value`]. Object keys keep their
/// original order, so fields we don't touch serialize the way they were read.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    format: Format,
    root: Value,
}

impl Document {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = Format::from_path(path);
        let doc = Self::parse(path, format, &text)?;
        debug!(path = %path.display(), ?format, servers = doc.servers().len(), "Read OpenAPI document");
        Ok(doc)
    }

    pub fn parse(path: impl Into<PathBuf>, format: Format, text: &str) -> Result<Self> {
        let path = path.into();
        let root: Value = match format {
            Format::Json => serde_json::from_str(text).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?,
            Format::Yaml => serde_yaml::from_str(text).map_err(|source| Error::Yaml {
                path: path.clone(),
                source,
            })?,
        };
        if !root.get("servers").is_some_and(Value::is_array) {
            return Err(Error::MissingServers { path });
        }
        Ok(Self { path, format, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn servers(&self) -> &[Value] {
        self.root
            .get("servers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replaces the `servers` array in place. Its position among the root keys is unchanged.
    pub fn set_servers(&mut self, servers: Vec<Value>) {
        self.root["servers"] = Value::Array(servers);
    }

    pub fn to_string(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => serde_json::to_string_pretty(&self.root).map_err(|source| Error::Json {
                path: self.path.clone(),
                source,
            }),
            Format::Yaml => serde_yaml::to_string(&self.root).map_err(|source| Error::Yaml {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serializes in the format implied by `path` and overwrites it. Not atomic.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = if path == self.path {
            self.format
        } else {
            Format::from_path(path)
        };
        let s = self.to_string(format)?;
        fs::write(path, &s).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, bytes = s.len(), "Wrote OpenAPI document");
        Ok(())
    }
}
