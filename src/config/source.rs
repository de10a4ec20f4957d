//! Custom-resource configuration source resolution.
//!
//! # Responsibilities
//! - Pick the active configuration source from the option set
//! - Open the source and wrap it in a streaming YAML decoder
//!
//! # Design Decisions
//! - Inline text wins over a file path when both are set; the two are never merged
//! - An empty inline value is the same as unset
//! - A file that cannot be opened is fatal, there is no fallback to "no config"

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::options::Options;
use crate::error::StartupError;

/// Where the custom-resource configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Neither flag was given.
    Unset,
    /// Configuration text passed directly on the command line.
    Inline(String),
    /// Path to a configuration file.
    File(PathBuf),
}

impl ConfigSource {
    /// Derive the source from the two raw option fields.
    pub fn from_options(opts: &Options) -> Self {
        if !opts.custom_resource_config.is_empty() {
            return Self::Inline(opts.custom_resource_config.clone());
        }
        if !opts.custom_resource_config_file.is_empty() {
            return Self::File(PathBuf::from(&opts.custom_resource_config_file));
        }
        Self::Unset
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Inline(_) => "inline",
            Self::File(_) => "file",
        }
    }

    /// Open the source. `Ok(None)` means no configuration is present.
    pub fn open(self) -> Result<Option<ConfigDecoder>, StartupError> {
        match self {
            Self::Unset => Ok(None),
            Self::Inline(text) => Ok(Some(ConfigDecoder::from_text(text))),
            Self::File(path) => ConfigDecoder::open(&path).map(Some),
        }
    }
}

/// Resolve the custom-resource configuration for `opts`.
pub fn resolve_custom_resource_config(
    opts: &Options,
) -> Result<Option<ConfigDecoder>, StartupError> {
    let source = ConfigSource::from_options(opts);
    tracing::debug!(source = source.kind(), "Resolving custom resource configuration");
    source.open()
}

enum Input {
    Text(String),
    Reader(Box<dyn Read + Send>),
}

/// Streaming decoder over a YAML document stream.
///
/// Consumed by [`ConfigDecoder::decode`]; a backing file is closed when the
/// decode returns.
pub struct ConfigDecoder {
    input: Input,
}

impl ConfigDecoder {
    /// Decoder over an in-memory configuration.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: Input::Text(text.into()),
        }
    }

    /// Decoder over any byte stream.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            input: Input::Reader(Box::new(reader)),
        }
    }

    /// Open `path` for reading and decode from it.
    pub fn open(path: &Path) -> Result<Self, StartupError> {
        let file = File::open(path).map_err(|source| StartupError::ConfigFileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }

    /// Decode the first document of the stream.
    ///
    /// Returns `Ok(None)` when the stream holds no YAML content: empty input,
    /// comments only, or a bare `---`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, serde_yaml::Error> {
        match self.input {
            Input::Text(text) => first_document(serde_yaml::Deserializer::from_str(&text)),
            Input::Reader(reader) => first_document(serde_yaml::Deserializer::from_reader(reader)),
        }
    }
}

impl fmt::Debug for ConfigDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = match &self.input {
            Input::Text(_) => "text",
            Input::Reader(_) => "reader",
        };
        f.debug_struct("ConfigDecoder").field("input", &input).finish()
    }
}

fn first_document<T: DeserializeOwned>(
    mut documents: serde_yaml::Deserializer<'_>,
) -> Result<Option<T>, serde_yaml::Error> {
    let Some(document) = documents.next() else {
        return Ok(None);
    };
    match serde_yaml::Value::deserialize(document)? {
        serde_yaml::Value::Null => Ok(None),
        value => serde_yaml::from_value(value).map(Some),
    }
}
