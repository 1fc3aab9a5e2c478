//! Reader registry for format discovery and selection
//!
//! Readers are registered and retrieved by name, or picked by the extension
//! of an input file.

use crate::asset::Conversion;
use crate::error::{Error, FormatError};
use crate::format::Reader;
use crate::ir::nodes::Node;
use std::collections::HashMap;

/// Registry of input formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let conversion = registry.convert("Foo is **very bar.**", "markdown")?;
/// println!("{}", conversion.to_json()?);
/// ```
pub struct FormatRegistry {
    readers: HashMap<String, Box<dyn Reader>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            readers: HashMap::new(),
        }
    }

    /// Register a reader
    ///
    /// If a reader with the same name already exists, it will be replaced.
    pub fn register<R: Reader + 'static>(&mut self, reader: R) {
        self.readers
            .insert(reader.name().to_string(), Box::new(reader));
    }

    /// Get a reader by name
    pub fn get(&self, name: &str) -> Result<&dyn Reader, FormatError> {
        self.readers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.readers.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.readers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Description of a registered format
    pub fn description(&self, name: &str) -> Option<&str> {
        self.readers.get(name).map(|r| r.description())
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.readers
            .values()
            .find(|reader| reader.file_extensions().contains(&extension))
            .map(|reader| reader.name().to_string())
    }

    /// Read source text using the specified format
    pub fn read(&self, source: &str, format: &str) -> Result<Vec<Node>, FormatError> {
        self.get(format)?.read(source)
    }

    /// Read source text and convert it to content assets
    pub fn convert(&self, source: &str, format: &str) -> Result<Conversion, Error> {
        let nodes = self.read(source, format)?;
        Ok(crate::convert(nodes)?)
    }

    /// Create a registry with default readers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat::default());
        registry.register(crate::formats::pandoc::PandocJsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
