//! Scene documents: a colour space plus the selected objects.
//!
//! Documents are YAML by default, JSON when the file ends in `.json`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecolourError, Result};

use super::object::GraphicalObject;

/// Colour model declared by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourSpace {
    #[default]
    Rgb,
    Cmyk,
    Grayscale,
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourSpace::Rgb => write!(f, "rgb"),
            ColourSpace::Cmyk => write!(f, "cmyk"),
            ColourSpace::Grayscale => write!(f, "grayscale"),
        }
    }
}

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A document holding the current selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub colour_space: ColourSpace,
    pub selection: Vec<GraphicalObject>,
}

impl Document {
    pub fn new(selection: Vec<GraphicalObject>) -> Self {
        Self {
            colour_space: ColourSpace::Rgb,
            selection,
        }
    }

    /// Load a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecolourError::Precondition {
                message: format!("No document at {}", path.display()),
                help: Some(
                    "Open any document: pass the path of an existing scene file".to_string(),
                ),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| RecolourError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read document: {}", e),
        })?;

        Self::parse(&content, DocumentFormat::from_path(path))
    }

    /// Parse a document from a string.
    ///
    /// The YAML and JSON parsers cap nesting depth, so groups can be nested
    /// up to 60 deep; deeper documents fail with a parse error.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| RecolourError::Parse {
                message: format!("Invalid document: {}", e),
                help: Some("Check the YAML syntax and object kinds".to_string()),
            }),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| RecolourError::Parse {
                message: format!("Invalid document: {}", e),
                help: Some("Check the JSON syntax and object kinds".to_string()),
            }),
        }
    }

    /// Serialize the document.
    pub fn to_string(&self, format: DocumentFormat) -> Result<String> {
        let encoded = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::to_string_pretty(self)
                .map(|s| s + "\n")
                .map_err(|e| e.to_string()),
        };

        encoded.map_err(|message| RecolourError::Parse {
            message: format!("Failed to encode document: {}", message),
            help: None,
        })
    }

    /// Write the document to disk in the format implied by the path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string(DocumentFormat::from_path(path))?;
        fs::write(path, content).map_err(|e| RecolourError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write document: {}", e),
        })
    }

    /// Refuse documents the randomizer must not touch.
    pub fn check_preconditions(&self) -> Result<()> {
        if self.colour_space != ColourSpace::Rgb {
            return Err(RecolourError::Precondition {
                message: format!("Document is not RGB (colour space: {})", self.colour_space),
                help: Some("Convert the document to the RGB colour model first".to_string()),
            });
        }

        if self.selection.is_empty() {
            return Err(RecolourError::Precondition {
                message: "Nothing is selected".to_string(),
                help: Some(
                    "Select something: add objects to the document's `selection`".to_string(),
                ),
            });
        }

        Ok(())
    }

    /// Count simple shapes reachable from the selection.
    pub fn shape_count(&self) -> usize {
        self.selection.iter().map(GraphicalObject::shape_count).sum()
    }
}
