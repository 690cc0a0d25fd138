use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BumpError, Result};

/// A JSON manifest holding the project's version field.
///
/// Loaded once per invocation; rewritten in place only when the version
/// actually changes, so a no-op run leaves the file byte-identical.
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Loads and validates a manifest file.
    ///
    /// The file must contain a JSON object with a string `version` field.
    ///
    /// # Arguments
    /// * `path` - Path to the manifest file (e.g., "package.json")
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Successfully loaded manifest
    /// * `Err` - If the file is unreadable, not valid JSON, or missing the version field
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| {
            BumpError::manifest(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        let document: Value = serde_json::from_str(&content)?;

        if !document.is_object() {
            return Err(BumpError::manifest(format!(
                "'{}' is not a JSON object",
                path.display()
            )));
        }

        let manifest = Manifest { path, document };

        // Validate the version field up front so failures surface before any write
        manifest.version()?;

        Ok(manifest)
    }

    /// The path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current version string stored in the manifest.
    pub fn version(&self) -> Result<&str> {
        self.document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BumpError::manifest(format!(
                    "'{}' has no string 'version' field",
                    self.path.display()
                ))
            })
    }

    /// Replaces the version field, preserving all sibling fields.
    pub fn set_version(&mut self, version: &str) {
        if let Some(object) = self.document.as_object_mut() {
            object.insert("version".to_string(), Value::String(version.to_string()));
        }
    }

    /// Writes the manifest back to disk.
    ///
    /// Output is pretty-printed with two-space indentation and a trailing
    /// newline, matching the conventional package.json layout.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.document)? + "\n";
        fs::write(&self.path, content).map_err(|e| {
            BumpError::manifest(format!("Cannot write '{}': {}", self.path.display(), e))
        })?;
        Ok(())
    }
}
