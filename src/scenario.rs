//! Scenario file loader.
//!
//! Loads complete engine configurations from YAML files, so scenario
//! authoring happens in data rather than code:
//!
//! ```text
//! scenarios/
//! ├── bounce.yaml
//! ├── billiard.yaml
//! └── ...
//! ```
//!
//! Each file is one [`EngineConfig`]. Missing fields take the configuration
//! defaults, so a minimal scenario only lists its bodies.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::EngineConfig;

/// Error type for scenario loading operations.
#[derive(Debug)]
pub enum ScenarioError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::IoError(e) => write!(f, "IO error: {}", e),
            ScenarioError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            ScenarioError::NotFound(name) => write!(f, "Scenario not found: {}", name),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(err: std::io::Error) -> Self {
        ScenarioError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ScenarioError {
    fn from(err: serde_yaml::Error) -> Self {
        ScenarioError::ParseError(err)
    }
}

/// Scenario loader with a configurable base directory.
pub struct ScenarioLoader {
    base_path: PathBuf,
}

impl ScenarioLoader {
    /// Create a new loader reading `.yaml` files from the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a scenario by name (without the .yaml extension).
    ///
    /// Plane normals from the file are re-normalized, so scenarios may give
    /// directions of any length.
    ///
    /// # Example
    /// ```ignore
    /// let loader = ScenarioLoader::new("scenarios");
    /// let config = loader.load("bounce")?;
    /// ```
    pub fn load(&self, name: &str) -> Result<EngineConfig, ScenarioError> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(ScenarioError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let mut config: EngineConfig = serde_yaml::from_str(&contents)?;
        for plane in &mut config.planes {
            plane.normal_vector = plane.normal_vector.normalized();
        }
        debug!(
            name,
            spheres = config.spheres.len(),
            planes = config.planes.len(),
            "loaded scenario"
        );
        Ok(config)
    }

    /// List all available scenarios, sorted by name.
    pub fn list(&self) -> Result<Vec<String>, ScenarioError> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
