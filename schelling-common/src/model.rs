use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Description of the simulation model that produced a locations file.
///
/// The document is authored by the simulation side; beyond an optional
/// `name`, its keys are carried untyped and never interpreted here.
#[derive(Deserialize, Debug, Clone)]
pub struct ModelDescription {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ModelDescription {
    /// Loads a model description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let text = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read model file '{}': {}", path_ref.display(), e))?;
        let model: ModelDescription = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON from '{}': {}", path_ref.display(), e))?;

        Ok(model)
    }

    /// Label used when reporting which model a figure belongs to.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed model")
    }
}
