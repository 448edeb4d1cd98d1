use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Client configuration, loaded from an optional TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Extra suggestion lists merged after the builtin ones,
    /// keyed by field label.
    #[serde(default)]
    pub suggestions: HashMap<String, Vec<String>>,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            base_url: default_base_url(),
            suggestions: HashMap::new(),
        }
    }

    /// Configured extras for one field, empty when none are set.
    pub fn extras_for(&self, label: &str) -> &[String] {
        self.suggestions
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
