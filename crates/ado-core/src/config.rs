//! Organization context and generation defaults.
//!
//! Load order: `.ado/config.toml` → environment variables → defaults.
//! The organization section is descriptive configuration: it is threaded
//! through every generated instruction set unmodified and never inspected
//! by the synthesis core.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for instruction generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdoConfig {
    pub organization: OrganizationContext,
    pub generation: GenerationConfig,
}

/// Descriptive context about the organization the work items are created for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationContext {
    pub name: String,
    pub focus_areas: Vec<String>,
    pub platform: String,
    pub scale: String,
    pub methodology: String,
}

impl Default for OrganizationContext {
    fn default() -> Self {
        Self {
            name: "Omar Solutions".to_string(),
            focus_areas: vec![
                "Data Engineering".to_string(),
                "Visualization".to_string(),
                "Analytics".to_string(),
            ],
            platform: "Azure Cloud Platform".to_string(),
            scale: "Large scale solutions".to_string(),
            methodology: "Agile development with Epic/Task hierarchy".to_string(),
        }
    }
}

/// Generation defaults applied when the caller supplies no override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Project name used when a request names none.
    pub default_project_name: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_project_name: "Generated Project".to_string(),
        }
    }
}

impl AdoConfig {
    /// Load config from `.ado/config.toml` under the given root, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(".ado").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(name) = std::env::var("ADO_ORG_NAME")
            && !name.is_empty()
        {
            config.organization.name = name;
        }
        if let Ok(project) = std::env::var("ADO_DEFAULT_PROJECT")
            && !project.is_empty()
        {
            config.generation.default_project_name = project;
        }

        Ok(config)
    }

    /// The organization context as the opaque payload carried on every
    /// instruction set.
    pub fn organization_value(&self) -> serde_json::Value {
        serde_json::to_value(&self.organization).unwrap_or(serde_json::Value::Null)
    }
}
