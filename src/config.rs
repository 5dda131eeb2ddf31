//! Configuration handling for the intake form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Formspree project the agency site posts to
const DEFAULT_FORM_ID: &str = "xzddovdl";

const FORMSPREE_BASE: &str = "https://formspree.io/f/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment override for the endpoint URL
pub const ENDPOINT_ENV: &str = "LEAD_INTAKE_ENDPOINT";

/// User configuration for the intake form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Full endpoint URL, overrides `form_id`
    pub endpoint: Option<String>,
    /// Formspree form identifier
    pub form_id: Option<String>,
    /// Request timeout for the submission POST
    pub request_timeout_secs: Option<u64>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file means defaults; an unreadable one is an error
    fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: IntakeConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the endpoint: env override, then `endpoint`, then the Formspree form
    pub fn endpoint_url(&self) -> Result<Url> {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_endpoint(env_endpoint.as_deref())
    }

    fn resolve_endpoint(&self, env_endpoint: Option<&str>) -> Result<Url> {
        let raw = match (env_endpoint, &self.endpoint) {
            (Some(env), _) if !env.trim().is_empty() => env.trim().to_string(),
            (_, Some(endpoint)) => endpoint.clone(),
            _ => format!(
                "{FORMSPREE_BASE}{}",
                self.form_id.as_deref().unwrap_or(DEFAULT_FORM_ID)
            ),
        };
        Url::parse(&raw).with_context(|| format!("invalid form endpoint {raw:?}"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "vmsolutions", "lead-intake")
}
