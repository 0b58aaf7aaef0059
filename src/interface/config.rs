use crate::generators::invoke::{DEFAULT_CLI_TOOL, DEFAULT_CONTRACT_ID};
use crate::models::GenerationRequest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid contract name: {0}. Use letters, digits and '_' only")]
    InvalidContractName(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Contract type to scaffold, e.g. "Voting" or "Raffle"
    #[serde(default = "default_contract_trait")]
    pub contract_trait: String,

    /// Name of the generated contract type
    #[serde(default = "default_contract_name")]
    pub contract_name: String,

    /// Written into the header when non-empty
    #[serde(default)]
    pub author: String,

    /// Written into the header when non-empty
    #[serde(default)]
    pub license: String,

    /// Command line tool the invoke commands call
    #[serde(default = "default_cli_tool")]
    pub cli_tool: String,

    /// Deployed contract id used in invoke commands
    #[serde(default = "default_contract_id")]
    pub contract_id: String,

    /// Initializer arguments in declaration order; the contract type's
    /// defaults are used when absent
    #[serde(default)]
    pub init_params: Option<Vec<String>>,

    /// Local checkout of the contract catalog whose reference sources
    /// replace the built-in scaffolds
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_contract_trait() -> String {
    "Voting".to_string()
}

fn default_contract_name() -> String {
    "MyContract".to_string()
}

fn default_cli_tool() -> String {
    DEFAULT_CLI_TOOL.to_string()
}

fn default_contract_id() -> String {
    DEFAULT_CONTRACT_ID.to_string()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            contract_trait: default_contract_trait(),
            contract_name: default_contract_name(),
            author: String::new(),
            license: String::new(),
            cli_tool: default_cli_tool(),
            contract_id: default_contract_id(),
            init_params: None,
            catalog_path: None,
            verbose: Some(false),
        }
    }
}

impl WizardConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract_name.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Contract name must not be empty".to_string(),
            ));
        }
        if !is_identifier(&self.contract_name) {
            return Err(ConfigError::InvalidContractName(
                self.contract_name.clone(),
            ));
        }

        if self.cli_tool.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "CLI tool must not be empty".to_string(),
            ));
        }

        if let Some(ref catalog_path) = self.catalog_path {
            if !Path::new(catalog_path).exists() {
                return Err(ConfigError::InvalidConfig(format!(
                    "Catalog path does not exist: {}",
                    catalog_path
                )));
            }
        }

        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &WizardConfig) {
        if other.contract_trait != default_contract_trait() {
            self.contract_trait = other.contract_trait.clone();
        }
        if other.contract_name != default_contract_name() {
            self.contract_name = other.contract_name.clone();
        }
        if !other.author.is_empty() {
            self.author = other.author.clone();
        }
        if !other.license.is_empty() {
            self.license = other.license.clone();
        }
        if other.cli_tool != default_cli_tool() {
            self.cli_tool = other.cli_tool.clone();
        }
        if other.contract_id != default_contract_id() {
            self.contract_id = other.contract_id.clone();
        }
        if other.init_params.is_some() {
            self.init_params = other.init_params.clone();
        }
        if other.catalog_path.is_some() {
            self.catalog_path = other.catalog_path.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(&self.contract_trait, &self.contract_name)
            .with_author(&self.author)
            .with_license(&self.license)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
