use crate::interface::config::WizardConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contract-wizard")]
#[command(bin_name = "contract-wizard")]
#[command(about = "Scaffold Soroban contracts and derive their deploy/invoke/subscribe actions")]
pub struct WizardCli {
    #[command(subcommand)]
    pub command: WizardCommands,
}

#[derive(Subcommand)]
pub enum WizardCommands {
    /// Generate the source of a contract from a scaffold or catalog reference
    Generate {
        /// Contract type (e.g. Voting, Raffle)
        #[arg(short = 't', long = "trait", default_value = "Voting")]
        contract_trait: String,

        /// Name of the generated contract type
        #[arg(short = 'n', long = "name", default_value = "MyContract")]
        contract_name: String,

        /// Author written into the header
        #[arg(short = 'a', long, default_value = "")]
        author: String,

        /// License written into the header
        #[arg(short = 'l', long, default_value = "")]
        license: String,

        /// Write the source to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output_path: Option<PathBuf>,

        /// Local checkout of the contract catalog
        #[arg(long = "catalog")]
        catalog_path: Option<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Print the command that initializes a deployed contract
    Invoke {
        /// Contract type (e.g. Voting, Raffle)
        #[arg(short = 't', long = "trait", default_value = "Voting")]
        contract_trait: String,

        /// Name of the contract type, used for the wasm file name
        #[arg(short = 'n', long = "name", default_value = "MyContract")]
        contract_name: String,

        /// Initializer arguments in declaration order
        #[arg(short = 'p', long = "param")]
        init_params: Vec<String>,

        /// Command line tool to call
        #[arg(long = "tool", default_value = "soroban")]
        cli_tool: String,

        /// Deployed contract id
        #[arg(long = "id", default_value = "1")]
        contract_id: String,

        /// Local checkout of the contract catalog
        #[arg(long = "catalog")]
        catalog_path: Option<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// List the code lenses of a source file or of every .rs file below a directory
    Analyze {
        /// File or directory to scan
        path: PathBuf,

        /// Contract name the invoke commands target (default: the declared contract type)
        #[arg(short = 'n', long = "name")]
        contract_name: Option<String>,

        /// Print lenses as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
    /// List the contract types that can be generated
    Traits {
        /// Local checkout of the contract catalog
        #[arg(long = "catalog")]
        catalog_path: Option<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
}

impl WizardCommands {
    pub fn config_file(&self) -> Option<&PathBuf> {
        match self {
            WizardCommands::Generate { config_file, .. }
            | WizardCommands::Invoke { config_file, .. } => config_file.as_ref(),
            WizardCommands::Analyze { .. } | WizardCommands::Traits { .. } => None,
        }
    }
}

impl From<&WizardCommands> for WizardConfig {
    fn from(cmd: &WizardCommands) -> Self {
        match cmd {
            WizardCommands::Generate {
                contract_trait,
                contract_name,
                author,
                license,
                catalog_path,
                verbose,
                ..
            } => WizardConfig {
                contract_trait: contract_trait.clone(),
                contract_name: contract_name.clone(),
                author: author.clone(),
                license: license.clone(),
                catalog_path: catalog_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                verbose: verbose.then_some(true),
                ..Default::default()
            },
            WizardCommands::Invoke {
                contract_trait,
                contract_name,
                init_params,
                cli_tool,
                contract_id,
                catalog_path,
                verbose,
                ..
            } => WizardConfig {
                contract_trait: contract_trait.clone(),
                contract_name: contract_name.clone(),
                cli_tool: cli_tool.clone(),
                contract_id: contract_id.clone(),
                init_params: if init_params.is_empty() {
                    None
                } else {
                    Some(init_params.clone())
                },
                catalog_path: catalog_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                verbose: verbose.then_some(true),
                ..Default::default()
            },
            WizardCommands::Analyze {
                contract_name,
                verbose,
                ..
            } => {
                let mut config = WizardConfig {
                    verbose: verbose.then_some(true),
                    ..Default::default()
                };
                if let Some(name) = contract_name {
                    config.contract_name = name.clone();
                }
                config
            }
            WizardCommands::Traits {
                catalog_path,
                verbose,
            } => WizardConfig {
                catalog_path: catalog_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                verbose: verbose.then_some(true),
                ..Default::default()
            },
        }
    }
}
