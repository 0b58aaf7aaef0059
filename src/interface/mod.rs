pub mod cli;
pub mod config;
pub mod output;

use crate::analysis::SourceAnalyzer;
use crate::catalog::ContractCatalog;
use crate::error::{Error, Result};
use crate::generators::invoke::InvokeCommand;
use crate::generators::GeneratorFacade;
use crate::lens::{collect_code_lenses, CodeLensList, LensAction};
use crate::models::GeneratedSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Lenses found in one scanned source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedSource {
    pub path: String,
    pub contract_name: String,
    pub lenses: CodeLensList,
}

/// Facade with the built-in scaffolds, overridden by whatever the configured
/// catalog provides
pub fn build_facade(config: &WizardConfig, logger: &Logger) -> Result<GeneratorFacade> {
    let mut facade = GeneratorFacade::new()?;

    if let Some(ref catalog_path) = config.catalog_path {
        logger.verbose(&format!("📚 Loading contract catalog from: {}", catalog_path));

        let mut catalog = ContractCatalog::from_directory(catalog_path);
        let names = catalog.available_contracts();
        let found = catalog.load_all(names.iter().map(String::as_str));
        for name in &names {
            if catalog.source(name).is_none() {
                logger.warning(&format!("No reference source for '{}' in catalog", name));
            }
        }

        let installed = catalog.install_into(&mut facade);
        logger.info(&format!(
            "📚 Using {} of {} catalog contract{} as reference",
            installed,
            found,
            if found == 1 { "" } else { "s" }
        ));
    }

    Ok(facade)
}

/// Header and body for the configured contract type and name
pub fn generate_from_config(config: &WizardConfig, facade: &GeneratorFacade) -> Result<GeneratedSource> {
    config.validate()?;

    let source = facade.get_code(&config.to_request());
    if source.body.is_empty() {
        return Err(Error::CodeGeneration(format!(
            "No source available for contract type '{}'. Known types: {}",
            config.contract_trait,
            facade.trait_names().join(", ")
        )));
    }

    Ok(source)
}

/// Initializer invocation for the configured contract, falling back to the
/// contract type's default arguments
pub fn invoke_from_config(config: &WizardConfig, facade: &GeneratorFacade) -> Result<InvokeCommand> {
    config.validate()?;

    let generator = facade.generator(&config.contract_trait).ok_or_else(|| {
        Error::CodeGeneration(format!(
            "Unknown contract type '{}'. Known types: {}",
            config.contract_trait,
            facade.trait_names().join(", ")
        ))
    })?;

    let init_params = config
        .init_params
        .clone()
        .unwrap_or_else(|| generator.default_init_params());

    Ok(generator
        .build_invoke_command(&config.contract_name, &init_params)
        .with_tool(&config.cli_tool)
        .with_contract_id(&config.contract_id))
}

/// Scan one `.rs` file, or every `.rs` file below a directory.
///
/// Without an explicit name, invocations target the contract type the file
/// declares, or the file stem when it declares none.
pub fn analyze_path(path: &Path, contract_name: Option<&str>, logger: &Logger) -> Result<Vec<AnalyzedSource>> {
    if !path.exists() {
        return Err(Error::InvalidSourcePath(path.display().to_string()));
    }

    if path.is_file() {
        return Ok(vec![analyze_file(path, contract_name)?]);
    }

    let mut results = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::InvalidSourcePath(e.to_string()))?;
        let file_path = entry.path();

        if !file_path.is_file() || !file_path.extension().is_some_and(|ext| ext == "rs") {
            continue;
        }
        // Skip build artifacts and VCS metadata
        let relative = file_path.strip_prefix(path).unwrap_or(file_path);
        if relative
            .components()
            .any(|c| c.as_os_str() == "target" || c.as_os_str() == ".git")
        {
            continue;
        }

        logger.verbose(&format!("📄 Scanning file: {}", file_path.display()));
        results.push(analyze_file(file_path, contract_name)?);
    }

    logger.debug(&format!("📊 Scanned {} Rust files", results.len()));
    Ok(results)
}

fn analyze_file(path: &Path, contract_name: Option<&str>) -> Result<AnalyzedSource> {
    let text = fs::read_to_string(path)?;

    let contract_name = match contract_name {
        Some(name) => name.to_string(),
        None => SourceAnalyzer::new().find_contract_name(&text).unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default()
        }),
    };

    let mut next_command = 0;
    let lenses = collect_code_lenses(&text, &contract_name, &mut |action: &LensAction| {
        next_command += 1;
        match action {
            LensAction::Deploy => format!("deploy-{}", next_command),
            LensAction::Invoke(command) => format!("invoke-{}-{}", command.entry_point, next_command),
            LensAction::Subscribe { .. } => format!("subscribe-{}", next_command),
        }
    });

    Ok(AnalyzedSource {
        path: path.display().to_string(),
        contract_name,
        lenses,
    })
}
