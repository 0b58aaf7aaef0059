use clap::Parser;
use contract_wizard::interface::{
    analyze_path, build_facade, generate_from_config, invoke_from_config, print_lenses,
    print_usage_info, Logger, WizardCli, WizardCommands, WizardConfig,
};
use std::fs;

fn main() {
    let cli = WizardCli::parse();

    let config = match load_config(&cli.command) {
        Ok(config) => config,
        Err(e) => {
            Logger::new(false, false).error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };
    let logger = Logger::new(config.is_verbose(), false);

    if let Err(e) = run(&cli.command, &config, &logger) {
        logger.error(&e.to_string());
        std::process::exit(1);
    }
}

/// Config file first, then command line values that differ from the defaults
fn load_config(command: &WizardCommands) -> Result<WizardConfig, Box<dyn std::error::Error>> {
    let cli_config = WizardConfig::from(command);

    let mut config = match command.config_file() {
        Some(path) => WizardConfig::from_file(path)?,
        None => WizardConfig::default(),
    };
    config.merge(&cli_config);
    Ok(config)
}

fn run(
    command: &WizardCommands,
    config: &WizardConfig,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        WizardCommands::Generate { output_path, .. } => {
            logger.verbose(&format!(
                "🏗️  Generating {} contract {}",
                config.contract_trait, config.contract_name
            ));

            let facade = build_facade(config, logger)?;
            let code = generate_from_config(config, &facade)?.code();

            match output_path {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(path, code)?;
                    print_usage_info(&path.display().to_string(), &config.contract_name);
                }
                None => print!("{}", code),
            }
        }
        WizardCommands::Invoke { .. } => {
            let facade = build_facade(config, logger)?;
            let command = invoke_from_config(config, &facade)?;
            println!("{}", command);
        }
        WizardCommands::Analyze {
            path,
            contract_name,
            json,
            ..
        } => {
            logger.verbose(&format!("🔍 Scanning contract sources in: {}", path.display()));

            let results = analyze_path(path, contract_name.as_deref(), logger)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for source in &results {
                    print_lenses(&source.path, &source.lenses);
                }
            }

            if results.iter().all(|r| r.lenses.is_empty()) {
                logger.warning("No contract markers found. Make sure the sources contain #[contract] or #[contractimpl] attributes.");
            }
        }
        WizardCommands::Traits { .. } => {
            let facade = build_facade(config, logger)?;
            for name in facade.trait_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
