//! Configuration files and the driver functions behind the CLI

use crate::common;
use crate::fixtures;

use common::TestCatalog;
use contract_wizard::interface::{
    analyze_path, build_facade, generate_from_config, invoke_from_config, ConfigError, Logger,
};
use contract_wizard::{Error, LensAction, WizardConfig};
use tempfile::NamedTempFile;

fn quiet() -> Logger {
    Logger::new(false, false)
}

#[test]
fn test_config_file_round_trip_drives_generation() {
    let config = WizardConfig {
        contract_trait: "Raffle".to_string(),
        contract_name: "Lucky".to_string(),
        author: "eigerco".to_string(),
        license: "MIT".to_string(),
        ..Default::default()
    };
    let file = NamedTempFile::new().unwrap();
    config.save_to_file(file.path()).unwrap();

    let loaded = WizardConfig::from_file(file.path()).unwrap();
    let facade = build_facade(&loaded, &quiet()).unwrap();
    let code = generate_from_config(&loaded, &facade).unwrap().code();

    assert!(code.starts_with("// author: eigerco\n// license: MIT\n\n"));
    assert!(code.contains("pub struct Lucky;"));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{ "contract_name": "" }"#).unwrap();

    let err = WizardConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));

    std::fs::write(file.path(), "not json").unwrap();
    assert!(matches!(
        WizardConfig::from_file(file.path()),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_invalid_name_fails_generation() {
    let facade = common::facade();
    let config = WizardConfig {
        contract_name: "1stContract".to_string(),
        ..Default::default()
    };
    let err = generate_from_config(&config, &facade).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::InvalidContractName(_))));
}

#[test]
fn test_invoke_with_explicit_params() {
    let facade = common::facade();
    let config = WizardConfig {
        contract_trait: "Raffle".to_string(),
        contract_name: "Lucky".to_string(),
        init_params: Some(vec![
            "GADMIN".to_string(),
            "CTOKEN".to_string(),
            "2".to_string(),
            "5".to_string(),
        ]),
        ..Default::default()
    };

    let command = invoke_from_config(&config, &facade).unwrap();
    assert_eq!(
        command.to_string(),
        "soroban contract invoke \\\n\
         --wasm Lucky.wasm \\\n\
         --id 1 \\\n\
         -- \\\n\
         init \\\n    \
         --admin GADMIN \\\n    \
         --token CTOKEN \\\n    \
         --max_winners_count 2 \\\n    \
         --ticket_price 5"
    );
}

#[test]
fn test_catalog_config_replaces_scaffold() {
    let catalog = TestCatalog::new();
    catalog.add_contract("voting", fixtures::contracts::PAYMENT_SPLITTER);

    let config = WizardConfig {
        contract_name: "Ballot".to_string(),
        catalog_path: Some(catalog.path_str()),
        ..Default::default()
    };
    let facade = build_facade(&config, &quiet()).unwrap();
    let body = generate_from_config(&config, &facade).unwrap().body;

    assert!(body.contains("pub struct Ballot;"));
    assert!(body.contains("impl Ballot {"));

    let command = invoke_from_config(&config, &facade).unwrap();
    assert_eq!(command.flags.len(), 3);
}

#[test]
fn test_analyze_catalog_tree_as_json() {
    let catalog = TestCatalog::new();
    catalog.add_contract("payment-splitter", fixtures::contracts::PAYMENT_SPLITTER);
    catalog.add_contract("counter", fixtures::contracts::DECLARATION_ON_LINE_5);
    catalog.write_file("target/debug/build/out.rs", "#[contract]\npub struct Built;\n");

    let results = analyze_path(catalog.path(), None, &quiet()).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.contract_name.as_str()).collect();
    assert_eq!(names, vec!["Counter", "PaymentSplitter"]);

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[1]["contractName"], "PaymentSplitter");
    assert_eq!(json[1]["lenses"]["lenses"][0]["action"]["kind"], "deploy");
    assert_eq!(json[1]["lenses"]["lenses"][1]["commandId"], "invoke-init-2");
}

#[test]
fn test_analyze_single_file_with_name_override() {
    let catalog = TestCatalog::new();
    catalog.write_file("lib.rs", fixtures::contracts::PAYMENT_SPLITTER);

    let results = analyze_path(&catalog.path().join("lib.rs"), Some("Custom"), &quiet()).unwrap();
    assert_eq!(results.len(), 1);
    let invoke = results[0]
        .lenses
        .iter()
        .find_map(|lens| match &lens.action {
            LensAction::Invoke(command) => Some(command),
            _ => None,
        })
        .unwrap();
    assert_eq!(invoke.symbol_name, "Custom");
}
