//! Generating scaffolds through the facade and reading them back

use crate::common;

use contract_wizard::analysis::{extract_callable_signatures, find_contract_declaration_line};
use contract_wizard::{GenerationRequest, LensAction};

#[test]
fn test_voting_scenario() {
    let facade = common::facade();
    let body = facade.generate_body("Voting", "MyVote");

    let signatures = extract_callable_signatures(&body);
    let names: Vec<&str> = signatures.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["init", "create_proposal", "vote"]);

    let lines: Vec<usize> = signatures.iter().map(|s| s.line_number).collect();
    assert!(lines[0] > 0);
    assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_symbol_name_only_at_declaration_and_impl() {
    let facade = common::facade();
    for trait_name in facade.trait_names() {
        let body = facade.generate_body(&trait_name, "Renamed");
        assert!(body.contains("#[contract]\npub struct Renamed;"), "{}", trait_name);
        assert!(body.contains("#[contractimpl]\nimpl Renamed {"), "{}", trait_name);
        assert_eq!(body.matches("Renamed").count(), 2, "{}", trait_name);
        assert!(!body.contains("{{"), "{}", trait_name);
    }
}

#[test]
fn test_header_shifts_every_lens() {
    let facade = common::facade();
    let bare = GenerationRequest::new("Raffle", "Lucky");
    let signed = GenerationRequest::new("Raffle", "Lucky")
        .with_author("eigerco")
        .with_license("MIT");

    let bare_lenses = facade.get_invokes(&bare, &mut common::numbered_commands());
    let signed_lenses = facade.get_invokes(&signed, &mut common::numbered_commands());
    assert_eq!(bare_lenses.len(), signed_lenses.len());

    for (bare, signed) in bare_lenses.iter().zip(signed_lenses.iter()) {
        assert_eq!(signed.line, bare.line + 2);
        assert_eq!(signed.title, bare.title);
    }

    let code = facade.get_code(&signed).code();
    let deploy_line = find_contract_declaration_line(&code).unwrap();
    assert_eq!(signed_lenses.lenses[0].line, deploy_line);
    assert_eq!(common::line_at(&code, deploy_line), "#[contract]");
}

#[test]
fn test_every_invoke_lens_points_at_its_fn() {
    let facade = common::facade();
    let request = GenerationRequest::new("Voting", "MyVote").with_author("eigerco");
    let code = facade.get_code(&request).code();

    let lenses = facade.get_invokes(&request, &mut common::numbered_commands());
    for lens in &lenses {
        if let LensAction::Invoke(command) = &lens.action {
            let line = common::line_at(&code, lens.line);
            assert!(
                line.contains(&format!("fn {}(", command.entry_point)),
                "line {} is {:?}",
                lens.line,
                line
            );
        }
    }
}

#[test]
fn test_raffle_init_command() {
    let facade = common::facade();
    let params: Vec<String> = ["GADMIN", "CTOKEN", "3", "10"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let command = facade
        .build_invoke_command("raffle", "Lucky", &params)
        .unwrap();

    assert_eq!(
        command.params_text(),
        "--admin GADMIN \\\n    --token CTOKEN \\\n    --max_winners_count 3 \\\n    --ticket_price 10"
    );
}

#[test]
fn test_short_parameter_list_leaves_values_empty() {
    let facade = common::facade();
    let generator = facade.generator("Voting").unwrap();
    let command = generator.build_invoke_command("MyVote", &["GADMIN".to_string()]);

    let values: Vec<&str> = command.flags.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(values, vec!["GADMIN", "", "", ""]);
}

#[test]
fn test_unknown_trait_degrades_to_nothing() {
    let facade = common::facade();
    let request = GenerationRequest::new("NoSuchTrait", "X").with_author("eigerco");

    assert_eq!(facade.generate_body("NoSuchTrait", "X"), "");
    assert_eq!(facade.get_code(&request).code(), "// author: eigerco\n\n");
    assert!(facade
        .get_invokes(&request, &mut |_: &LensAction| String::new())
        .is_empty());
}
