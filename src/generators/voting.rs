use crate::generators::invoke::InvokeCommand;
use crate::generators::templates::render_scaffold;
use crate::generators::ContractGenerator;
use std::sync::Arc;
use tera::Tera;

/// Proposal voting contract: an admin opens proposals, registered voters
/// approve them until the voting period ends
pub struct VotingScaffold {
    tera: Arc<Tera>,
}

impl VotingScaffold {
    pub const TRAIT_NAME: &'static str = "Voting";
    const TEMPLATE: &'static str = "scaffold/voting.rs.tera";
    const INIT_FLAGS: [&'static str; 4] = [
        "admin",
        "voting_period_secs",
        "target_approval_rate_bps",
        "total_voters",
    ];

    /// Scaffold rendering from a shared engine holding the scaffold templates
    pub fn new(tera: Arc<Tera>) -> Self {
        Self { tera }
    }
}

impl ContractGenerator for VotingScaffold {
    fn trait_name(&self) -> &str {
        Self::TRAIT_NAME
    }

    fn generate(&self, symbol_name: &str) -> String {
        render_scaffold(&self.tera, Self::TEMPLATE, symbol_name)
    }

    fn build_invoke_command(&self, symbol_name: &str, init_params: &[String]) -> InvokeCommand {
        InvokeCommand::with_positional_values(symbol_name, "init", &Self::INIT_FLAGS, init_params)
    }

    fn default_init_params(&self) -> Vec<String> {
        // admin, one hour, 50% approval, two voters
        vec![
            String::new(),
            "3600".to_string(),
            "5000".to_string(),
            "2".to_string(),
        ]
    }
}
