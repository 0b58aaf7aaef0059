use crate::generators::invoke::InvokeCommand;
use crate::generators::templates::render_scaffold;
use crate::generators::ContractGenerator;
use std::sync::Arc;
use tera::Tera;

/// Ticket raffle contract paying the pot out to randomly drawn winners
pub struct RaffleScaffold {
    tera: Arc<Tera>,
}

impl RaffleScaffold {
    pub const TRAIT_NAME: &'static str = "Raffle";
    const TEMPLATE: &'static str = "scaffold/raffle.rs.tera";
    const INIT_FLAGS: [&'static str; 4] = ["admin", "token", "max_winners_count", "ticket_price"];

    pub fn new(tera: Arc<Tera>) -> Self {
        Self { tera }
    }
}

impl ContractGenerator for RaffleScaffold {
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
        vec![String::new(), String::new(), "1".to_string(), "1".to_string()]
    }
}
