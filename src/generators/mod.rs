pub mod invoke;
pub mod raffle;
pub mod rename;
pub mod templates;
pub mod voting;

use crate::error::{Error, Result};
use crate::lens::{collect_code_lenses, CodeLensList, CommandFactory};
use crate::models::{GeneratedSource, GenerationRequest};
use heck::ToSnakeCase;
use std::collections::HashMap;
use std::sync::Arc;

pub use invoke::{InvokeCommand, InvokeFlag};
pub use raffle::RaffleScaffold;
pub use rename::{ReferenceGenerator, RenameGenerator};
pub use voting::VotingScaffold;

use templates::create_template_engine;

/// Macro to reduce boilerplate for template registration
#[macro_export]
macro_rules! template {
    ($tera:expr, $name:expr, $path:expr) => {
        $tera
            .add_raw_template($name, include_str!($path))
            .map_err(|e| format!("Failed to register {}: {}", $name, e))?;
    };
}

/// A producer of contract source for one contract type
pub trait ContractGenerator {
    /// Selector this generator is registered under, e.g. "Voting"
    fn trait_name(&self) -> &str;

    /// Complete contract source declaring `symbol_name`
    fn generate(&self, symbol_name: &str) -> String;

    /// Invocation of the initializer with `init_params` in declaration order
    fn build_invoke_command(&self, symbol_name: &str, init_params: &[String]) -> InvokeCommand;

    /// Initializer arguments to show before the user has entered any
    fn default_init_params(&self) -> Vec<String> {
        Vec::new()
    }

    /// Lenses over the generated source, anchored on its own lines
    fn code_lenses(&self, symbol_name: &str, factory: &mut CommandFactory<'_>) -> CodeLensList {
        collect_code_lenses(&self.generate(symbol_name), symbol_name, factory)
    }
}

/// Normalised registry key for a contract-type selector
pub fn selector_key(trait_name: &str) -> String {
    trait_name.trim().to_snake_case()
}

/// Single entry point for the UI: picks a generator by contract type and
/// assembles header and body.
///
/// Unknown selectors never fail; they produce empty output.
pub struct GeneratorFacade {
    generators: HashMap<String, Box<dyn ContractGenerator>>,
}

impl GeneratorFacade {
    /// Facade with the built-in scaffolds registered, rendering through one
    /// shared template engine
    pub fn new() -> Result<Self> {
        let tera = Arc::new(create_template_engine().map_err(Error::CodeGeneration)?);

        let mut facade = Self::empty();
        facade.register(Box::new(RaffleScaffold::new(Arc::clone(&tera))));
        facade.register(Box::new(VotingScaffold::new(tera)));
        Ok(facade)
    }

    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Register a generator, replacing any with the same selector
    pub fn register(&mut self, generator: Box<dyn ContractGenerator>) {
        self.generators
            .insert(selector_key(generator.trait_name()), generator);
    }

    /// Serve `trait_name` from a reference implementation instead of a
    /// scaffold. `None` registers a generator with nothing to show yet.
    ///
    /// The generator being replaced still builds the initializer invocation
    /// whenever the reference has no `init` the scanner recognises.
    pub fn register_reference(&mut self, trait_name: &str, reference_source: Option<String>) {
        let replaced = self.generators.remove(&selector_key(trait_name));
        let mut reference = ReferenceGenerator::new(trait_name, reference_source);
        if let Some(replaced) = replaced {
            reference = reference.with_fallback(replaced);
        }
        self.register(Box::new(reference));
    }

    pub fn generator(&self, trait_name: &str) -> Option<&dyn ContractGenerator> {
        self.generators
            .get(&selector_key(trait_name))
            .map(|g| &**g)
    }

    /// Registered selectors, sorted
    pub fn trait_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .generators
            .values()
            .map(|g| g.trait_name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Author line then license line, each only when non-empty
    pub fn generate_header(author: &str, license: &str) -> String {
        let mut header = String::new();
        if !author.is_empty() {
            header.push_str(&format!("// author: {}\n", author));
        }
        if !license.is_empty() {
            header.push_str(&format!("// license: {}\n", license));
        }
        header
    }

    pub fn generate_body(&self, trait_name: &str, symbol_name: &str) -> String {
        self.generator(trait_name)
            .map(|g| g.generate(symbol_name))
            .unwrap_or_default()
    }

    pub fn get_code(&self, request: &GenerationRequest) -> GeneratedSource {
        GeneratedSource::new(
            Self::generate_header(&request.author, &request.license),
            self.generate_body(&request.contract_trait, &request.symbol_name),
        )
    }

    /// Initializer invocation for the selected contract type, if registered
    pub fn build_invoke_command(
        &self,
        trait_name: &str,
        symbol_name: &str,
        init_params: &[String],
    ) -> Option<InvokeCommand> {
        self.generator(trait_name)
            .map(|g| g.build_invoke_command(symbol_name, init_params))
    }

    /// Lenses for the text `get_code(request)` produces, so anchors line up
    /// with the header included
    pub fn get_invokes(
        &self,
        request: &GenerationRequest,
        factory: &mut CommandFactory<'_>,
    ) -> CodeLensList {
        let Some(generator) = self.generator(&request.contract_trait) else {
            return CodeLensList::new();
        };

        let header = Self::generate_header(&request.author, &request.license);
        let offset = GeneratedSource::new(header, "").body_line_offset();

        generator
            .code_lenses(&request.symbol_name, factory)
            .offset(offset)
    }
}

impl Default for GeneratorFacade {
    fn default() -> Self {
        Self::empty()
    }
}
