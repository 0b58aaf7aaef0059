use crate::analysis::{
    SourceAnalyzer, CONTRACT_MARKER, IMPL_BLOCK_MARKER, TYPE_DECLARATION_KEYWORD,
};
use crate::generators::invoke::InvokeCommand;
use crate::generators::ContractGenerator;
use crate::models::ContractSignature;

const IMPL_KEYWORD: &str = "impl";

/// Renames the contract type of an externally supplied source file.
///
/// Two independent, best-effort substitutions:
/// - the identifier after the first `pub struct` following `#[contract]`
/// - everything between the first `impl` following `#[contractimpl]` and
///   the next `{`, which becomes `<name> ` (so `impl Trait for Old {` turns
///   into `impl New {`)
///
/// A missing marker or keyword skips that substitution only.
pub struct RenameGenerator;

impl RenameGenerator {
    /// `None` means the reference has not been fetched yet and yields an
    /// empty string
    pub fn rename(reference_source: Option<&str>, new_symbol_name: &str) -> String {
        let Some(reference_source) = reference_source else {
            return String::new();
        };

        let mut source = reference_source.to_string();
        Self::rename_declaration(&mut source, new_symbol_name);
        Self::rename_impl_header(&mut source, new_symbol_name);
        source
    }

    fn rename_declaration(source: &mut String, new_symbol_name: &str) {
        let Some(marker) = source.find(CONTRACT_MARKER) else {
            return;
        };
        let Some(keyword) = source[marker..].find(TYPE_DECLARATION_KEYWORD).map(|i| marker + i) else {
            return;
        };

        let after_keyword = keyword + TYPE_DECLARATION_KEYWORD.len();
        let line_end = source[after_keyword..]
            .find('\n')
            .map_or(source.len(), |i| after_keyword + i);

        let rest_of_line = &source[after_keyword..line_end];
        let ident_start = after_keyword + (rest_of_line.len() - rest_of_line.trim_start().len());
        let ident_end = source[ident_start..line_end]
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
            .map_or(line_end, |(i, _)| ident_start + i);

        source.replace_range(ident_start..ident_end, new_symbol_name);
    }

    fn rename_impl_header(source: &mut String, new_symbol_name: &str) {
        let Some(marker) = source.find(IMPL_BLOCK_MARKER) else {
            return;
        };
        let search_from = marker + IMPL_BLOCK_MARKER.len();
        let Some(keyword) = source[search_from..]
            .find(IMPL_KEYWORD)
            .map(|i| search_from + i)
        else {
            return;
        };

        let after_keyword = keyword + IMPL_KEYWORD.len();
        let Some(brace) = source[after_keyword..].find('{').map(|i| after_keyword + i) else {
            return;
        };

        source.replace_range(after_keyword..brace, &format!(" {} ", new_symbol_name));
    }
}

/// Generator backed by a reference implementation fetched from the
/// contract catalog
pub struct ReferenceGenerator {
    trait_name: String,
    reference_source: Option<String>,
    fallback: Option<Box<dyn ContractGenerator>>,
}

impl ReferenceGenerator {
    pub fn new(trait_name: impl Into<String>, reference_source: Option<String>) -> Self {
        Self {
            trait_name: trait_name.into(),
            reference_source,
            fallback: None,
        }
    }

    /// Generator whose initializer flags apply when the reference has no
    /// recognisable `init`
    pub fn with_fallback(mut self, fallback: Box<dyn ContractGenerator>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn is_available(&self) -> bool {
        self.reference_source.is_some()
    }

    /// One-line `init` entry point of the renamed reference
    pub fn init_signature(&self, symbol_name: &str) -> Option<ContractSignature> {
        SourceAnalyzer::new()
            .extract_callable_signatures(&self.generate(symbol_name))
            .into_iter()
            .find(|s| s.name == "init")
    }
}

impl ContractGenerator for ReferenceGenerator {
    fn trait_name(&self) -> &str {
        &self.trait_name
    }

    fn generate(&self, symbol_name: &str) -> String {
        RenameGenerator::rename(self.reference_source.as_deref(), symbol_name)
    }

    /// Flags come from the `init` entry point recognised in the renamed
    /// source, then from the fallback generator. Without either the command
    /// has no flags.
    fn build_invoke_command(&self, symbol_name: &str, init_params: &[String]) -> InvokeCommand {
        if let Some(init) = self.init_signature(symbol_name) {
            let names: Vec<&str> = init
                .caller_parameters()
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            return InvokeCommand::with_positional_values(symbol_name, "init", &names, init_params);
        }

        match &self.fallback {
            Some(fallback) => fallback.build_invoke_command(symbol_name, init_params),
            None => InvokeCommand::new(symbol_name, "init"),
        }
    }

    fn default_init_params(&self) -> Vec<String> {
        self.fallback
            .as_ref()
            .map(|f| f.default_init_params())
            .unwrap_or_default()
    }
}
