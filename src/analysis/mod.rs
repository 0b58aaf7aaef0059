//! Marker-based scanning of contract source text.
//!
//! Nothing here builds a syntax tree. Each operation is a single pass over
//! the lines of the text that recognises a handful of fixed prefixes, so
//! multi-line signatures, nested generics in return types and markers
//! inside block comments can be missed or misread. Absence always shows up
//! as an empty result, never as an error.

pub mod event_parser;
pub mod signature_parser;

use crate::models::{ContractSignature, EventSite};

use event_parser::EventParser;
use signature_parser::SignatureParser;

pub use event_parser::SUBSCRIBE_LABEL;

/// Attribute preceding the contract type declaration
pub const CONTRACT_MARKER: &str = "#[contract]";
/// Attribute preceding the block of callable entry points
pub const IMPL_BLOCK_MARKER: &str = "#[contractimpl]";
/// Start of an event publication statement
pub const EVENT_PUBLISH_MARKER: &str = "env.events()";
/// Keyword introducing the contract type after its marker
pub const TYPE_DECLARATION_KEYWORD: &str = "pub struct";

/// Stateless front for the individual scanners
#[derive(Debug, Default)]
pub struct SourceAnalyzer {
    signature_parser: SignatureParser,
    event_parser: EventParser,
}

impl SourceAnalyzer {
    pub fn new() -> Self {
        Self {
            signature_parser: SignatureParser::new(),
            event_parser: EventParser::new(),
        }
    }

    /// 1-based line of the first `#[contract]` line
    pub fn find_contract_declaration_line(&self, text: &str) -> Option<usize> {
        text.split('\n')
            .position(|line| line.trim().starts_with(CONTRACT_MARKER))
            .map(|index| index + 1)
    }

    /// Identifier declared by the first `pub struct` after `#[contract]`
    pub fn find_contract_name(&self, text: &str) -> Option<String> {
        let marker = text.find(CONTRACT_MARKER)?;
        let declaration = &text[marker..];
        let keyword = declaration.find(TYPE_DECLARATION_KEYWORD)?;
        let name: String = declaration[keyword + TYPE_DECLARATION_KEYWORD.len()..]
            .trim_start()
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        (!name.is_empty()).then_some(name)
    }

    pub fn extract_callable_signatures(&self, text: &str) -> Vec<ContractSignature> {
        self.signature_parser.extract_signatures(text)
    }

    pub fn find_event_sites(&self, text: &str) -> Vec<EventSite> {
        self.event_parser.extract_event_sites(text)
    }
}

pub fn find_contract_declaration_line(text: &str) -> Option<usize> {
    SourceAnalyzer::new().find_contract_declaration_line(text)
}

pub fn find_contract_name(text: &str) -> Option<String> {
    SourceAnalyzer::new().find_contract_name(text)
}

pub fn extract_callable_signatures(text: &str) -> Vec<ContractSignature> {
    SourceAnalyzer::new().extract_callable_signatures(text)
}

pub fn find_event_sites(text: &str) -> Vec<EventSite> {
    SourceAnalyzer::new().find_event_sites(text)
}

/// Placeholder argument for a parameter when building an example invocation
///
/// - `Address` becomes `{<name>_address}`
/// - integer types (`u*`, `i*`) become `1`
/// - anything else is left empty
pub fn default_for(param_name: &str, declared_type: &str) -> String {
    if declared_type == "Address" {
        return format!("{{{}_address}}", param_name);
    }
    if declared_type.starts_with('u') || declared_type.starts_with('i') {
        return "1".to_string();
    }
    String::new()
}
