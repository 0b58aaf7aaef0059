//! Code lenses: clickable actions anchored on source lines.
//!
//! A lens set is rebuilt from scratch from the analyzer's output every time
//! it is asked for. Lenses only describe an action; what happens when one is
//! activated is up to the command registered through the factory.

use crate::analysis::SourceAnalyzer;
use crate::generators::invoke::InvokeCommand;
use serde::{Deserialize, Serialize};

pub const DEPLOY_LABEL: &str = "🚀 Deploy";
pub const INVOKE_LABEL: &str = "▶ Invoke";

/// Registers the command behind a lens and returns its opaque id
pub type CommandFactory<'a> = dyn FnMut(&LensAction) -> String + 'a;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LensAction {
    Deploy,
    Invoke(InvokeCommand),
    Subscribe { indent: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeLens {
    /// 1-based anchor line
    pub line: usize,
    pub title: String,
    pub command_id: String,
    pub action: LensAction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensList {
    pub lenses: Vec<CodeLens>,
}

impl CodeLensList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeLens> {
        self.lenses.iter()
    }

    /// Shift every anchor down, e.g. when the scanned text is embedded
    /// after a header
    pub fn offset(mut self, lines: usize) -> Self {
        for lens in &mut self.lenses {
            lens.line += lines;
        }
        self
    }

    fn push(&mut self, line: usize, title: &str, action: LensAction, factory: &mut CommandFactory<'_>) {
        let command_id = factory(&action);
        self.lenses.push(CodeLens {
            line,
            title: title.to_string(),
            command_id,
            action,
        });
    }
}

impl<'a> IntoIterator for &'a CodeLensList {
    type Item = &'a CodeLens;
    type IntoIter = std::slice::Iter<'a, CodeLens>;

    fn into_iter(self) -> Self::IntoIter {
        self.lenses.iter()
    }
}

/// Build the deploy, invoke and subscribe lenses for `text`.
///
/// Invocations target `<symbol_name>.wasm`; the factory is called once per
/// lens, in lens order.
pub fn collect_code_lenses(
    text: &str,
    symbol_name: &str,
    factory: &mut CommandFactory<'_>,
) -> CodeLensList {
    let analyzer = SourceAnalyzer::new();
    let mut list = CodeLensList::new();

    if let Some(line) = analyzer.find_contract_declaration_line(text) {
        list.push(line, DEPLOY_LABEL, LensAction::Deploy, factory);
    }

    for signature in analyzer.extract_callable_signatures(text) {
        let command = InvokeCommand::from_signature(symbol_name, &signature);
        list.push(signature.line_number, INVOKE_LABEL, LensAction::Invoke(command), factory);
    }

    for site in analyzer.find_event_sites(text) {
        let action = LensAction::Subscribe {
            indent: site.leading_indent,
        };
        list.push(site.line_number, &site.label, action, factory);
    }

    list
}
