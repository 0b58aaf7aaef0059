//! Editor wiring for one open file.
//!
//! An [`EditorSession`] carries everything its callbacks need (which file,
//! which contract name the invocations target, the lens set currently
//! installed) so nothing has to reach back into shared UI state.

use crate::lens::{collect_code_lenses, CodeLensList, CommandFactory};
use crate::project::ProjectModel;
use std::path::Path;

/// Editor language id for a file name: `rs` maps to `rust`, any other
/// extension is passed through
pub fn language_for(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name).extension()?.to_str()?;
    match extension {
        "rs" => Some("rust".to_string()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub file_id: u32,
    pub symbol_name: String,
    lenses: CodeLensList,
}

impl EditorSession {
    pub fn new(file_id: u32, symbol_name: impl Into<String>) -> Self {
        Self {
            file_id,
            symbol_name: symbol_name.into(),
            lenses: CodeLensList::new(),
        }
    }

    /// Install the lens set for the file as it is in `model`
    pub fn mount(&mut self, model: &ProjectModel, factory: &mut CommandFactory<'_>) -> &CodeLensList {
        let text = model.get_file_content(self.file_id).unwrap_or_default();
        self.lenses = collect_code_lenses(text, &self.symbol_name, factory);
        &self.lenses
    }

    /// Store the edited text, then replace the lens set with one built from it
    pub fn on_change(
        &mut self,
        model: &mut ProjectModel,
        text: &str,
        factory: &mut CommandFactory<'_>,
    ) -> &CodeLensList {
        model.update_file_content(self.file_id, text);
        self.mount(model, factory)
    }

    pub fn lenses(&self) -> &CodeLensList {
        &self.lenses
    }

    pub fn dispose(&mut self) {
        self.lenses = CodeLensList::new();
    }
}
