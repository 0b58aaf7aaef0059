#![allow(dead_code)]
/// Common test utilities and helpers
use contract_wizard::{CodeLensList, GeneratorFacade, LensAction};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway checkout of a contract catalog
pub struct TestCatalog {
    pub temp_dir: TempDir,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write `contracts/<name>/src/lib.rs`
    pub fn add_contract(&self, name: &str, content: &str) -> &Self {
        self.write_file(&format!("contracts/{}/src/lib.rs", name), content)
    }

    pub fn write_file(&self, name: &str, content: &str) -> &Self {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path_str(&self) -> String {
        self.temp_dir.path().to_string_lossy().to_string()
    }
}

pub fn facade() -> GeneratorFacade {
    GeneratorFacade::new().unwrap()
}

/// Command factory handing out `cmd-1`, `cmd-2`, ...
pub fn numbered_commands() -> impl FnMut(&LensAction) -> String {
    let mut next = 0;
    move |_: &LensAction| {
        next += 1;
        format!("cmd-{}", next)
    }
}

/// `(line, title)` of every lens
pub fn anchors(lenses: &CodeLensList) -> Vec<(usize, String)> {
    lenses
        .iter()
        .map(|lens| (lens.line, lens.title.clone()))
        .collect()
}

/// 1-based line of `text`
pub fn line_at(text: &str, line: usize) -> &str {
    text.split('\n').nth(line - 1).unwrap_or("")
}
