//! Reference contract sources loaded from a contract catalog repository.
//!
//! The catalog is laid out as `contracts/<name>/src/lib.rs`. Where the text
//! actually comes from is up to a [`SourceFetcher`]; any failure to get it
//! is treated as the contract not being available.

use crate::generators::{selector_key, GeneratorFacade};
use heck::ToSnakeCase;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONTRACTS_DIR: &str = "contracts";

/// Retrieves raw text by catalog-relative path
pub trait SourceFetcher {
    fn fetch(&self, path: &str) -> Option<String>;

    /// Names of the entries directly under `dir`, if the backend can list them
    fn list(&self, _dir: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Fetches from a local checkout of the catalog repository
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceFetcher for DirectoryFetcher {
    fn fetch(&self, path: &str) -> Option<String> {
        fs::read_to_string(self.root.join(path)).ok()
    }

    fn list(&self, dir: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.root.join(dir)) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

/// Catalog-relative path of a contract's source, e.g. `PaymentSplitter`
/// resolves to `contracts/payment_splitter/src/lib.rs`
pub fn reference_path(contract_name: &str) -> String {
    format!(
        "{}/{}/src/lib.rs",
        CONTRACTS_DIR,
        contract_name.trim().to_snake_case()
    )
}

/// Reference sources by contract name, loaded on demand
pub struct ContractCatalog {
    fetcher: Box<dyn SourceFetcher>,
    sources: BTreeMap<String, Option<String>>,
}

impl ContractCatalog {
    pub fn new(fetcher: Box<dyn SourceFetcher>) -> Self {
        Self {
            fetcher,
            sources: BTreeMap::new(),
        }
    }

    pub fn from_directory<P: AsRef<Path>>(root: P) -> Self {
        Self::new(Box::new(DirectoryFetcher::new(root)))
    }

    /// Contract names the backend knows about
    pub fn available_contracts(&self) -> Vec<String> {
        self.fetcher.list(CONTRACTS_DIR)
    }

    /// Fetch and remember the source of `contract_name`. A failed fetch is
    /// remembered too, so the absence is visible to callers.
    pub fn load(&mut self, contract_name: &str) -> Option<&str> {
        let source = self.fetcher.fetch(&reference_path(contract_name));
        let slot = self
            .sources
            .entry(selector_key(contract_name))
            .or_default();
        *slot = source;
        slot.as_deref()
    }

    /// Load every name, returning how many were found
    pub fn load_all<'a, I>(&mut self, contract_names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        contract_names
            .into_iter()
            .filter(|name| self.load(name).is_some())
            .count()
    }

    pub fn source(&self, contract_name: &str) -> Option<&str> {
        self.sources
            .get(&selector_key(contract_name))
            .and_then(|s| s.as_deref())
    }

    pub fn is_loaded(&self, contract_name: &str) -> bool {
        self.sources.contains_key(&selector_key(contract_name))
    }

    /// Serve every contract that was found from its reference source,
    /// replacing scaffolds under the same selector. Returns how many were
    /// installed.
    pub fn install_into(&self, facade: &mut GeneratorFacade) -> usize {
        let mut installed = 0;
        for (key, source) in &self.sources {
            let Some(source) = source else {
                continue;
            };
            let trait_name = facade
                .generator(key)
                .map(|g| g.trait_name().to_string())
                .unwrap_or_else(|| key.clone());
            facade.register_reference(&trait_name, Some(source.clone()));
            installed += 1;
        }
        installed
    }
}
