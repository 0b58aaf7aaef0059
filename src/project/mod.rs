//! In-memory project tree edited in the wizard.
//!
//! Content is owned by an id-keyed map. The tree only records ids in
//! display order and is materialised into [`ProjectFile`] values when asked
//! for, so there is a single place content can change.

pub mod demo;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the synthetic root node
pub const ROOT_ID: u32 = 0;

const DEFAULT_PROJECT_NAME: &str = "contract";

/// A node of the project tree as handed to the display layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: u32,
    pub name: String,
    pub content: String,
    pub children: Vec<ProjectFile>,
}

/// Submits a full source text for building
pub trait Compiler {
    fn compile(&self, source: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
struct FileEntry {
    name: String,
    content: String,
    is_dir: bool,
    /// Bumped on every content update
    revision: u64,
    children: Vec<u32>,
}

impl FileEntry {
    fn file(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
            is_dir: false,
            revision: 0,
            children: Vec::new(),
        }
    }

    fn dir(name: &str, children: Vec<u32>) -> Self {
        Self {
            name: name.to_string(),
            content: String::new(),
            is_dir: true,
            revision: 0,
            children,
        }
    }
}

#[derive(Debug)]
pub struct ProjectModel {
    name: String,
    files: HashMap<u32, FileEntry>,
    root_children: Vec<u32>,
    next_id: u32,
    wasm: Option<Vec<u8>>,
}

impl ProjectModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: HashMap::new(),
            root_children: Vec::new(),
            next_id: ROOT_ID + 1,
            wasm: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reset(&mut self) {
        self.files.clear();
        self.root_children.clear();
        self.wasm = None;
    }

    /// Replace the tree with a single `lib.rs` holding the demo contract
    pub fn initialize_single_file(&mut self) {
        self.reset();

        let lib_id = self.allocate_id();
        self.files
            .insert(lib_id, FileEntry::file("lib.rs", demo::INCREMENT_CONTRACT));
        self.root_children.push(lib_id);
    }

    /// Replace the tree with `src/lib.rs` and a `Cargo.toml` next to `src`
    pub fn initialize_multi_file(&mut self) {
        self.reset();

        let src_id = self.allocate_id();
        let manifest_id = self.allocate_id();
        let lib_id = self.allocate_id();

        self.files
            .insert(lib_id, FileEntry::file("lib.rs", demo::INCREMENT_CONTRACT));
        self.files
            .insert(manifest_id, FileEntry::file("Cargo.toml", demo::CARGO_MANIFEST));
        self.files.insert(src_id, FileEntry::dir("src", vec![lib_id]));
        self.root_children = vec![src_id, manifest_id];
    }

    /// Content of a file; `None` for unknown ids and directories
    pub fn get_file_content(&self, id: u32) -> Option<&str> {
        self.files
            .get(&id)
            .filter(|entry| !entry.is_dir)
            .map(|entry| entry.content.as_str())
    }

    pub fn get_file_name(&self, id: u32) -> Option<&str> {
        self.files.get(&id).map(|entry| entry.name.as_str())
    }

    /// Replace a file's content. Unknown ids and directories are ignored.
    pub fn update_file_content(&mut self, id: u32, content: impl Into<String>) {
        if let Some(entry) = self.files.get_mut(&id).filter(|entry| !entry.is_dir) {
            entry.content = content.into();
            entry.revision += 1;
        }
    }

    pub fn revision(&self, id: u32) -> Option<u64> {
        self.files.get(&id).map(|entry| entry.revision)
    }

    /// Apply a late result only if nothing changed the file since
    /// `revision` was read. Returns whether the update went through.
    pub fn update_if_current(&mut self, id: u32, revision: u64, content: impl Into<String>) -> bool {
        if self.revision(id) != Some(revision) || self.get_file_content(id).is_none() {
            return false;
        }
        self.update_file_content(id, content);
        true
    }

    /// Materialise the tree under a root with id 0 named after the project
    pub fn get_tree(&self) -> ProjectFile {
        ProjectFile {
            id: ROOT_ID,
            name: self.name.clone(),
            content: String::new(),
            children: self.materialise(&self.root_children),
        }
    }

    fn materialise(&self, ids: &[u32]) -> Vec<ProjectFile> {
        ids.iter()
            .filter_map(|id| {
                self.files.get(id).map(|entry| ProjectFile {
                    id: *id,
                    name: entry.name.clone(),
                    content: entry.content.clone(),
                    children: self.materialise(&entry.children),
                })
            })
            .collect()
    }

    /// Number of nodes below the root, directories included
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Ids in display order, depth first
    pub fn file_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        self.collect_ids(&self.root_children, &mut ids);
        ids
    }

    fn collect_ids(&self, children: &[u32], ids: &mut Vec<u32>) {
        for id in children {
            ids.push(*id);
            if let Some(entry) = self.files.get(id) {
                self.collect_ids(&entry.children, ids);
            }
        }
    }

    /// Id of the first file with `name`, in display order
    pub fn find_file(&self, name: &str) -> Option<u32> {
        self.file_ids()
            .into_iter()
            .find(|id| self.get_file_name(*id) == Some(name))
    }

    /// Build the content of `id` and keep the artifact as the project's wasm.
    /// `Ok(false)` when there is no such file.
    pub fn compile_with(&mut self, id: u32, compiler: &dyn Compiler) -> Result<bool> {
        let Some(source) = self.get_file_content(id) else {
            return Ok(false);
        };

        let wasm = compiler.compile(source)?;
        self.wasm = Some(wasm);
        Ok(true)
    }

    pub fn wasm(&self) -> Option<&[u8]> {
        self.wasm.as_deref()
    }
}

impl Default for ProjectModel {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}
