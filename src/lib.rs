//! # Contract Wizard
//!
//! Scaffold Soroban smart contracts and derive editor actions from their source.
//!
//! This library generates contract sources from built-in templates or from
//! reference contracts of a catalog, and scans contract source text for the
//! markers that drive the deploy, invoke and subscribe code lenses of the
//! wizard's editor.
//!
//! ## Features
//!
//! - 🏗️ **Scaffolds**: Voting and Raffle contracts rendered from embedded templates
//! - 📚 **Catalog References**: Rename a fetched reference contract to your own type name
//! - 🔍 **Marker Scanning**: Finds `#[contract]`, `#[contractimpl]` entry points and `env.events()` sites
//! - ▶️ **Invoke Commands**: Ready-to-paste `soroban contract invoke` command lines
//! - 🗂️ **Project Model**: In-memory file tree with stale-result protection for late fetches and builds
//!
//! ## Quick Start
//!
//! ```bash
//! # Print a voting contract named MyVote
//! contract-wizard generate --trait Voting --name MyVote --author eigerco
//!
//! # Print the command that initializes it
//! contract-wizard invoke --trait Voting --name MyVote -p GADMIN -p 3600 -p 5000 -p 2
//!
//! # List the actions of an existing contract
//! contract-wizard analyze contracts/voting/src/lib.rs
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use contract_wizard::{GenerationRequest, GeneratorFacade, LensAction};
//!
//! let facade = GeneratorFacade::new()?;
//! let request = GenerationRequest::new("Voting", "MyVote").with_author("eigerco");
//!
//! let code = facade.get_code(&request).code();
//! let lenses = facade.get_invokes(&request, &mut |action: &LensAction| {
//!     format!("{:?}", action)
//! });
//!
//! for lens in &lenses {
//!     println!("line {}: {}", lens.line, lens.title);
//! }
//! # let _ = code;
//! # Ok::<(), contract_wizard::Error>(())
//! ```
//!
//! ## Configuration
//!
//! The CLI reads an optional JSON file (`--config`):
//!
//! ```json
//! {
//!   "contract_trait": "Raffle",
//!   "contract_name": "MyRaffle",
//!   "author": "eigerco",
//!   "license": "MIT",
//!   "init_params": ["GADMIN", "CTOKEN", "1", "10"],
//!   "catalog_path": "./nebula"
//! }
//! ```

pub mod analysis;
pub mod catalog;
pub mod editor;
mod error;
pub mod generators;
pub mod interface;
pub mod lens;
pub mod models;
pub mod project;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use analysis::SourceAnalyzer;
pub use catalog::{ContractCatalog, DirectoryFetcher, SourceFetcher};
pub use editor::{language_for, EditorSession};
pub use generators::{ContractGenerator, GeneratorFacade, InvokeCommand, RenameGenerator};
pub use interface::config::WizardConfig;
pub use interface::output::Logger;
pub use lens::{collect_code_lenses, CodeLens, CodeLensList, LensAction};
pub use project::{Compiler, ProjectFile, ProjectModel};
