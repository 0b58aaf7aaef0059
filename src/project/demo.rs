//! Content the project model is seeded with.

/// A counter contract that exercises the deploy, invoke and subscribe lenses
pub const INCREMENT_CONTRACT: &str = r#"#![no_std]
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol};

const COUNTER: Symbol = symbol_short!("COUNTER");

#[contract]
pub struct IncrementContract;

#[contractimpl]
impl IncrementContract {
    /// Increment increments an internal counter, and returns the value.
    pub fn increment(env: Env) -> u32 {
        let mut count: u32 = env.storage().instance().get(&COUNTER).unwrap_or(0);

        count += 1;

        env.storage().instance().set(&COUNTER, &count);

        // topics: "COUNTER", "increment"; data: the new count
        env.events()
            .publish((COUNTER, symbol_short!("increment")), count);

        count
    }
}
"#;

pub const CARGO_MANIFEST: &str = r#"[package]
name = "contract"
version = "0.1.0"
edition = "2021"

[lib]
crate-type = ["cdylib"]

[profile.release]
opt-level = "z"
overflow-checks = true
debug = 0
strip = "symbols"
debug-assertions = false
panic = "abort"
codegen-units = 1
lto = true

[profile.release-with-logs]
inherits = "release"
debug-assertions = true

[dependencies]
soroban-sdk = "20.0.0"

[dev-dependencies]
soroban-sdk = { version = "20.0.0", features = ["testutils"] }
"#;
