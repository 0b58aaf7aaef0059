/// Fixture: contract sources as found in a contract catalog

/// Reference implementation whose type and impl header are named differently
pub const PAYMENT_SPLITTER: &str = r#"#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

#[contracttype]
pub enum DataKey {
    Admin,
    Shares,
}

#[contract]
pub struct PaymentSplitter;

#[contractimpl]
impl SplitterTrait for PaymentSplitter {
    pub fn init(env: Env, admin: Address, token: Address, shares: u32) -> Result<(), Error> {
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    pub fn distribute(env: Env, amount: i128) -> Result<Vec<i128>, Error> {
        env.events().publish((DataKey::Shares,), amount);
        Ok(Vec::new(&env))
    }
}
"#;

/// Declaration marker on line 5
pub const DECLARATION_ON_LINE_5: &str = "#![no_std]
use soroban_sdk::{contract, contractimpl, Env};

// Counts things
#[contract]
pub struct Counter;
";

/// Entry points the line scanner only partly recognises
pub const SCANNER_EDGE_CASES: &str = r#"#[contract]
pub struct Edge;

#[contractimpl]
impl Edge {
    pub fn plain(env: Env, admin: Address, amount: i128) -> u32 {
        1
    }

    pub fn nested(env: Env) -> Result<Map<u32, Vec<u32>>, Error> {
        todo!()
    }

    pub fn spread(
        env: Env,
        amount: i128,
    ) -> u32 {
        1
    }

    fn helper(env: Env, symbol: Symbol) -> Result<(), Error> {
        Ok(())
    }
}

#[contractimpl]
impl Other {
    pub fn ignored(env: Env) -> u32 {
        0
    }
}
"#;

/// Several publication styles
pub const EVENTS: &str = r#"#[contractimpl]
impl Events {
    pub fn emit(env: Env) -> u32 {
        env.events().publish((A,), 1);
        env.events()
            .publish((B,), 2);
        let events = env.events();
        1
    }
}
"#;
