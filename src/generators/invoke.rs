use crate::analysis::default_for;
use crate::models::ContractSignature;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CLI_TOOL: &str = "soroban";
pub const DEFAULT_CONTRACT_ID: &str = "1";

const CONTINUATION: &str = " \\\n";
const FLAG_INDENT: &str = "    ";

/// One `--name value` pair of an invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvokeFlag {
    pub name: String,
    pub value: String,
}

impl InvokeFlag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for InvokeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{} {}", self.name, self.value)
    }
}

/// A ready-to-run `contract invoke` command line.
///
/// Renders as a backslash-continued multi-line command:
///
/// ```text
/// soroban contract invoke \
/// --wasm MyVote.wasm \
/// --id 1 \
/// -- \
/// vote \
///     --voter {voter_address} \
///     --id 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvokeCommand {
    pub tool: String,
    pub symbol_name: String,
    pub contract_id: String,
    pub entry_point: String,
    pub flags: Vec<InvokeFlag>,
}

impl InvokeCommand {
    pub fn new(symbol_name: impl Into<String>, entry_point: impl Into<String>) -> Self {
        Self {
            tool: DEFAULT_CLI_TOOL.to_string(),
            symbol_name: symbol_name.into(),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            entry_point: entry_point.into(),
            flags: Vec::new(),
        }
    }

    /// Example invocation of an analysed entry point. The first parameter is
    /// the execution environment and is not passed on the command line.
    pub fn from_signature(symbol_name: impl Into<String>, signature: &ContractSignature) -> Self {
        let flags = signature
            .caller_parameters()
            .iter()
            .map(|p| InvokeFlag::new(&p.name, default_for(&p.name, &p.declared_type)))
            .collect();

        Self {
            flags,
            ..Self::new(symbol_name, &signature.name)
        }
    }

    /// Pair flag names with supplied values by position. Missing values are
    /// left empty and surplus values are dropped.
    pub fn with_positional_values(
        symbol_name: impl Into<String>,
        entry_point: impl Into<String>,
        flag_names: &[&str],
        values: &[String],
    ) -> Self {
        let flags = flag_names
            .iter()
            .enumerate()
            .map(|(i, name)| InvokeFlag::new(*name, values.get(i).cloned().unwrap_or_default()))
            .collect();

        Self {
            flags,
            ..Self::new(symbol_name, entry_point)
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = contract_id.into();
        self
    }

    /// Flag lines only, joined by continuations, without a trailing one
    pub fn params_text(&self) -> String {
        self.flags
            .iter()
            .map(|flag| flag.to_string())
            .collect::<Vec<_>>()
            .join(&format!("{}{}", CONTINUATION, FLAG_INDENT))
    }
}

impl fmt::Display for InvokeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} contract invoke{}", self.tool, CONTINUATION)?;
        write!(f, "--wasm {}.wasm{}", self.symbol_name, CONTINUATION)?;
        write!(f, "--id {}{}", self.contract_id, CONTINUATION)?;
        write!(f, "--{}", CONTINUATION)?;
        write!(f, "{}", self.entry_point)?;
        if !self.flags.is_empty() {
            write!(f, "{}{}{}", CONTINUATION, FLAG_INDENT, self.params_text())?;
        }
        Ok(())
    }
}
