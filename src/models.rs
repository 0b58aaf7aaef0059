use serde::{Deserialize, Serialize};

/// One declared parameter of a contract entry point, in source order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    /// Declared type as written; empty when the entry carried no `:`
    pub declared_type: String,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// A callable entry point recovered from the implementation block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractSignature {
    pub name: String,
    pub parameters: Vec<ParameterInfo>,
    /// Return type as written, e.g. "Result<(), Error>"
    pub return_type: String,
    pub return_type_generics: Vec<String>,
    /// 1-based line of the `fn` in the scanned text
    pub line_number: usize,
}

impl ContractSignature {
    /// Parameters a caller has to supply, i.e. everything after the
    /// execution environment
    pub fn caller_parameters(&self) -> &[ParameterInfo] {
        self.parameters.get(1..).unwrap_or(&[])
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterInfo> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A line that publishes a contract event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSite {
    pub line_number: usize,
    pub label: String,
    /// Count of leading whitespace characters on that line
    pub leading_indent: usize,
}

/// Output of a generation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSource {
    pub header: String,
    pub body: String,
}

impl GeneratedSource {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }

    /// Final text: header, a separating newline, then the body
    pub fn code(&self) -> String {
        format!("{}\n{}", self.header, self.body)
    }

    /// Number of lines the header and separator push the body down by
    pub fn body_line_offset(&self) -> usize {
        self.header.matches('\n').count() + 1
    }
}

/// Everything a generation request needs, captured up front so callbacks
/// never reach back into UI state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub contract_trait: String,
    pub symbol_name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub license: String,
}

impl GenerationRequest {
    pub fn new(contract_trait: impl Into<String>, symbol_name: impl Into<String>) -> Self {
        Self {
            contract_trait: contract_trait.into(),
            symbol_name: symbol_name.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }
}
