use crate::analysis::IMPL_BLOCK_MARKER;
use crate::models::{ContractSignature, ParameterInfo};
use regex::Regex;
use std::sync::OnceLock;

/// One-line entry point shape: `fn name(params) -> Ret<generics> {`.
/// Generic arguments may not nest another `>`.
fn signature_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"fn (\w+)\(([^)]*)\)\s*->\s*(\w+)(?:<([^>]*)>)?\s*\{")
            .expect("signature pattern is a valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InsideImpl,
}

/// Line scanner for the entry points of the first `#[contractimpl]` block
#[derive(Debug, Default)]
pub struct SignatureParser;

impl SignatureParser {
    pub fn new() -> Self {
        Self
    }

    /// Scan `text` and return every one-line signature inside the first
    /// implementation block, in source order.
    ///
    /// The block ends at the first column-0 `}` after the marker; anything
    /// after that is not looked at.
    pub fn extract_signatures(&self, text: &str) -> Vec<ContractSignature> {
        let mut signatures = Vec::new();
        let mut state = ScanState::Outside;

        for (index, line) in text.split('\n').enumerate() {
            let trimmed = line.trim();

            match state {
                ScanState::Outside => {
                    if trimmed.starts_with(IMPL_BLOCK_MARKER) {
                        state = ScanState::InsideImpl;
                    }
                }
                ScanState::InsideImpl => {
                    if trimmed.starts_with("pub fn") || trimmed.starts_with("fn") {
                        if let Some(signature) = self.parse_signature_line(trimmed, index + 1) {
                            signatures.push(signature);
                        }
                    } else if line.starts_with('}') {
                        break;
                    }
                }
            }
        }

        signatures
    }

    /// Match a single trimmed line; `None` for anything that is not a
    /// complete one-line signature
    pub fn parse_signature_line(&self, line: &str, line_number: usize) -> Option<ContractSignature> {
        let captures = signature_pattern().captures(line)?;

        let name = captures.get(1)?.as_str().to_string();
        let parameters = Self::parse_parameters(captures.get(2).map_or("", |m| m.as_str()));
        let base_type = captures.get(3)?.as_str();

        let (return_type, return_type_generics) = match captures.get(4) {
            Some(generics) => (
                format!("{}<{}>", base_type, generics.as_str()),
                generics
                    .as_str()
                    .split(',')
                    .map(|g| g.trim().to_string())
                    .collect(),
            ),
            None => (base_type.to_string(), Vec::new()),
        };

        Some(ContractSignature {
            name,
            parameters,
            return_type,
            return_type_generics,
            line_number,
        })
    }

    /// Split a raw parameter list on `,` then on the first `:`.
    ///
    /// Empty entries are dropped. A repeated name keeps its first position
    /// and takes the later type.
    fn parse_parameters(raw: &str) -> Vec<ParameterInfo> {
        let mut parameters: Vec<ParameterInfo> = Vec::new();

        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (name, declared_type) = match entry.split_once(':') {
                Some((name, ty)) => (name.trim(), ty.trim()),
                None => (entry, ""),
            };

            match parameters.iter_mut().find(|p| p.name == name) {
                Some(existing) => existing.declared_type = declared_type.to_string(),
                None => parameters.push(ParameterInfo::new(name, declared_type)),
            }
        }

        parameters
    }
}
