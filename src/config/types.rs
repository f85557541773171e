//! Parse results and per-line diagnostics.

use std::fmt;

/// Why a recognized line was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The key is known but its value could not be converted. The field
    /// keeps its previous value.
    InvalidValue { value: String },
    /// A script attribute appeared before any `Name` line, so there is no
    /// record to apply it to.
    OrphanAttribute,
}

/// A recognized config line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line number in the source file.
    pub line: usize,
    pub key: String,
    pub kind: DiagnosticKind,
}

impl ParseDiagnostic {
    pub fn invalid_value(line: usize, key: &str, value: &str) -> Self {
        Self {
            line,
            key: key.to_string(),
            kind: DiagnosticKind::InvalidValue {
                value: value.to_string(),
            },
        }
    }

    pub fn orphan_attribute(line: usize, key: &str) -> Self {
        Self {
            line,
            key: key.to_string(),
            kind: DiagnosticKind::OrphanAttribute,
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidValue { value } => write!(
                f,
                "line {}: invalid value '{}' for {}, keeping previous value",
                self.line, value, self.key
            ),
            DiagnosticKind::OrphanAttribute => write!(
                f,
                "line {}: {} appears before any Name line and was not applied",
                self.line, self.key
            ),
        }
    }
}

/// Entities built from one config file, in the order they were first
/// referenced, plus the lines that were skipped along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig<T> {
    pub entities: Vec<T>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl<T> ParsedConfig<T> {
    /// An empty result, used when an optional config file is absent.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}
