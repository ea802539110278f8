//! Crate-level error types.

use std::fmt;

use crate::bindings::BindingError;

/// Errors produced by the mulch crate.
#[derive(Debug)]
pub enum MulchError {
    /// A shader disagrees with the binding registry.
    Binding(BindingError),
    /// Shader composition failed.
    ShaderCompose(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MulchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binding(e) => write!(f, "binding layout mismatch: {e}"),
            Self::ShaderCompose(msg) => {
                write!(f, "shader composition error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MulchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Binding(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BindingError> for MulchError {
    fn from(e: BindingError) -> Self {
        Self::Binding(e)
    }
}

impl From<std::io::Error> for MulchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
