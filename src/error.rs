//! Error types for driftfield.
//!
//! The engine has very few failure modes: everything that can go wrong happens
//! at startup (missing words, bad tunables, unreadable config file). Runtime
//! geometry edge cases are handled by policy and never surface as errors.

use std::fmt;

/// Errors that prevent an engine from being built.
#[derive(Debug)]
pub enum EngineError {
    /// No word bank was supplied to the builder.
    MissingWordBank,
    /// The word bank contained no usable entries.
    EmptyWordBank,
    /// A tunable is out of range.
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingWordBank => write!(f, "No word bank provided. Use .with_word_bank() to set one."),
            EngineError::EmptyWordBank => write!(f, "Word bank is empty. At least one display string is required."),
            EngineError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// The file is not valid JSON for [`Config`](crate::Config).
    Parse(serde_json::Error),
    /// The file parsed but its values are rejected by validation.
    Invalid(EngineError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<EngineError> for ConfigError {
    fn from(e: EngineError) -> Self {
        ConfigError::Invalid(e)
    }
}
