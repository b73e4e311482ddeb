//! Error types for BiasLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.
//!
//! Classification itself never fails: every error here comes from the
//! surrounding configuration, input and output plumbing.

use thiserror::Error;

/// Main error type for BiasLens
#[derive(Error, Debug)]
pub enum BiasLensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors while reading text to classify
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Errors while writing reports
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for our schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized back to TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A custom rule carries a pattern that is not a valid regex
    #[error("Invalid pattern in rule '{rule_id}': {source}")]
    InvalidPattern {
        /// Identifier of the offending rule
        rule_id: String,
        /// The regex compilation error
        source: regex::Error,
    },

    /// A custom rule names a category that does not exist
    #[error("Unknown category '{category}' in rule '{rule_id}'")]
    UnknownCategory {
        /// Identifier of the offending rule
        rule_id: String,
        /// The category name as written in the config
        category: String,
    },
}

/// Errors that occur while reading input text
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read an input file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to read from standard input
    #[error("Failed to read stdin: {0}")]
    Stdin(std::io::Error),
}

/// Errors that occur while writing output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write a report file
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write to the console
    #[error("Failed to write output: {0}")]
    Write(std::io::Error),
}

impl From<toml::de::Error> for BiasLensError {
    fn from(err: toml::de::Error) -> Self {
        BiasLensError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for BiasLensError {
    fn from(err: toml::ser::Error) -> Self {
        BiasLensError::Config(ConfigError::Serialize(err))
    }
}

// Allow conversion from std::io::Error for console writes
impl From<std::io::Error> for BiasLensError {
    fn from(err: std::io::Error) -> Self {
        BiasLensError::Output(OutputError::Write(err))
    }
}
