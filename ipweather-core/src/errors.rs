//! Failure taxonomy and exit-code mapping for the CLI.
//!
//! Every failure the tool can surface is collapsed into a small set of
//! stable categories, each bound to a fixed process exit code that scripts
//! and CI can rely on. Failures recognized at the point of origin are
//! constructed as [`CliError`] values; anything else is categorized at the
//! process boundary by [`classify`].

use std::error::Error as StdError;

use thiserror::Error;

/// Canonical process exit codes.
///
/// Semantics:
/// - `Success` (0): operation completed.
/// - `Unknown` (1): no specific mapping applies.
/// - `Validation` (2): invalid user input or configuration.
/// - `Runtime` (3): unexpected local fault that is neither I/O nor network.
/// - `Io` (4): local filesystem or stream error.
/// - `Network` (5): remote call unreachable, timed out, or returned a
///   failure/malformed payload.
///
/// The numeric mapping is part of the CLI contract and is never renumbered;
/// new categories, if any, get unused codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    Success,
    Unknown,
    Validation,
    Runtime,
    Io,
    Network,
}

impl ExitCode {
    /// The numeric code returned to the operating system.
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Unknown => 1,
            ExitCode::Validation => 2,
            ExitCode::Runtime => 3,
            ExitCode::Io => 4,
            ExitCode::Network => 5,
        }
    }

    /// Stable fallback label used when a failure carries no message text.
    pub const fn label(self) -> &'static str {
        match self {
            ExitCode::Success => "success",
            ExitCode::Unknown => "unknown error",
            ExitCode::Validation => "validation error",
            ExitCode::Runtime => "runtime error",
            ExitCode::Io => "I/O error",
            ExitCode::Network => "network error",
        }
    }
}

/// A failure carrying its exit category, raised where the category is first
/// known (upstream payload checks, config validation, transport errors).
///
/// `Display` is the user-facing message alone; the boundary prefixes it with
/// `ERROR: ` when printing to stderr.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Runtime {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("{message}")]
    Unknown { message: String },
}

impl CliError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Create a runtime error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime { message: message.into(), source: None }
    }

    /// Create a runtime error with its underlying cause.
    pub fn runtime_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Runtime { message: message.into(), source: Some(Box::new(source)) }
    }

    /// Create a local I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io { message: message.into(), source: None }
    }

    /// Create a local I/O error with its underlying cause.
    pub fn io_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Io { message: message.into(), source: Some(Box::new(source)) }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into(), source: None }
    }

    /// Create a network error with its underlying cause.
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Network { message: message.into(), source: Some(Box::new(source)) }
    }

    /// Create an unclassified error.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown { message: message.into() }
    }

    /// The exit category bound to this failure.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Validation { .. } => ExitCode::Validation,
            CliError::Runtime { .. } => ExitCode::Runtime,
            CliError::Io { .. } => ExitCode::Io,
            CliError::Network { .. } => ExitCode::Network,
            CliError::Unknown { .. } => ExitCode::Unknown,
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Resolve the exit category for an arbitrary escaped error.
///
/// Deterministic and side-effect free. Each rule scans the full error chain
/// before the next rule is tried, so the precedence below is the contract:
///
/// 1. A [`CliError`] anywhere in the chain keeps its own category.
/// 2. Malformed numeric input → `Validation`.
/// 3. Transport failures (any `reqwest` error, connection/timeout I/O kinds,
///    an elapsed tokio timeout) → `Network`.
/// 4. Remaining local I/O errors → `Io`.
/// 5. A failed or cancelled task → `Runtime`.
/// 6. Anything else → `Unknown`.
pub fn classify(err: &anyhow::Error) -> ExitCode {
    if let Some(coded) = err.chain().find_map(|c| c.downcast_ref::<CliError>()) {
        return coded.exit_code();
    }

    if err.chain().any(is_validation) {
        return ExitCode::Validation;
    }
    if err.chain().any(is_network) {
        return ExitCode::Network;
    }
    if err.chain().any(is_local_io) {
        return ExitCode::Io;
    }
    if err.chain().any(is_runtime_fault) {
        return ExitCode::Runtime;
    }

    ExitCode::Unknown
}

/// Produce the one-line user-facing message for an escaped error.
///
/// Uses the error's own text; a blank message falls back to the stable label
/// of its category so the user never sees an empty line.
pub fn user_message(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { classify(err).label().to_string() } else { message }
}

fn is_validation(cause: &(dyn StdError + 'static)) -> bool {
    cause.downcast_ref::<std::num::ParseFloatError>().is_some()
        || cause.downcast_ref::<std::num::ParseIntError>().is_some()
}

fn is_network(cause: &(dyn StdError + 'static)) -> bool {
    if cause.downcast_ref::<reqwest::Error>().is_some() {
        return true;
    }
    if cause.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
        return true;
    }
    if let Some(io) = cause.downcast_ref::<std::io::Error>() {
        use std::io::ErrorKind;
        return matches!(
            io.kind(),
            ErrorKind::TimedOut
                | ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::NotConnected
        );
    }
    false
}

fn is_local_io(cause: &(dyn StdError + 'static)) -> bool {
    cause.downcast_ref::<std::io::Error>().is_some()
}

fn is_runtime_fault(cause: &(dyn StdError + 'static)) -> bool {
    cause.downcast_ref::<tokio::task::JoinError>().is_some()
}
