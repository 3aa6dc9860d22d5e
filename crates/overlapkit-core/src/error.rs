//! Error handling for OverlapKit
//!
//! Provides error types for each layer of the engine:
//! - Path errors (strict SVG path data parsing)
//! - Clip errors (failures reported by the polygon Boolean engine)
//! - Scene errors (shape bookkeeping)
//!
//! Hit-testing itself never fails: the overlap index and region resolver
//! absorb `ClipError`s and treat the affected pair or shape as empty.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path data error type
///
/// Only produced by strict parsing. Lenient parsing skips the offending
/// command instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A numeric argument could not be parsed
    #[error("Invalid number '{token}' for command '{command}'")]
    InvalidNumber {
        /// The command the argument belongs to.
        command: char,
        /// The offending token.
        token: String,
    },

    /// A command ran out of arguments
    #[error("Command '{command}' expects {expected} arguments, found {found}")]
    MissingArguments {
        /// The command letter.
        command: char,
        /// Number of arguments the command needs per repetition.
        expected: usize,
        /// Number of arguments actually present.
        found: usize,
    },

    /// Numbers appeared before any command letter
    #[error("Path data must start with a command, found '{token}'")]
    MissingCommand {
        /// The first token encountered.
        token: String,
    },
}

/// Boolean engine error type
///
/// Represents failures of the polygon clipping dependency on ill-conditioned
/// input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// An input coordinate was NaN or infinite
    #[error("Non-finite coordinate ({x}, {y}) in clip operand")]
    NonFiniteCoordinate {
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },

    /// The clipping library aborted
    #[error("Clipping engine failed during {operation}: {message}")]
    EngineFailure {
        /// The Boolean operation being performed.
        operation: &'static str,
        /// The failure message reported by the engine.
        message: String,
    },
}

/// Scene bookkeeping error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A shape with this id is already present
    #[error("Shape '{0}' already exists")]
    DuplicateId(String),

    /// No shape with this id is present
    #[error("Shape '{0}' not found")]
    UnknownId(String),
}

/// Main error type for OverlapKit
///
/// A unified error type that can represent any error from the engine layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Path data error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Boolean engine error
    #[error(transparent)]
    Clip(#[from] ClipError),

    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path data error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this is a Boolean engine error
    pub fn is_clip_error(&self) -> bool {
        matches!(self, Error::Clip(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
