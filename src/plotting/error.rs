//! Error types for sciplots.

use std::fmt;
use std::io;

/// The main error type for sciplots operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, stylesheet reading, etc.)
    Io(io::Error),
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Rendering error
    RenderError(String),
    /// Empty data provided where non-empty data is required
    EmptyData,
    /// An option name that is not one of the supported values
    UnsupportedOption(String),
    /// A recognized option that has no implementation yet
    NotImplemented(String),
    /// Number of supplied items does not match the number required
    CountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// No tick mark lies inside the view range of the named axis
    NoVisibleTicks(&'static str),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::RenderError(msg) => write!(f, "Render error: {}", msg),
            PlotError::EmptyData => write!(f, "Empty data provided"),
            PlotError::UnsupportedOption(msg) => write!(f, "Unsupported option: {}", msg),
            PlotError::NotImplemented(msg) => write!(f, "Not yet implemented: {}", msg),
            PlotError::CountMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "Number of colors has to match number of {} (expected {}, got {})",
                what, expected, found
            ),
            PlotError::NoVisibleTicks(axis) => {
                write!(f, "No visible ticks on the {} axis", axis)
            }
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for sciplots operations.
pub type PlotResult<T> = Result<T, PlotError>;
