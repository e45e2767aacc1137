#![warn(missing_docs)]
//! Snellview specific error structures
use std::{error::Error, fmt::Display};

/// Snellview application specific Result type
pub type SnellResult<T> = std::result::Result<T, SnellError>;

/// Errors that can be returned by various snellview functions.
///
/// The refraction solver itself never fails. All errors originate from the boundary layers
/// (input validation, dataset loading, plotting, report writing and console handling).
#[derive(Debug, PartialEq, Eq)]
pub enum SnellError {
    /// invalid medium (e.g. a refractive index which is not positive or not finite)
    Medium(String),
    /// errors while loading or querying a table of media
    Dataset(String),
    /// angle of incidence outside the allowed domain
    Angle(String),
    /// errors while rendering a ray diagram
    Plot(String),
    /// errors while creating or writing an analysis report
    Report(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for SnellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Medium(m) => {
                write!(f, "Medium:{m}")
            }
            Self::Dataset(m) => {
                write!(f, "Dataset:{m}")
            }
            Self::Angle(m) => {
                write!(f, "Angle:{m}")
            }
            Self::Plot(m) => {
                write!(f, "Plot:{m}")
            }
            Self::Report(m) => {
                write!(f, "Report:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Snellview Error:Other:{m}"),
        }
    }
}
impl Error for SnellError {}

impl std::convert::From<String> for SnellError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
