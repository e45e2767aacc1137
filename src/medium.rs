#![warn(missing_docs)]
//! Module for handling optical media characterized by a (constant) refractive index.
use crate::error::{SnellError, SnellResult};
use log::warn;
use serde::Serialize;
use std::fmt::Display;

/// A named substance with a positive, finite refractive index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Medium {
    name: String,
    refractive_index: f64,
}
impl Medium {
    /// Create a new [`Medium`].
    ///
    /// Refractive indices below 1.0 are accepted (e.g. for metamaterial or test setups) but a warning
    /// is logged.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Medium`] if
    ///   - the name is empty
    ///   - the refractive index is not positive or not finite
    pub fn new(name: &str, refractive_index: f64) -> SnellResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SnellError::Medium("name of medium must not be empty".into()));
        }
        if refractive_index <= 0.0 || !refractive_index.is_finite() {
            return Err(SnellError::Medium(format!(
                "refractive index of {name} must be positive and finite (got {refractive_index})"
            )));
        }
        if refractive_index < 1.0 {
            warn!("medium {name} has a refractive index below 1.0 ({refractive_index})");
        }
        Ok(Self {
            name: name.to_owned(),
            refractive_index,
        })
    }
    /// Create an unnamed [`Medium`] from a refractive index alone.
    ///
    /// The name is derived from the value, e.g. `n=1.4`.
    ///
    /// # Errors
    ///
    /// This function returns an error if the refractive index is not positive or not finite.
    pub fn from_index(refractive_index: f64) -> SnellResult<Self> {
        Self::new(&format!("n={refractive_index}"), refractive_index)
    }
    /// Returns the name of this [`Medium`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the refractive index of this [`Medium`].
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
}
impl Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (n={})", self.name, self.refractive_index)
    }
}
