#![warn(missing_docs)]
//! Validated angle of incidence.
use crate::error::{SnellError, SnellResult};
use serde::Serialize;
use std::fmt::Display;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// Largest allowed angle of incidence in degrees. Grazing incidence (90°) is excluded.
pub const MAX_INCIDENCE_DEGREES: f64 = 89.0;

/// Angle between the incoming ray and the interface normal, restricted to `[0°, 89°]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IncidenceAngle {
    degrees: f64,
}
impl IncidenceAngle {
    /// Create a new [`IncidenceAngle`] from a value in degrees.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Angle`] if the value is not finite or outside
    /// `[0, 89]`.
    pub fn new(degrees: f64) -> SnellResult<Self> {
        if !degrees.is_finite() || !(0.0..=MAX_INCIDENCE_DEGREES).contains(&degrees) {
            return Err(SnellError::Angle(format!(
                "angle of incidence must be within [0, {MAX_INCIDENCE_DEGREES}] degrees (got {degrees})"
            )));
        }
        Ok(Self { degrees })
    }
    /// Returns the angle as [`Angle`].
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::new::<degree>(self.degrees)
    }
    /// Returns the angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }
    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.angle().get::<radian>()
    }
}
impl TryFrom<Angle> for IncidenceAngle {
    type Error = SnellError;

    fn try_from(angle: Angle) -> SnellResult<Self> {
        Self::new(angle.get::<degree>())
    }
}
impl Display for IncidenceAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
