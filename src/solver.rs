#![warn(missing_docs)]
//! Refraction and total internal reflection of a single ray at a planar interface (Snell's law).
//!
//! The interface is the horizontal line `y = 0`, its normal the vertical line `x = 0`. The incident
//! ray travels from medium 1 towards the point of incidence at the origin. Both the incident and the
//! secondary (refracted or reflected) ray are represented as unit-length segments starting at the
//! origin, which is all a plotting layer needs to draw the diagram.
//!
//! [`solve`] is a pure function without any validation. Use [`Interface`] together with
//! [`IncidenceAngle`] to work with validated inputs.
use crate::{
    error::{SnellError, SnellResult},
    incidence::IncidenceAngle,
    medium::Medium,
};
use serde::Serialize;
use std::fmt::Display;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// Outcome of a ray hitting the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// The ray is transmitted into medium 2.
    Refracted,
    /// No transmitted ray exists. The ray is completely reflected back into medium 1.
    TotallyInternallyReflected,
}
impl Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refracted => write!(f, "Refraction"),
            Self::TotallyInternallyReflected => write!(f, "Total Internal Reflection"),
        }
    }
}

/// Straight line segment in the (x, y) plane of the ray diagram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RaySegment {
    start: (f64, f64),
    end: (f64, f64),
}
impl RaySegment {
    /// Create a new segment between the given points.
    #[must_use]
    pub const fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self { start, end }
    }
    /// Create a new segment starting at the point of incidence `(0, 0)`.
    #[must_use]
    pub const fn from_origin(end: (f64, f64)) -> Self {
        Self::new((0.0, 0.0), end)
    }
    /// Returns the start point of this [`RaySegment`].
    #[must_use]
    pub const fn start(&self) -> (f64, f64) {
        self.start
    }
    /// Returns the end point of this [`RaySegment`].
    #[must_use]
    pub const fn end(&self) -> (f64, f64) {
        self.end
    }
    /// Returns the midpoint of this [`RaySegment`].
    #[must_use]
    pub fn midpoint(&self) -> (f64, f64) {
        (
            0.5 * (self.start.0 + self.end.0),
            0.5 * (self.start.1 + self.end.1),
        )
    }
}

/// Geometry of a single ray at the interface as computed by [`solve`].
///
/// A [`RayDiagram`] is never stored. It is recomputed whenever one of the inputs changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RayDiagram {
    n1: f64,
    n2: f64,
    regime: Regime,
    incidence_angle_degrees: f64,
    refracted_angle_degrees: Option<f64>,
    incident_ray: RaySegment,
    secondary_ray: RaySegment,
}
impl RayDiagram {
    /// Returns the refractive index of medium 1 (incident side).
    #[must_use]
    pub const fn n1(&self) -> f64 {
        self.n1
    }
    /// Returns the refractive index of medium 2.
    #[must_use]
    pub const fn n2(&self) -> f64 {
        self.n2
    }
    /// Returns the [`Regime`] of this [`RayDiagram`].
    #[must_use]
    pub const fn regime(&self) -> Regime {
        self.regime
    }
    /// Returns the angle of incidence in degrees.
    #[must_use]
    pub const fn incidence_angle_degrees(&self) -> f64 {
        self.incidence_angle_degrees
    }
    /// Returns the angle of refraction in degrees or `None` in case of total internal reflection.
    #[must_use]
    pub const fn refracted_angle_degrees(&self) -> Option<f64> {
        self.refracted_angle_degrees
    }
    /// Returns the incident ray. It ends at `(-sin θ1, -cos θ1)`.
    #[must_use]
    pub const fn incident_ray(&self) -> RaySegment {
        self.incident_ray
    }
    /// Returns the refracted or reflected ray.
    #[must_use]
    pub const fn secondary_ray(&self) -> RaySegment {
        self.secondary_ray
    }
    /// Returns the interface normal, the fixed segment from `(0, -1)` to `(0, 1)`.
    #[must_use]
    pub const fn normal() -> RaySegment {
        RaySegment::new((0.0, -1.0), (0.0, 1.0))
    }
    /// Returns the name of the secondary ray (`Refracted Ray` or `Reflected Ray`).
    #[must_use]
    pub const fn secondary_ray_name(&self) -> &'static str {
        match self.regime {
            Regime::Refracted => "Refracted Ray",
            Regime::TotallyInternallyReflected => "Reflected Ray",
        }
    }
    /// Returns the annotation text of the incident ray.
    #[must_use]
    pub fn incident_label(&self) -> String {
        format!("{}°", self.incidence_angle_degrees)
    }
    /// Returns the annotation text of the secondary ray.
    ///
    /// The angle of refraction is given with one decimal. A reflected ray carries the angle of
    /// incidence.
    #[must_use]
    pub fn secondary_label(&self) -> String {
        self.refracted_angle_degrees.map_or_else(
            || self.incident_label(),
            |refracted| format!("{refracted:.1}°"),
        )
    }
    /// Returns a title summarizing the regime, both refractive indices and the angle of incidence.
    ///
    /// e.g. `Refraction: n1=1 to n2=1.33 at 30° incidence`
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}: n1={} to n2={} at {}° incidence",
            self.regime, self.n1, self.n2, self.incidence_angle_degrees
        )
    }
}

/// Compute the [`RayDiagram`] of a ray hitting the interface between two media.
///
/// `n1` and `n2` are the refractive indices of medium 1 (incident side) and medium 2. The angle of
/// incidence is given in degrees. The caller has to make sure that `n1 > 0`, `n2 > 0` and that the
/// angle is within `[0, 89]`. Total internal reflection occurs iff `|n1 / n2 · sin θ1| > 1`. At the
/// critical angle itself (`|sin θ2| = 1`) the ray is still classified as refracted with `θ2 = 90°`.
/// Identical media pass the ray straight through with `θ2 = θ1`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve(n1: f64, n2: f64, angle_of_incidence_degrees: f64) -> RayDiagram {
    let theta1 = Angle::new::<degree>(angle_of_incidence_degrees).get::<radian>();
    let (sin_theta1, cos_theta1) = theta1.sin_cos();
    let sin_theta2 = (n1 / n2) * sin_theta1;
    let incident_ray = RaySegment::from_origin((-sin_theta1, -cos_theta1));
    if n1 == n2 {
        return RayDiagram {
            n1,
            n2,
            regime: Regime::Refracted,
            incidence_angle_degrees: angle_of_incidence_degrees,
            refracted_angle_degrees: Some(angle_of_incidence_degrees),
            incident_ray,
            secondary_ray: RaySegment::from_origin((sin_theta1, cos_theta1)),
        };
    }
    if sin_theta2.abs() > 1.0 {
        RayDiagram {
            n1,
            n2,
            regime: Regime::TotallyInternallyReflected,
            incidence_angle_degrees: angle_of_incidence_degrees,
            refracted_angle_degrees: None,
            incident_ray,
            secondary_ray: RaySegment::from_origin((-sin_theta1, cos_theta1)),
        }
    } else {
        let theta2 = sin_theta2.clamp(-1.0, 1.0).asin();
        RayDiagram {
            n1,
            n2,
            regime: Regime::Refracted,
            incidence_angle_degrees: angle_of_incidence_degrees,
            refracted_angle_degrees: Some(Angle::new::<radian>(theta2).get::<degree>()),
            incident_ray,
            secondary_ray: RaySegment::from_origin((theta2.sin(), theta2.cos())),
        }
    }
}

/// Returns the critical angle (in degrees) for a ray travelling from `n1` into `n2`.
///
/// Total internal reflection is only possible when going from a higher to a lower refractive
/// index. Otherwise `None` is returned.
#[must_use]
pub fn critical_angle_degrees(n1: f64, n2: f64) -> Option<f64> {
    if n1 > n2 {
        Some(Angle::new::<radian>((n2 / n1).asin()).get::<degree>())
    } else {
        None
    }
}

/// Boundary between two media given by their refractive indices `(n1, n2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interface {
    n1: f64,
    n2: f64,
}
impl Interface {
    /// Create a new [`Interface`] from two refractive indices.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Medium`] if one of the indices is not positive or not
    /// finite.
    pub fn new(n1: f64, n2: f64) -> SnellResult<Self> {
        for (name, n) in [("n1", n1), ("n2", n2)] {
            if n <= 0.0 || !n.is_finite() {
                return Err(SnellError::Medium(format!(
                    "{name} must be positive and finite (got {n})"
                )));
            }
        }
        Ok(Self { n1, n2 })
    }
    /// Create a new [`Interface`] between two (already validated) media.
    #[must_use]
    pub const fn from_media(medium1: &Medium, medium2: &Medium) -> Self {
        Self {
            n1: medium1.refractive_index(),
            n2: medium2.refractive_index(),
        }
    }
    /// Returns the refractive index of medium 1.
    #[must_use]
    pub const fn n1(&self) -> f64 {
        self.n1
    }
    /// Returns the refractive index of medium 2.
    #[must_use]
    pub const fn n2(&self) -> f64 {
        self.n2
    }
    /// Compute the [`RayDiagram`] for the given angle of incidence.
    #[must_use]
    pub fn refract(&self, angle: IncidenceAngle) -> RayDiagram {
        solve(self.n1, self.n2, angle.degrees())
    }
    /// Returns the critical angle of this [`Interface`] in degrees (if any).
    #[must_use]
    pub fn critical_angle(&self) -> Option<f64> {
        critical_angle_degrees(self.n1, self.n2)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::medium_table::MediumTable;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;

    fn assert_origin(segment: RaySegment) {
        assert_eq!(segment.start(), (0.0, 0.0));
    }
    #[test]
    fn air_to_water() {
        let d = solve(1.0, 1.33, 30.0);
        assert_eq!(d.regime(), Regime::Refracted);
        assert_abs_diff_eq!(
            d.refracted_angle_degrees().unwrap(),
            22.09,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(d.incident_ray().end().0, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            d.incident_ray().end().1,
            -(0.75f64.sqrt()),
            epsilon = 1e-12
        );
        let theta2 = d.refracted_angle_degrees().unwrap().to_radians();
        assert_abs_diff_eq!(d.secondary_ray().end().0, theta2.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.secondary_ray().end().1, theta2.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.secondary_ray().end().0, 0.5 / 1.33, epsilon = 1e-12);
    }
    #[test]
    fn water_to_air_total_reflection() {
        let d = solve(1.33, 1.0, 50.0);
        assert_eq!(d.regime(), Regime::TotallyInternallyReflected);
        assert_eq!(d.refracted_angle_degrees(), None);
        let (sin_theta1, cos_theta1) = 50.0f64.to_radians().sin_cos();
        assert_abs_diff_eq!(d.incident_ray().end().0, -sin_theta1, epsilon = 1e-12);
        assert_abs_diff_eq!(d.incident_ray().end().1, -cos_theta1, epsilon = 1e-12);
        assert_abs_diff_eq!(d.secondary_ray().end().0, -sin_theta1, epsilon = 1e-12);
        assert_abs_diff_eq!(d.secondary_ray().end().1, cos_theta1, epsilon = 1e-12);
    }
    #[test]
    fn same_media() {
        let d = solve(1.5, 1.5, 45.0);
        assert_eq!(d.regime(), Regime::Refracted);
        assert_eq!(d.refracted_angle_degrees(), Some(45.0));
        for angle in 0..=89 {
            let angle = f64::from(angle);
            let d = solve(1.33, 1.33, angle);
            assert_eq!(d.regime(), Regime::Refracted);
            assert_eq!(d.refracted_angle_degrees(), Some(angle));
            // straight through: secondary ray continues the incident ray
            let (incident, secondary) = (d.incident_ray().end(), d.secondary_ray().end());
            assert_abs_diff_eq!(secondary.0, -incident.0, epsilon = 1e-12);
            assert_abs_diff_eq!(secondary.1, -incident.1, epsilon = 1e-12);
        }
    }
    #[test]
    fn normal_incidence() {
        let d = solve(1.0, 1.5, 0.0);
        assert_eq!(d.regime(), Regime::Refracted);
        assert_eq!(d.refracted_angle_degrees(), Some(0.0));
        assert_eq!(d.incident_ray().end(), (0.0, -1.0));
        assert_eq!(d.secondary_ray().end(), (0.0, 1.0));
        for (n1, n2) in [(1.0, 2.42), (2.42, 1.0), (1.33, 1.33)] {
            let d = solve(n1, n2, 0.0);
            assert_eq!(d.incident_ray().end().0, 0.0);
            assert_eq!(d.secondary_ray().end().0, 0.0);
            assert_eq!(d.refracted_angle_degrees(), Some(0.0));
        }
    }
    #[test]
    fn critical_angle_is_refracted() {
        let critical = (1.0f64 / 1.5).asin().to_degrees();
        let d = solve(1.5, 1.0, critical);
        assert_eq!(d.regime(), Regime::Refracted);
        assert_relative_eq!(d.refracted_angle_degrees().unwrap(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(d.secondary_ray().end().0, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d.secondary_ray().end().1, 0.0, epsilon = 1e-4);
        let d = solve(1.5, 1.0, critical_angle_degrees(1.5, 1.0).unwrap());
        assert_eq!(d.regime(), Regime::Refracted);
        let d = solve(1.5, 1.0, critical + 0.01);
        assert_eq!(d.regime(), Regime::TotallyInternallyReflected);
    }
    #[test]
    fn just_above_critical_angle_is_reflected() {
        // smallest angles above the critical angle whose sin θ2 rounds above 1.0
        let above = |degrees: f64, ulps: u64| f64::from_bits(degrees.to_bits() + ulps);
        let critical = critical_angle_degrees(1.5, 1.0).unwrap();
        assert_eq!(solve(1.5, 1.0, critical).regime(), Regime::Refracted);
        assert_eq!(
            solve(1.5, 1.0, above(critical, 2)).regime(),
            Regime::TotallyInternallyReflected
        );
        let critical = critical_angle_degrees(1.33, 1.0).unwrap();
        let d = solve(1.33, 1.0, critical);
        assert_eq!(d.regime(), Regime::Refracted);
        assert_relative_eq!(d.refracted_angle_degrees().unwrap(), 90.0);
        let d = solve(1.33, 1.0, above(critical, 1));
        assert_eq!(d.regime(), Regime::TotallyInternallyReflected);
        assert_eq!(d.refracted_angle_degrees(), None);
    }
    #[test]
    fn regime_matches_snells_law() {
        let table = MediumTable::builtin();
        for m1 in &table {
            for m2 in &table {
                let (n1, n2) = (m1.refractive_index(), m2.refractive_index());
                for angle in 0..=89 {
                    let angle = f64::from(angle);
                    let d = solve(n1, n2, angle);
                    let expected = if ((n1 / n2) * angle.to_radians().sin()).abs() > 1.0 {
                        Regime::TotallyInternallyReflected
                    } else {
                        Regime::Refracted
                    };
                    assert_eq!(d.regime(), expected, "n1={n1}, n2={n2}, angle={angle}");
                    assert_origin(d.incident_ray());
                    assert_origin(d.secondary_ray());
                    assert_eq!(
                        d.refracted_angle_degrees().is_some(),
                        expected == Regime::Refracted
                    );
                }
            }
        }
    }
    #[test]
    fn reversibility() {
        for (n1, n2, angle) in [
            (1.0, 1.33, 30.0),
            (1.0, 1.5, 60.0),
            (1.33, 1.5, 89.0),
            (1.5, 1.33, 40.0),
        ] {
            let forward = solve(n1, n2, angle);
            let theta2 = forward.refracted_angle_degrees().unwrap();
            let backward = solve(n2, n1, theta2);
            assert_eq!(backward.regime(), Regime::Refracted);
            assert_abs_diff_eq!(
                backward.refracted_angle_degrees().unwrap(),
                angle,
                epsilon = 1e-8
            );
        }
    }
    #[test]
    fn idempotent() {
        assert_eq!(solve(1.0, 1.33, 30.0), solve(1.0, 1.33, 30.0));
        assert_eq!(solve(1.33, 1.0, 50.0), solve(1.33, 1.0, 50.0));
    }
    #[test]
    fn critical_angle() {
        assert_abs_diff_eq!(critical_angle_degrees(1.5, 1.0).unwrap(), 41.81, epsilon = 0.01);
        assert_abs_diff_eq!(critical_angle_degrees(1.33, 1.0).unwrap(), 48.75, epsilon = 0.01);
        assert_eq!(critical_angle_degrees(1.0, 1.5), None);
        assert_eq!(critical_angle_degrees(1.5, 1.5), None);
    }
    #[test]
    fn ray_segment() {
        let s = RaySegment::from_origin((-0.5, -1.0));
        assert_eq!(s.start(), (0.0, 0.0));
        assert_eq!(s.end(), (-0.5, -1.0));
        assert_eq!(s.midpoint(), (-0.25, -0.5));
        let normal = RayDiagram::normal();
        assert_eq!(normal.start(), (0.0, -1.0));
        assert_eq!(normal.end(), (0.0, 1.0));
        assert_eq!(normal.midpoint(), (0.0, 0.0));
    }
    #[test]
    fn labels() {
        let d = solve(1.0, 1.33, 30.0);
        assert_eq!(d.secondary_ray_name(), "Refracted Ray");
        assert_eq!(d.incident_label(), "30°");
        assert_eq!(d.secondary_label(), "22.1°");
        assert_eq!(d.title(), "Refraction: n1=1 to n2=1.33 at 30° incidence");
        let d = solve(1.33, 1.0, 50.0);
        assert_eq!(d.secondary_ray_name(), "Reflected Ray");
        assert_eq!(d.secondary_label(), "50°");
        assert_eq!(
            d.title(),
            "Total Internal Reflection: n1=1.33 to n2=1 at 50° incidence"
        );
    }
    #[test]
    fn interface() {
        let interface = Interface::new(1.0, 1.33).unwrap();
        assert_eq!(interface.n1(), 1.0);
        assert_eq!(interface.n2(), 1.33);
        let d = interface.refract(IncidenceAngle::new(30.0).unwrap());
        assert_eq!(d, solve(1.0, 1.33, 30.0));
        assert_eq!(interface.critical_angle(), None);
        assert_matches!(Interface::new(0.0, 1.0), Err(SnellError::Medium(_)));
        assert_matches!(Interface::new(1.0, -1.33), Err(SnellError::Medium(_)));
        assert_matches!(Interface::new(f64::NAN, 1.0), Err(SnellError::Medium(_)));
    }
    #[test]
    fn interface_from_media() {
        let table = MediumTable::builtin();
        let interface = Interface::from_media(
            table.get("Glass").unwrap(),
            table.get("Vacuum").unwrap(),
        );
        assert_eq!(interface, Interface::new(1.5, 1.0).unwrap());
        assert_abs_diff_eq!(interface.critical_angle().unwrap(), 41.81, epsilon = 0.01);
    }
}
