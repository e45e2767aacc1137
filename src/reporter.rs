#![warn(missing_docs)]
//! Module for creating analysis reports.
//!
//! An [`AnalysisReport`] summarizes one evaluation of the refraction solver: the two media, the
//! resulting [`RayDiagram`] and the critical angle of the interface. It is written as JSON.
use crate::{
    error::{SnellError, SnellResult},
    get_version,
    medium::Medium,
    solver::{Interface, RayDiagram},
};
use log::info;
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

/// Report of a single refraction analysis.
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    snellview_version: String,
    medium1: Medium,
    medium2: Medium,
    critical_angle_degrees: Option<f64>,
    diagram: RayDiagram,
}
impl AnalysisReport {
    /// Creates a new [`AnalysisReport`].
    #[must_use]
    pub fn new(medium1: &Medium, medium2: &Medium, diagram: RayDiagram) -> Self {
        Self {
            snellview_version: get_version(),
            medium1: medium1.clone(),
            medium2: medium2.clone(),
            critical_angle_degrees: Interface::from_media(medium1, medium2).critical_angle(),
            diagram,
        }
    }
    /// Returns the [`RayDiagram`] of this [`AnalysisReport`].
    #[must_use]
    pub const fn diagram(&self) -> &RayDiagram {
        &self.diagram
    }
    /// Returns the critical angle of the interface in degrees (if total internal reflection is
    /// possible at all).
    #[must_use]
    pub const fn critical_angle_degrees(&self) -> Option<f64> {
        self.critical_angle_degrees
    }
    /// Returns a short, human readable summary of this report.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{}\n  medium 1: {}\n  medium 2: {}\n",
            self.diagram.title(),
            self.medium1,
            self.medium2
        );
        if let Some(refracted) = self.diagram.refracted_angle_degrees() {
            summary += &format!("  angle of refraction: {refracted:.2}°\n");
        }
        match self.critical_angle_degrees {
            Some(critical) => summary += &format!("  critical angle: {critical:.2}°\n"),
            None => summary += "  critical angle: none (n1 <= n2)\n",
        }
        summary
    }
    /// Serialize this [`AnalysisReport`] into a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Report`] if the serialization failed.
    pub fn to_json(&self) -> SnellResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnellError::Report(format!("serialization of report failed: {e}")))
    }
    /// Write this [`AnalysisReport`] as JSON into the given file.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Report`] if the file could not be created or written.
    pub fn write_json(&self, path: &Path) -> SnellResult<()> {
        let json = self.to_json()?;
        let mut output = File::create(path).map_err(|e| {
            SnellError::Report(format!("report file creation failed ({}): {e}", path.display()))
        })?;
        write!(output, "{json}")
            .map_err(|e| SnellError::Report(format!("writing report file failed: {e}")))?;
        info!("Report written to {}", path.display());
        Ok(())
    }
}
