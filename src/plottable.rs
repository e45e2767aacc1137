#![warn(missing_docs)]
//! Trait for adding the possibility to generate a (x/y) plot of an element.
//!
//! The plot data ([`PlotSeries`], [`Annotation`]) is collected independently of any drawing backend.
//! [`PlotParameters::plot`] finally renders it into a `.svg` or bitmap (`.png`, `.bmp`) file.
use crate::{
    error::{SnellError, SnellResult},
    solver::RayDiagram,
};
use log::info;
use plotters::{
    backend::DrawingBackend,
    chart::{ChartBuilder, ChartContext, SeriesLabelPosition},
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    element::{Circle, EmptyElement, PathElement, Text},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    series::{DashedLineSeries, LineSeries},
    style::{Color, IntoFont, RGBColor, BLACK, BLUE, RED, WHITE},
};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use strum::{EnumIter, IntoEnumIterator};

/// Both axes of a ray diagram span `[-AXIS_LIMIT, AXIS_LIMIT]`.
pub const AXIS_LIMIT: f64 = 1.1;

///Enum to describe which type of plotting backend should be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum PltBackEnd {
    /// `BitmapBackend`. Used to create .png, .bmp
    Bitmap,
    /// `SVGBackend`. Used to create .svg
    SVG,
}
impl PltBackEnd {
    /// Returns the file extensions supported by this [`PltBackEnd`].
    #[must_use]
    pub const fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Bitmap => &["png", "bmp"],
            Self::SVG => &["svg"],
        }
    }
    /// Determine the backend from the extension of the given file path (case insensitive).
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Plot`] if the extension is missing or not supported
    /// by any backend.
    pub fn from_path(path: &Path) -> SnellResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        Self::iter()
            .find(|backend| backend.file_extensions().contains(&ext.as_str()))
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::iter()
                    .flat_map(|backend| backend.file_extensions().iter().copied())
                    .collect();
                SnellError::Plot(format!(
                    "unsupported file extension of {}. Choose one of: {}",
                    path.display(),
                    supported.join(", ")
                ))
            })
    }
}

/// Line style of a [`PlotSeries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// continuous line
    Solid,
    /// dashed line
    Dashed,
}

/// A polyline which should be drawn into the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    points: Vec<(f64, f64)>,
    color: RGBColor,
    label: Option<String>,
    line_style: LineStyle,
    markers: bool,
}
impl PlotSeries {
    /// Create a new solid [`PlotSeries`] without markers and label.
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, color: RGBColor) -> Self {
        Self {
            points,
            color,
            label: None,
            line_style: LineStyle::Solid,
            markers: false,
        }
    }
    /// Set the legend entry of this series.
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }
    /// Set the [`LineStyle`] of this series.
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }
    /// Draw circle markers at each point of this series.
    #[must_use]
    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }
    /// Returns the points of this [`PlotSeries`].
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
    /// Returns the color of this [`PlotSeries`].
    #[must_use]
    pub const fn color(&self) -> RGBColor {
        self.color
    }
    /// Returns the legend entry of this [`PlotSeries`] (if any).
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
    /// Returns the [`LineStyle`] of this [`PlotSeries`].
    #[must_use]
    pub const fn line_style(&self) -> LineStyle {
        self.line_style
    }
    /// Returns `true` if markers are drawn at each point.
    #[must_use]
    pub const fn has_markers(&self) -> bool {
        self.markers
    }
}

/// Text placed at a given position in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    text: String,
    position: (f64, f64),
}
impl Annotation {
    /// Create a new [`Annotation`].
    #[must_use]
    pub fn new(text: &str, position: (f64, f64)) -> Self {
        Self {
            text: text.to_owned(),
            position,
        }
    }
    /// Returns the text of this [`Annotation`].
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Returns the position of this [`Annotation`].
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        self.position
    }
}

/// Parameters of a plot file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotParameters {
    fpath: PathBuf,
    fig_size: (u32, u32),
}
impl PlotParameters {
    /// Create new [`PlotParameters`] for the given file path and the default figure size of 800x800
    /// pixels.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Plot`] if the file extension is not supported.
    pub fn new(fpath: &Path) -> SnellResult<Self> {
        PltBackEnd::from_path(fpath)?;
        Ok(Self {
            fpath: fpath.to_path_buf(),
            fig_size: (800, 800),
        })
    }
    /// Set the figure size in pixels.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Plot`] if one of the dimensions is zero.
    pub fn with_fig_size(mut self, fig_size: (u32, u32)) -> SnellResult<Self> {
        if fig_size.0 == 0 || fig_size.1 == 0 {
            return Err(SnellError::Plot("figure size must not be zero".into()));
        }
        self.fig_size = fig_size;
        Ok(self)
    }
    /// Returns the file path of the plot.
    #[must_use]
    pub fn fpath(&self) -> &Path {
        &self.fpath
    }
    /// Returns the figure size in pixels.
    #[must_use]
    pub const fn fig_size(&self) -> (u32, u32) {
        self.fig_size
    }
    /// Returns the [`PltBackEnd`] matching the file path.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Plot`] if the file extension is not supported.
    pub fn backend(&self) -> SnellResult<PltBackEnd> {
        PltBackEnd::from_path(&self.fpath)
    }
    /// Render the given [`Plottable`] into the file defined by these parameters.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Plot`] if the backend could not be determined or if
    /// drawing (e.g. writing the file) failed.
    pub fn plot<P: Plottable + ?Sized>(&self, plottable: &P) -> SnellResult<()> {
        match self.backend()? {
            PltBackEnd::Bitmap => {
                let root = BitMapBackend::new(&self.fpath, self.fig_size).into_drawing_area();
                draw(&root, plottable)?;
            }
            PltBackEnd::SVG => {
                let root = SVGBackend::new(&self.fpath, self.fig_size).into_drawing_area();
                draw(&root, plottable)?;
            }
        }
        info!("Plot written to {}", self.fpath.display());
        Ok(())
    }
}

fn plot_error<E: Display>(e: E) -> SnellError {
    SnellError::Plot(e.to_string())
}

/// Returns the largest square sub-area centered in the given area.
fn square_area<B: DrawingBackend>(area: &DrawingArea<B, Shift>) -> DrawingArea<B, Shift> {
    let (width, height) = area.dim_in_pixel();
    let side = width.min(height);
    let (left, top) = ((width - side) / 2, (height - side) / 2);
    area.margin(top, height - side - top, left, width - side - left)
}

/// Builds the chart on a square area. Margins and label areas are identical for both axes, so
/// one data unit has the same pixel length in x and y.
fn build_chart<B: DrawingBackend>(
    area: &DrawingArea<B, Shift>,
) -> SnellResult<ChartContext<'_, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
    ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d(-AXIS_LIMIT..AXIS_LIMIT, -AXIS_LIMIT..AXIS_LIMIT)
        .map_err(plot_error)
}

fn draw<B: DrawingBackend, P: Plottable + ?Sized>(
    root: &DrawingArea<B, Shift>,
    plottable: &P,
) -> SnellResult<()> {
    root.fill(&WHITE).map_err(plot_error)?;
    let plot_area = root
        .titled(
            &plottable.get_plot_title(),
            ("sans-serif", 24).into_font(),
        )
        .map_err(plot_error)?;
    let plot_area = square_area(&plot_area);
    let mut chart = build_chart(&plot_area)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_desc("X")
        .y_desc("Y")
        .draw()
        .map_err(plot_error)?;

    let mut has_legend = false;
    for series in plottable.get_plot_series() {
        let style = series.color.stroke_width(2);
        match series.line_style {
            LineStyle::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(series.points.clone(), 10, 6, style))
                    .map_err(plot_error)?;
            }
            LineStyle::Solid => {
                let series_anno = chart
                    .draw_series(LineSeries::new(series.points.clone(), style))
                    .map_err(plot_error)?;
                if let Some(label) = &series.label {
                    series_anno
                        .label(label)
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                    has_legend = true;
                }
            }
        }
        if series.markers {
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|point| Circle::new(*point, 4, series.color.filled())),
                )
                .map_err(plot_error)?;
        }
    }
    for annotation in plottable.get_annotations() {
        chart
            .draw_series(std::iter::once(
                EmptyElement::at(annotation.position)
                    + Text::new(annotation.text, (8, -8), ("sans-serif", 18).into_font()),
            ))
            .map_err(plot_error)?;
    }
    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;
    }
    root.present().map_err(plot_error)?;
    Ok(())
}

/// Trait for elements which can be rendered as a 2D plot.
pub trait Plottable {
    /// Returns the lines to be drawn.
    fn get_plot_series(&self) -> Vec<PlotSeries>;
    /// Returns the text annotations to be drawn. Default: none.
    fn get_annotations(&self) -> Vec<Annotation> {
        Vec::new()
    }
    /// Returns the plot title.
    fn get_plot_title(&self) -> String;
    /// Render this element into a file.
    ///
    /// # Errors
    ///
    /// This function returns an error if the plot could not be created (see
    /// [`PlotParameters::plot`]).
    fn to_plot(&self, params: &PlotParameters) -> SnellResult<()> {
        params.plot(self)
    }
}

impl Plottable for RayDiagram {
    fn get_plot_series(&self) -> Vec<PlotSeries> {
        let normal = Self::normal();
        let incident = self.incident_ray();
        let secondary = self.secondary_ray();
        vec![
            PlotSeries::new(vec![normal.start(), normal.end()], BLACK)
                .with_line_style(LineStyle::Dashed),
            PlotSeries::new(vec![incident.start(), incident.end()], BLUE)
                .with_label("Incident Ray")
                .with_markers(),
            PlotSeries::new(vec![secondary.start(), secondary.end()], RED)
                .with_label(self.secondary_ray_name())
                .with_markers(),
        ]
    }
    fn get_annotations(&self) -> Vec<Annotation> {
        vec![
            Annotation::new(&self.incident_label(), self.incident_ray().midpoint()),
            Annotation::new(&self.secondary_label(), self.secondary_ray().midpoint()),
        ]
    }
    fn get_plot_title(&self) -> String {
        self.title()
    }
}
