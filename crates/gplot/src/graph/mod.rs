//! Graph descriptions and their preparation into option clauses and data sources.
//!
//! A graph is literal data, a sampled function, or a raw gnuplot expression.
//! [`Graph2D::prepare`] and [`Graph3D::prepare`] validate the graph's options,
//! normalize them into a clause, and produce either the data file content or the
//! inline expression.
use std::fmt;

use mint::{Point2, Point3};
use tracing::debug;

use crate::error::Result;
use crate::format::NumberFormat;
use crate::style::{encode_options, PlotOption, Style};

pub mod axis;
pub mod sampling;

pub use axis::{AxisOption, AxisOption2D, AxisOption3D};
use sampling::Domain;

/// Function of one variable sampled for a 2D graph.
pub type Function2D = Box<dyn Fn(f64) -> f64>;
/// Function of two variables sampled for a 3D graph.
pub type Function3D = Box<dyn Fn(f64, f64) -> f64>;

/// Where a 2D graph's points come from.
pub enum Source2D {
    Data(Vec<Point2<f64>>),
    Function(Function2D),
    Expression(String),
}

/// Where a 3D graph's points come from.
pub enum Source3D {
    Data(Vec<Point3<f64>>),
    Function(Function3D),
    Expression(String),
}

/// A single 2D graph with its rendering and axis options.
#[non_exhaustive]
pub struct Graph2D {
    pub source: Source2D,
    pub options: Vec<PlotOption>,
    pub axes: Vec<AxisOption2D>,
}

/// A single 3D graph with its rendering and axis options.
#[non_exhaustive]
pub struct Graph3D {
    pub source: Source3D,
    pub options: Vec<PlotOption>,
    pub axes: Vec<AxisOption3D>,
}

/// Either dimensionality, for requests assembled at runtime.
#[derive(Debug)]
pub enum Graph {
    TwoD(Graph2D),
    ThreeD(Graph3D),
}

/// Number of coordinates per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Two,
    Three,
}

/// Data for one graph in the composite plot statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Raw expression placed directly in the clause.
    Inline(String),
    /// Data rows that must be written to a file referenced by the clause.
    File(String),
}

/// Output of the preparer for one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedGraph {
    /// Normalized option clause, possibly empty.
    pub options: String,
    pub source: DataSource,
}

fn validated_clause(options: &[PlotOption]) -> Result<String> {
    for option in options {
        option.validate()?;
    }
    Ok(encode_options(options))
}

impl Graph2D {
    fn with_source(source: Source2D) -> Self {
        Self {
            source,
            options: Vec::new(),
            axes: Vec::new(),
        }
    }

    /// Literal points, in the order given.
    pub fn data<P, I>(points: I) -> Self
    where
        P: Into<Point2<f64>>,
        I: IntoIterator<Item = P>,
    {
        Self::with_source(Source2D::Data(points.into_iter().map(Into::into).collect()))
    }

    /// A function sampled over the x axis domain.
    pub fn function(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::from_function(Box::new(f))
    }

    pub fn from_function(f: Function2D) -> Self {
        Self::with_source(Source2D::Function(f))
    }

    /// A raw gnuplot expression such as `sin(x)`.
    pub fn expression(expr: impl Into<String>) -> Self {
        Self::with_source(Source2D::Expression(expr.into()))
    }

    pub fn with_option(mut self, option: impl Into<PlotOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = PlotOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn with_axis(mut self, axis: AxisOption2D) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn prepare(&self, format: &NumberFormat) -> Result<PreparedGraph> {
        match &self.source {
            Source2D::Expression(expr) => {
                if !self.axes.is_empty() {
                    debug!(
                        "Ignoring {} axis option(s) on expression graph.",
                        self.axes.len()
                    );
                }
                Ok(PreparedGraph {
                    options: validated_clause(&self.options)?,
                    source: DataSource::Inline(expr.clone()),
                })
            }
            Source2D::Data(points) => {
                if !self.axes.is_empty() {
                    debug!("Ignoring {} axis option(s) on data graph.", self.axes.len());
                }
                let content = format.rows(points.iter().map(|p| [p.x, p.y]));
                Ok(PreparedGraph {
                    options: validated_clause(&self.options)?,
                    source: DataSource::File(content),
                })
            }
            Source2D::Function(f) => {
                // Functions are always drawn as curves: the forced style goes first so it
                // survives first-occurrence deduplication.
                let options: Vec<PlotOption> = std::iter::once(PlotOption::Style(Style::Lines))
                    .chain(self.options.iter().cloned())
                    .collect();
                let clause = validated_clause(&options)?;
                let domain = Domain::from_axis_options('x', &self.axes)?;
                let rows = sampling::sample_2d(&domain, &**f);
                debug!("Sampled 2D function at {} points.", rows.len());
                Ok(PreparedGraph {
                    options: clause,
                    source: DataSource::File(format.rows(rows)),
                })
            }
        }
    }
}

impl Graph3D {
    fn with_source(source: Source3D) -> Self {
        Self {
            source,
            options: Vec::new(),
            axes: Vec::new(),
        }
    }

    /// Literal points, in the order given.
    pub fn data<P, I>(points: I) -> Self
    where
        P: Into<Point3<f64>>,
        I: IntoIterator<Item = P>,
    {
        Self::with_source(Source3D::Data(points.into_iter().map(Into::into).collect()))
    }

    /// A function sampled over the x/y domain product.
    pub fn function(f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        Self::from_function(Box::new(f))
    }

    pub fn from_function(f: Function3D) -> Self {
        Self::with_source(Source3D::Function(f))
    }

    /// A raw gnuplot expression such as `x*y`.
    pub fn expression(expr: impl Into<String>) -> Self {
        Self::with_source(Source3D::Expression(expr.into()))
    }

    pub fn with_option(mut self, option: impl Into<PlotOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = PlotOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn with_axis(mut self, axis: AxisOption3D) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn prepare(&self, format: &NumberFormat) -> Result<PreparedGraph> {
        let options = validated_clause(&self.options)?;
        let source = match &self.source {
            Source3D::Expression(expr) => DataSource::Inline(expr.clone()),
            Source3D::Data(points) => {
                DataSource::File(format.rows(points.iter().map(|p| [p.x, p.y, p.z])))
            }
            Source3D::Function(f) => {
                let x =
                    Domain::from_axis_options('x', self.axes.iter().filter_map(AxisOption3D::x))?;
                let y =
                    Domain::from_axis_options('y', self.axes.iter().filter_map(AxisOption3D::y))?;
                let rows = sampling::sample_3d(&x, &y, &**f)?;
                debug!("Sampled 3D function at {} points.", rows.len());
                DataSource::File(format.rows(rows))
            }
        };
        if !self.axes.is_empty() && !matches!(self.source, Source3D::Function(_)) {
            debug!(
                "Ignoring {} axis option(s) on non-function graph.",
                self.axes.len()
            );
        }
        Ok(PreparedGraph { options, source })
    }
}

impl Graph {
    pub fn dimension(&self) -> Dimension {
        match self {
            Graph::TwoD(_) => Dimension::Two,
            Graph::ThreeD(_) => Dimension::Three,
        }
    }

    pub fn prepare(&self, format: &NumberFormat) -> Result<PreparedGraph> {
        match self {
            Graph::TwoD(graph) => graph.prepare(format),
            Graph::ThreeD(graph) => graph.prepare(format),
        }
    }
}

impl From<Graph2D> for Graph {
    fn from(value: Graph2D) -> Self {
        Graph::TwoD(value)
    }
}

impl From<Graph3D> for Graph {
    fn from(value: Graph3D) -> Self {
        Graph::ThreeD(value)
    }
}

impl fmt::Debug for Source2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source2D::Data(points) => f.debug_tuple("Data").field(&points.len()).finish(),
            Source2D::Function(_) => f.write_str("Function(..)"),
            Source2D::Expression(expr) => f.debug_tuple("Expression").field(expr).finish(),
        }
    }
}

impl fmt::Debug for Source3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source3D::Data(points) => f.debug_tuple("Data").field(&points.len()).finish(),
            Source3D::Function(_) => f.write_str("Function(..)"),
            Source3D::Expression(expr) => f.debug_tuple("Expression").field(expr).finish(),
        }
    }
}

impl fmt::Debug for Graph2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph2D")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("axes", &self.axes)
            .finish()
    }
}

impl fmt::Debug for Graph3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph3D")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("axes", &self.axes)
            .finish()
    }
}
