//! The accepted shapes of a plot request.
//!
//! [`PlotRequest`] covers single graphs, lists of graphs, bare functions, point
//! lists and raw expressions. [`PlotRequest::into_graphs`] resolves every shape to
//! a list of [`Graph`]s of one dimensionality.
use mint::{Point2, Point3};

use crate::error::{Error, Result};
use crate::graph::{Dimension, Function2D, Function3D, Graph, Graph2D, Graph3D};

/// Everything [`crate::plot`] accepts.
#[non_exhaustive]
#[derive(Debug)]
pub enum PlotRequest {
    Graph2D(Graph2D),
    Graphs2D(Vec<Graph2D>),
    Graph3D(Graph3D),
    Graphs3D(Vec<Graph3D>),
    /// A function graph without options.
    Function2D(FunctionBox2D),
    Functions2D(Vec<FunctionBox2D>),
    Function3D(FunctionBox3D),
    Functions3D(Vec<FunctionBox3D>),
    /// A single literal data graph.
    Points2D(Vec<Point2<f64>>),
    Points3D(Vec<Point3<f64>>),
    /// Raw expressions are drawn as 3D surfaces.
    Expression(String),
    Expressions(Vec<String>),
    /// Graphs assembled at runtime; all must share a dimensionality.
    Mixed(Vec<Graph>),
}

/// Debug-printable wrapper around a boxed 2D function.
pub struct FunctionBox2D(pub Function2D);

/// Debug-printable wrapper around a boxed 3D function.
pub struct FunctionBox3D(pub Function3D);

impl std::fmt::Debug for FunctionBox2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FunctionBox2D(..)")
    }
}

impl std::fmt::Debug for FunctionBox3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FunctionBox3D(..)")
    }
}

impl PlotRequest {
    pub fn function_2d(f: impl Fn(f64) -> f64 + 'static) -> Self {
        PlotRequest::Function2D(FunctionBox2D(Box::new(f)))
    }

    pub fn function_3d(f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        PlotRequest::Function3D(FunctionBox3D(Box::new(f)))
    }

    pub fn functions_2d(fs: impl IntoIterator<Item = Function2D>) -> Self {
        PlotRequest::Functions2D(fs.into_iter().map(FunctionBox2D).collect())
    }

    pub fn functions_3d(fs: impl IntoIterator<Item = Function3D>) -> Self {
        PlotRequest::Functions3D(fs.into_iter().map(FunctionBox3D).collect())
    }

    pub fn points_2d<P: Into<Point2<f64>>>(points: impl IntoIterator<Item = P>) -> Self {
        PlotRequest::Points2D(points.into_iter().map(Into::into).collect())
    }

    pub fn points_3d<P: Into<Point3<f64>>>(points: impl IntoIterator<Item = P>) -> Self {
        PlotRequest::Points3D(points.into_iter().map(Into::into).collect())
    }

    pub fn expression(expr: impl Into<String>) -> Self {
        PlotRequest::Expression(expr.into())
    }

    pub fn expressions<S: Into<String>>(exprs: impl IntoIterator<Item = S>) -> Self {
        PlotRequest::Expressions(exprs.into_iter().map(Into::into).collect())
    }

    /// Resolve the request into its graphs and their shared dimensionality.
    ///
    /// Fails with [`Error::EmptyRequest`] when there is nothing to draw and with
    /// [`Error::MixedDimensions`] when a [`PlotRequest::Mixed`] list combines 2D
    /// and 3D graphs.
    pub fn into_graphs(self) -> Result<(Dimension, Vec<Graph>)> {
        let graphs: Vec<Graph> = match self {
            PlotRequest::Graph2D(g) => vec![g.into()],
            PlotRequest::Graphs2D(gs) => gs.into_iter().map(Graph::from).collect(),
            PlotRequest::Graph3D(g) => vec![g.into()],
            PlotRequest::Graphs3D(gs) => gs.into_iter().map(Graph::from).collect(),
            PlotRequest::Function2D(FunctionBox2D(f)) => vec![function_graph_2d(f)],
            PlotRequest::Functions2D(fs) => fs
                .into_iter()
                .map(|FunctionBox2D(f)| function_graph_2d(f))
                .collect(),
            PlotRequest::Function3D(FunctionBox3D(f)) => vec![function_graph_3d(f)],
            PlotRequest::Functions3D(fs) => fs
                .into_iter()
                .map(|FunctionBox3D(f)| function_graph_3d(f))
                .collect(),
            PlotRequest::Points2D(points) => vec![Graph2D::data(points).into()],
            PlotRequest::Points3D(points) => vec![Graph3D::data(points).into()],
            PlotRequest::Expression(expr) => vec![Graph3D::expression(expr).into()],
            PlotRequest::Expressions(exprs) => exprs
                .into_iter()
                .map(|e| Graph3D::expression(e).into())
                .collect(),
            PlotRequest::Mixed(graphs) => graphs,
        };

        let Some(first) = graphs.first() else {
            return Err(Error::EmptyRequest);
        };
        let dimension = first.dimension();
        if let Some(position) = graphs.iter().position(|g| g.dimension() != dimension) {
            return Err(Error::MixedDimensions {
                position: position + 1,
            });
        }
        Ok((dimension, graphs))
    }
}

fn function_graph_2d(f: Function2D) -> Graph {
    Graph2D::from_function(f).into()
}

fn function_graph_3d(f: Function3D) -> Graph {
    Graph3D::from_function(f).into()
}

impl From<Graph2D> for PlotRequest {
    fn from(value: Graph2D) -> Self {
        PlotRequest::Graph2D(value)
    }
}

impl From<Vec<Graph2D>> for PlotRequest {
    fn from(value: Vec<Graph2D>) -> Self {
        PlotRequest::Graphs2D(value)
    }
}

impl From<Graph3D> for PlotRequest {
    fn from(value: Graph3D) -> Self {
        PlotRequest::Graph3D(value)
    }
}

impl From<Vec<Graph3D>> for PlotRequest {
    fn from(value: Vec<Graph3D>) -> Self {
        PlotRequest::Graphs3D(value)
    }
}

impl From<Vec<Graph>> for PlotRequest {
    fn from(value: Vec<Graph>) -> Self {
        PlotRequest::Mixed(value)
    }
}

impl From<Vec<(f64, f64)>> for PlotRequest {
    fn from(value: Vec<(f64, f64)>) -> Self {
        PlotRequest::points_2d(value.into_iter().map(|(x, y)| [x, y]))
    }
}

impl From<Vec<(f64, f64, f64)>> for PlotRequest {
    fn from(value: Vec<(f64, f64, f64)>) -> Self {
        PlotRequest::points_3d(value.into_iter().map(|(x, y, z)| [x, y, z]))
    }
}

impl From<&str> for PlotRequest {
    fn from(value: &str) -> Self {
        PlotRequest::expression(value)
    }
}

impl From<String> for PlotRequest {
    fn from(value: String) -> Self {
        PlotRequest::Expression(value)
    }
}

impl From<Vec<String>> for PlotRequest {
    fn from(value: Vec<String>) -> Self {
        PlotRequest::Expressions(value)
    }
}

impl From<Vec<&str>> for PlotRequest {
    fn from(value: Vec<&str>) -> Self {
        PlotRequest::expressions(value)
    }
}
