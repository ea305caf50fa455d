#![forbid(unsafe_code)]
//! gplot: typed 2D/3D plot descriptions rendered through gnuplot.
//!
//! Modules:
//! - style: per-graph options, colors, and option normalization
//! - terminal: output targets and their preamble directives
//! - format: coordinate formatting for data files
//! - graph: graph descriptions, function sampling, and preparation
//! - script: composite command synthesis and data file naming
//! - request: the accepted shapes of a plot request
//! - runner: plot configuration, engine invocation, and events
//!
//! ```no_run
//! use gplot::prelude::*;
//!
//! let ok = gplot::plot(&Terminal::X11, PlotRequest::function_2d(f64::sin))?;
//! # Ok::<(), gplot::Error>(())
//! ```
pub mod error;
pub mod format;
pub mod graph;
pub mod request;
pub mod runner;
pub mod script;
pub mod style;
pub mod terminal;

pub use error::{Error, Result};
pub use runner::plot;

/// Convenient re-exports for common types. Import with `use gplot::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::NumberFormat;
    pub use crate::graph::sampling::Domain;
    pub use crate::graph::{
        AxisOption, AxisOption2D, AxisOption3D, DataSource, Dimension, Graph, Graph2D, Graph3D,
        PreparedGraph,
    };
    pub use crate::request::PlotRequest;
    pub use crate::runner::engine::{Engine, EngineStatus, GnuplotEngine};
    pub use crate::runner::events::{
        EventSink, FnSink, MultiSink, PlotEvent, PlotEventKind, VecSink,
    };
    pub use crate::runner::{build_script, plot, run_script, PlotConfig, Plotter};
    pub use crate::script::{synthesize, DataFile, FileNaming, PlotVerb, Script};
    pub use crate::style::{normalize, Color, OptionKind, PlotOption, Style};
    pub use crate::terminal::Terminal;
}
