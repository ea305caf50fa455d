//! Synthesis of the composite gnuplot command.
//!
//! [`synthesize`] joins the preamble directives and one plot statement with `; `.
//! The plot statement is the verb followed by one clause per graph, joined with
//! `, `. File-backed graphs are referenced by quoted filename and their content
//! is returned alongside the command; nothing is written here.
use std::fmt;
use std::path::PathBuf;

use crate::graph::{DataSource, Dimension, PreparedGraph};

pub mod naming;

pub use naming::{FileNamer, FileNaming};

/// The gnuplot verb that draws the graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotVerb {
    /// 2D plot.
    Plot,
    /// 3D surface plot.
    Splot,
}

impl From<Dimension> for PlotVerb {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Two => PlotVerb::Plot,
            Dimension::Three => PlotVerb::Splot,
        }
    }
}

impl fmt::Display for PlotVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlotVerb::Plot => "plot",
            PlotVerb::Splot => "splot",
        })
    }
}

/// A data file to persist before the command runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataFile {
    pub path: PathBuf,
    pub content: String,
}

/// A complete command and the data files it references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub command: String,
    pub files: Vec<DataFile>,
}

/// Build the command text and the ordered list of data files.
pub fn synthesize(
    preamble: &[String],
    verb: PlotVerb,
    graphs: &[PreparedGraph],
    namer: &FileNamer,
) -> Script {
    let mut files = Vec::new();
    let mut clauses = Vec::with_capacity(graphs.len());

    for (index, graph) in graphs.iter().enumerate() {
        let clause = match &graph.source {
            DataSource::Inline(expr) => format!("{expr} {}", graph.options),
            DataSource::File(content) => {
                let path = namer.path(index + 1);
                let clause = format!("\"{}\" {}", path.display(), graph.options);
                files.push(DataFile {
                    path,
                    content: content.clone(),
                });
                clause
            }
        };
        clauses.push(clause);
    }

    let statement = format!("{verb} {}", clauses.join(", "));
    let command = preamble
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(statement.as_str()))
        .collect::<Vec<_>>()
        .join("; ");

    Script { command, files }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(options: &str, content: &str) -> PreparedGraph {
        PreparedGraph {
            options: options.into(),
            source: DataSource::File(content.into()),
        }
    }

    fn inline(options: &str, expr: &str) -> PreparedGraph {
        PreparedGraph {
            options: options.into(),
            source: DataSource::Inline(expr.into()),
        }
    }

    #[test]
    fn file_graphs_are_named_in_input_order() {
        let script = synthesize(
            &[],
            PlotVerb::Plot,
            &[file("with lines", " 1 2\n"), file("with dots", " 3 4\n")],
            &FileNaming::positional().namer(),
        );
        assert_eq!(
            script.command,
            "plot \"plot1.dat\" with lines, \"plot2.dat\" with dots"
        );
        assert_eq!(
            script.files,
            vec![
                DataFile {
                    path: "plot1.dat".into(),
                    content: " 1 2\n".into(),
                },
                DataFile {
                    path: "plot2.dat".into(),
                    content: " 3 4\n".into(),
                },
            ]
        );
    }

    #[test]
    fn inline_graphs_consume_a_position() {
        let script = synthesize(
            &["set term x11 persist".to_string()],
            PlotVerb::Splot,
            &[inline("title \"s\"", "x*y"), file("", " 0 0 0\n")],
            &FileNaming::positional().namer(),
        );
        assert_eq!(
            script.command,
            "set term x11 persist; splot x*y title \"s\", \"plot2.dat\" "
        );
        assert_eq!(script.files.len(), 1);
        assert_eq!(script.files[0].path, PathBuf::from("plot2.dat"));
    }

    #[test]
    fn preamble_directives_precede_statement() {
        let preamble = vec!["set term png".to_string(), "set output \"out.png\"".to_string()];
        let script = synthesize(
            &preamble,
            PlotVerb::Plot,
            &[file("", " 0 0\n 1 1\n")],
            &FileNaming::positional().namer(),
        );
        assert!(script
            .command
            .starts_with("set term png; set output \"out.png\"; plot \"plot1.dat\" "));
    }

    #[test]
    fn verb_follows_dimension() {
        assert_eq!(PlotVerb::from(Dimension::Two).to_string(), "plot");
        assert_eq!(PlotVerb::from(Dimension::Three).to_string(), "splot");
    }
}
