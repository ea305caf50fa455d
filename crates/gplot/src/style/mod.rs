//! Per-graph rendering options and their canonical normalization.
//!
//! A graph may be given any number of [`PlotOption`]s. Before encoding they are
//! passed through [`normalize`], which keeps the first option of each
//! [`OptionKind`] and orders the survivors style, color, title.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod color;

pub use color::Color;

/// How a graph's points are drawn.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Points joined by line segments.
    Lines,
    /// A marker at every point.
    Points,
    /// A single pixel at every point.
    Dots,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Lines => "with lines",
            Style::Points => "with points",
            Style::Dots => "with dots",
        })
    }
}

/// A rendering option attached to a single graph.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlotOption {
    /// Legend entry for the graph.
    Title(String),
    /// Render mode.
    Style(Style),
    /// Line or marker color.
    Color(Color),
}

/// Discriminant of a [`PlotOption`], ordered the way clauses are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKind {
    Style,
    Color,
    Title,
}

impl OptionKind {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }
}

impl PlotOption {
    pub fn title(text: impl Into<String>) -> Self {
        PlotOption::Title(text.into())
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            PlotOption::Title(_) => OptionKind::Title,
            PlotOption::Style(_) => OptionKind::Style,
            PlotOption::Color(_) => OptionKind::Color,
        }
    }

    /// Reject values that cannot be encoded faithfully.
    ///
    /// Titles are emitted inside a double-quoted gnuplot string, so an embedded
    /// `"` would terminate it early and an unpaired trailing `\` would escape the
    /// closing quote.
    pub fn validate(&self) -> Result<()> {
        let PlotOption::Title(text) = self else {
            return Ok(());
        };
        let reason = if text.contains('"') {
            "contains a double quote"
        } else if escapes_closing_quote(text) {
            "ends with an unpaired backslash"
        } else {
            return Ok(());
        };
        Err(Error::QuoteInTitle {
            title: text.clone(),
            reason,
        })
    }
}

/// Whether `text` ends in an odd run of backslashes.
fn escapes_closing_quote(text: &str) -> bool {
    text.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

impl From<Style> for PlotOption {
    fn from(value: Style) -> Self {
        PlotOption::Style(value)
    }
}

impl From<Color> for PlotOption {
    fn from(value: Color) -> Self {
        PlotOption::Color(value)
    }
}

impl fmt::Display for PlotOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotOption::Title(text) => write!(f, "title \"{text}\""),
            PlotOption::Style(style) => style.fmt(f),
            PlotOption::Color(color) => write!(f, "lc rgb \"{color}\""),
        }
    }
}

/// Deduplicate and order a graph's options.
///
/// For each kind the earliest option in `options` wins and later ones are dropped.
/// Survivors are stably sorted style, color, title. The result is a fixed point:
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(options: &[PlotOption]) -> Vec<PlotOption> {
    let mut seen = [false; OptionKind::COUNT];
    let mut kept: Vec<PlotOption> = options
        .iter()
        .filter(|option| !std::mem::replace(&mut seen[option.kind().index()], true))
        .cloned()
        .collect();
    kept.sort_by_key(PlotOption::kind);
    kept
}

/// Normalize `options` and join their encodings with single spaces.
pub fn encode_options(options: &[PlotOption]) -> String {
    normalize(options)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_for_duplicates() {
        let out = normalize(&[Style::Lines.into(), Style::Points.into()]);
        assert_eq!(out, vec![PlotOption::Style(Style::Lines)]);

        let out = normalize(&[
            PlotOption::title("a"),
            Color::Red.into(),
            PlotOption::title("b"),
            Color::Blue.into(),
        ]);
        assert_eq!(out, vec![Color::Red.into(), PlotOption::title("a")]);
    }

    #[test]
    fn survivors_follow_canonical_order() {
        let out = normalize(&[
            Color::Red.into(),
            Style::Lines.into(),
            PlotOption::title("t"),
        ]);
        assert_eq!(
            out,
            vec![
                PlotOption::Style(Style::Lines),
                PlotOption::Color(Color::Red),
                PlotOption::title("t"),
            ]
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs: Vec<Vec<PlotOption>> = vec![
            vec![],
            vec![PlotOption::title("x")],
            vec![
                PlotOption::title("x"),
                Style::Dots.into(),
                Color::rgb(1, 2, 3).into(),
                Style::Points.into(),
                PlotOption::title("y"),
            ],
            vec![Color::Black.into(), Color::White.into(), Style::Lines.into()],
        ];
        for input in inputs {
            let once = normalize(&input);
            assert_eq!(normalize(&once), once);
            let mut kinds: Vec<_> = once.iter().map(PlotOption::kind).collect();
            kinds.dedup();
            assert_eq!(kinds.len(), once.len(), "duplicate kinds in {once:?}");
        }
    }

    #[test]
    fn options_encode_to_gnuplot_clauses() {
        assert_eq!(PlotOption::title("sin").to_string(), "title \"sin\"");
        assert_eq!(Style::Dots.to_string(), "with dots");
        assert_eq!(
            PlotOption::Color(Color::rgb(255, 0, 128)).to_string(),
            "lc rgb \"#FF0080\""
        );
        assert_eq!(
            encode_options(&[
                PlotOption::title("t"),
                Color::DarkBlue.into(),
                Style::Points.into(),
            ]),
            "with points lc rgb \"dark-blue\" title \"t\""
        );
        assert_eq!(encode_options(&[]), "");
    }

    #[test]
    fn titles_with_quotes_are_rejected() {
        assert!(PlotOption::title("plain").validate().is_ok());
        let err = PlotOption::title("a \"quoted\" word").validate().unwrap_err();
        assert!(matches!(err, Error::QuoteInTitle { .. }));
        assert!(PlotOption::Color(Color::Red).validate().is_ok());
    }

    #[test]
    fn titles_ending_in_a_lone_backslash_are_rejected() {
        for bad in ["dir\\", "a\\\\\\"] {
            let err = PlotOption::title(bad).validate().unwrap_err();
            assert!(
                matches!(err, Error::QuoteInTitle { reason, .. } if reason.contains("backslash")),
                "{bad:?} should be rejected"
            );
        }
        assert!(PlotOption::title("a\\\\").validate().is_ok());
        assert!(PlotOption::title("x\\ny").validate().is_ok());
    }
}
