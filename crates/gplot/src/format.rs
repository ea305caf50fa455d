//! Text rendering of coordinates and data rows.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a coordinate value is written into a data file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Default)]
pub enum NumberFormat {
    /// Shortest text that round-trips (`1.0` is `1`, `0.05` is `0.05`).
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point.
    Fixed(usize),
    /// Scientific notation with a fixed number of fraction digits.
    Scientific(usize),
    /// Caller-supplied formatter.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(f64) -> String),
}

impl fmt::Debug for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::Shortest => f.write_str("Shortest"),
            NumberFormat::Fixed(digits) => f.debug_tuple("Fixed").field(digits).finish(),
            NumberFormat::Scientific(digits) => {
                f.debug_tuple("Scientific").field(digits).finish()
            }
            NumberFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        match *self {
            NumberFormat::Shortest => value.to_string(),
            NumberFormat::Fixed(digits) => format!("{value:.digits$}"),
            NumberFormat::Scientific(digits) => format!("{value:.digits$e}"),
            NumberFormat::Custom(f) => f(value),
        }
    }

    /// Append one data row: every coordinate preceded by a space, then a newline.
    pub fn write_row(&self, out: &mut String, coords: &[f64]) {
        for &c in coords {
            out.push(' ');
            out.push_str(&self.format(c));
        }
        out.push('\n');
    }

    /// Encode a sequence of rows into data file content.
    pub fn rows<I, R>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut out = String::new();
        for row in rows {
            self.write_row(&mut out, row.as_ref());
        }
        out
    }
}
