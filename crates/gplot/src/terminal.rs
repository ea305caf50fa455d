//! Output targets and the preamble directives that select them.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where gnuplot sends the rendered plot.
///
/// Interactive variants open a display window; file variants carry the
/// destination path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    Aqua,
    Windows,
    X11,
    Ps(String),
    Eps(String),
    Png(String),
    Pdf(String),
    Svg(String),
    Gif(String),
    Jpeg(String),
    Latex(String),
}

impl Terminal {
    /// The `set term` directive for this target.
    pub fn term_directive(&self) -> &'static str {
        match self {
            Terminal::Aqua => "set term aqua",
            Terminal::Windows => "set term windows",
            Terminal::X11 => "set term x11 persist",
            Terminal::Ps(_) => "set term postscript",
            Terminal::Eps(_) => "set term postscript eps",
            Terminal::Png(_) => "set term png",
            Terminal::Pdf(_) => "set term pdfcairo",
            Terminal::Svg(_) => "set term svg",
            Terminal::Gif(_) => "set term gif",
            Terminal::Jpeg(_) => "set term jpeg",
            Terminal::Latex(_) => "set term latex",
        }
    }

    /// Destination file for file-backed targets.
    pub fn output_path(&self) -> Option<&str> {
        match self {
            Terminal::Aqua | Terminal::Windows | Terminal::X11 => None,
            Terminal::Ps(path)
            | Terminal::Eps(path)
            | Terminal::Png(path)
            | Terminal::Pdf(path)
            | Terminal::Svg(path)
            | Terminal::Gif(path)
            | Terminal::Jpeg(path)
            | Terminal::Latex(path) => Some(path),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.output_path().is_none()
    }

    /// Checks that a carried output path can be quoted into a directive.
    ///
    /// gnuplot expands backslash escapes inside double quotes, so paths must use
    /// forward slashes.
    pub fn validate(&self) -> Result<()> {
        let Some(path) = self.output_path() else {
            return Ok(());
        };
        let reason = if path.is_empty() {
            "path is empty"
        } else if path.contains('"') {
            "path contains a double quote"
        } else if path.contains('\\') {
            "path contains a backslash"
        } else if path.contains(['\n', '\r']) {
            "path contains a line break"
        } else {
            return Ok(());
        };
        Err(Error::InvalidOutputPath {
            path: path.to_string(),
            reason,
        })
    }

    /// Preamble directives: the terminal selection, then `set output` for file targets.
    pub fn directives(&self) -> Result<Vec<String>> {
        self.validate()?;
        let mut directives = vec![self.term_directive().to_string()];
        if let Some(path) = self.output_path() {
            directives.push(format!("set output \"{path}\""));
        }
        Ok(directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_maps_to_its_directive() {
        let cases = [
            (Terminal::Aqua, "set term aqua", None),
            (Terminal::Windows, "set term windows", None),
            (Terminal::X11, "set term x11 persist", None),
            (Terminal::Ps("a.ps".into()), "set term postscript", Some("a.ps")),
            (Terminal::Eps("a.eps".into()), "set term postscript eps", Some("a.eps")),
            (Terminal::Png("a.png".into()), "set term png", Some("a.png")),
            (Terminal::Pdf("a.pdf".into()), "set term pdfcairo", Some("a.pdf")),
            (Terminal::Svg("a.svg".into()), "set term svg", Some("a.svg")),
            (Terminal::Gif("a.gif".into()), "set term gif", Some("a.gif")),
            (Terminal::Jpeg("a.jpg".into()), "set term jpeg", Some("a.jpg")),
            (Terminal::Latex("a.tex".into()), "set term latex", Some("a.tex")),
        ];
        for (terminal, directive, path) in cases {
            assert_eq!(terminal.term_directive(), directive);
            assert_eq!(terminal.output_path(), path);
            assert_eq!(terminal.is_interactive(), path.is_none());

            let mut expected = vec![directive.to_string()];
            expected.extend(path.map(|p| format!("set output \"{p}\"")));
            assert_eq!(terminal.directives().unwrap(), expected, "{terminal:?}");
        }
    }

    #[test]
    fn interactive_targets_emit_single_directive() {
        assert_eq!(Terminal::X11.directives().unwrap(), vec!["set term x11 persist"]);
        assert_eq!(Terminal::Aqua.directives().unwrap(), vec!["set term aqua"]);
        assert!(Terminal::Windows.is_interactive());
    }

    #[test]
    fn file_targets_add_output_directive() {
        assert_eq!(
            Terminal::Png("out.png".into()).directives().unwrap(),
            vec!["set term png", "set output \"out.png\""]
        );
        assert_eq!(
            Terminal::Eps("fig.eps".into()).directives().unwrap(),
            vec!["set term postscript eps", "set output \"fig.eps\""]
        );
        assert_eq!(
            Terminal::Pdf("a/b.pdf".into()).directives().unwrap()[0],
            "set term pdfcairo"
        );
    }

    #[test]
    fn unusable_output_paths_are_rejected() {
        for bad in [
            "",
            "with\"quote.png",
            "line\nbreak.png",
            "C:\\out\\",
            "dir\\",
            "tab\\tname.png",
        ] {
            let err = Terminal::Png(bad.into()).directives().unwrap_err();
            assert!(
                matches!(err, Error::InvalidOutputPath { .. }),
                "{bad:?} should be rejected"
            );
        }
    }
}
