//! Line/marker colors and their gnuplot spelling.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A line or marker color.
///
/// Named colors map to gnuplot's lowercase hyphenated palette names
/// (`DarkMagenta` is `dark-magenta`); [`Color::Rgb`] renders as `#RRGGBB`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Color {
    White,
    Black,
    Grey,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    Yellow,
    Orange,
    Violet,
    Brown,
    DarkRed,
    DarkGreen,
    DarkBlue,
    DarkMagenta,
    LightRed,
    LightGreen,
    LightBlue,
    LightMagenta,
    DarkCyan,
    DarkGrey,
    DarkYellow,
    DarkOrange,
    LightGrey,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Every named palette member, in declaration order.
    pub const NAMED: [Color; 25] = [
        Color::White,
        Color::Black,
        Color::Grey,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Yellow,
        Color::Orange,
        Color::Violet,
        Color::Brown,
        Color::DarkRed,
        Color::DarkGreen,
        Color::DarkBlue,
        Color::DarkMagenta,
        Color::LightRed,
        Color::LightGreen,
        Color::LightBlue,
        Color::LightMagenta,
        Color::DarkCyan,
        Color::DarkGrey,
        Color::DarkYellow,
        Color::DarkOrange,
        Color::LightGrey,
    ];

    /// Build an RGB color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Build an RGB color from wider integers, rejecting channels outside `0..=255`.
    pub fn try_rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Color::Rgb(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// The gnuplot palette name, or `None` for [`Color::Rgb`].
    pub const fn name(&self) -> Option<&'static str> {
        let name = match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Violet => "violet",
            Color::Brown => "brown",
            Color::DarkRed => "dark-red",
            Color::DarkGreen => "dark-green",
            Color::DarkBlue => "dark-blue",
            Color::DarkMagenta => "dark-magenta",
            Color::LightRed => "light-red",
            Color::LightGreen => "light-green",
            Color::LightBlue => "light-blue",
            Color::LightMagenta => "light-magenta",
            Color::DarkCyan => "dark-cyan",
            Color::DarkGrey => "dark-grey",
            Color::DarkYellow => "dark-yellow",
            Color::DarkOrange => "dark-orange",
            Color::LightGrey => "light-grey",
            Color::Rgb(..) => return None,
        };
        Some(name)
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange {
        channel: name,
        value,
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn rgb_renders_uppercase_zero_padded_hex() {
        assert_eq!(Color::rgb(255, 0, 128).to_string(), "#FF0080");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::from([0xab, 0xcd, 0xef]).to_string(), "#ABCDEF");
    }

    #[test]
    fn named_colors_use_hyphenated_names() {
        assert_eq!(Color::DarkMagenta.to_string(), "dark-magenta");
        assert_eq!(Color::LightGrey.to_string(), "light-grey");
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[test]
    fn palette_names_are_distinct_lowercase() {
        let names: HashSet<_> = Color::NAMED.iter().filter_map(Color::name).collect();
        assert_eq!(names.len(), Color::NAMED.len());
        for name in names {
            assert_eq!(name, name.to_lowercase());
            assert!(!name.contains(' '));
        }
    }

    #[test]
    fn try_rgb_rejects_out_of_range_channels() {
        assert_eq!(Color::try_rgb(10, 20, 30).unwrap(), Color::rgb(10, 20, 30));

        let err = Color::try_rgb(0, 256, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::ChannelOutOfRange {
                channel: "green",
                value: 256
            }
        ));
        assert!(Color::try_rgb(-1, 0, 0).is_err());
    }
}
