//! Cell tokens written into a [`GridBuffer`](crate::GridBuffer).

use std::fmt::{self, Display};

/// The text of the empty sentinel token.
pub const EMPTY_SENTINEL: &str = "-";

/// The color of a circle clue (Masyu pearls, Shigoki dots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleColor {
    /// A white circle, encoded `W` and rendered `w`.
    White,
    /// A black circle, encoded `B` and rendered `b`.
    Black,
}

impl CircleColor {
    /// Maps an encoding marker to a color.
    ///
    /// Only the uppercase markers `W` and `B` are recognized.
    #[must_use]
    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'W' => Some(Self::White),
            b'B' => Some(Self::Black),
            _ => None,
        }
    }

    /// Returns the lowercase symbol used in canonical text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

/// A Battleship cell, drawn from a fixed seven-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipSegment {
    /// Open water (`x`).
    Water,
    /// A one-cell ship (`o`).
    Single,
    /// The middle of a ship (`m`).
    Middle,
    /// The north end of a vertical ship (`n`).
    North,
    /// The east end of a horizontal ship (`e`).
    East,
    /// The south end of a vertical ship (`s`).
    South,
    /// The west end of a horizontal ship (`w`).
    West,
}

impl ShipSegment {
    /// All segments in encoding order: digit `0` is `ALL[0]`.
    pub const ALL: [Self; 7] = [
        Self::Water,
        Self::Single,
        Self::Middle,
        Self::North,
        Self::East,
        Self::South,
        Self::West,
    ];

    /// Maps an encoding digit `0`-`6` to a segment.
    #[must_use]
    pub fn from_digit(digit: u8) -> Option<Self> {
        let offset = digit.checked_sub(b'0')?;
        Self::ALL.get(usize::from(offset)).copied()
    }

    /// Returns the symbol used in canonical text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Water => 'x',
            Self::Single => 'o',
            Self::Middle => 'm',
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
        }
    }
}

/// The content of one grid cell.
///
/// `Display` renders the canonical text of the token; it is the single place that
/// decides how a cell looks in problem text.
///
/// # Examples
///
/// ```
/// use pzgrid_core::{CellToken, CircleColor, ShipSegment};
///
/// assert_eq!(CellToken::Empty.to_string(), "-");
/// assert_eq!(CellToken::number("12").to_string(), "12");
/// assert_eq!(CellToken::circle(CircleColor::Black, Some("3")).to_string(), "b3");
/// assert_eq!(CellToken::Segment(ShipSegment::North).to_string(), "n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellToken {
    /// The empty sentinel, rendered `-`.
    #[default]
    Empty,
    /// A numeric clue, kept as the digits that were written.
    Number(String),
    /// A colored circle, optionally carrying a count suffix.
    Circle {
        /// Circle color.
        color: CircleColor,
        /// Digits following the color marker, if any.
        count: Option<String>,
    },
    /// A raw field copied verbatim, such as a region id or a solution mark.
    Raw(String),
    /// A Battleship segment.
    Segment(ShipSegment),
}

impl CellToken {
    /// Creates a numeric clue token.
    #[must_use]
    pub fn number(digits: impl Into<String>) -> Self {
        Self::Number(digits.into())
    }

    /// Creates a circle token; an empty count is stored as `None`.
    #[must_use]
    pub fn circle(color: CircleColor, count: Option<&str>) -> Self {
        let count = count.filter(|digits| !digits.is_empty()).map(str::to_owned);
        Self::Circle { color, count }
    }

    /// Creates a raw token.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Reads one whitespace-free field of grid text.
    ///
    /// The sentinel `-` becomes [`CellToken::Empty`]; anything else is kept raw.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text == EMPTY_SENTINEL {
            Self::Empty
        } else {
            Self::raw(text)
        }
    }

    /// Returns `true` for the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for CellToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_SENTINEL),
            Self::Number(digits) => f.write_str(digits),
            Self::Circle { color, count } => {
                write!(f, "{}", color.symbol())?;
                if let Some(count) = count {
                    f.write_str(count)?;
                }
                Ok(())
            }
            Self::Raw(text) => f.write_str(text),
            Self::Segment(segment) => write!(f, "{}", segment.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_segment_digit_table() {
        let symbols: String = (b'0'..=b'6')
            .map(|digit| ShipSegment::from_digit(digit).unwrap().symbol())
            .collect();
        assert_eq!(symbols, "xomnesw");
        assert_eq!(ShipSegment::from_digit(b'7'), None);
        assert_eq!(ShipSegment::from_digit(b'a'), None);
        assert_eq!(ShipSegment::from_digit(b' '), None);
    }

    #[test]
    fn test_circle_markers_are_case_sensitive() {
        assert_eq!(CircleColor::from_marker(b'W'), Some(CircleColor::White));
        assert_eq!(CircleColor::from_marker(b'B'), Some(CircleColor::Black));
        assert_eq!(CircleColor::from_marker(b'w'), None);
        assert_eq!(CircleColor::from_marker(b'b'), None);
    }

    #[test]
    fn test_circle_empty_count_is_bare_color() {
        let bare = CellToken::circle(CircleColor::White, Some(""));
        assert_eq!(bare, CellToken::circle(CircleColor::White, None));
        assert_eq!(bare.to_string(), "w");
    }

    #[test]
    fn test_from_text() {
        assert!(CellToken::from_text("-").is_empty());
        assert_eq!(CellToken::from_text("#"), CellToken::raw("#"));
        assert_eq!(CellToken::from_text("--").to_string(), "--");
    }
}
