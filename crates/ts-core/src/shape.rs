//! Station shapes and line colours.
//!
//! Both are small closed enums.  `LineColor` doubles as a dense index into
//! the per-colour line table (at most one line per colour).

/// The shape of a station, which is also what riders travel towards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationShape {
    Circle,
    Triangle,
    Square,
    Diamond,
    Pentagon,
    Hexagon,
    Star,
    Cross,
}

impl StationShape {
    pub const COUNT: usize = 8;

    /// Every shape in declaration order.
    pub const ALL: [StationShape; Self::COUNT] = [
        StationShape::Circle,
        StationShape::Triangle,
        StationShape::Square,
        StationShape::Diamond,
        StationShape::Pentagon,
        StationShape::Hexagon,
        StationShape::Star,
        StationShape::Cross,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            StationShape::Circle   => "circle",
            StationShape::Triangle => "triangle",
            StationShape::Square   => "square",
            StationShape::Diamond  => "diamond",
            StationShape::Pentagon => "pentagon",
            StationShape::Hexagon  => "hexagon",
            StationShape::Star     => "star",
            StationShape::Cross    => "cross",
        }
    }
}

impl std::fmt::Display for StationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The colour of a line.  A colour identifies its line for the whole
/// session: once created, the line is extended, never replaced.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl LineColor {
    pub const COUNT: usize = 6;

    pub const ALL: [LineColor; Self::COUNT] = [
        LineColor::Red,
        LineColor::Blue,
        LineColor::Green,
        LineColor::Yellow,
        LineColor::Purple,
        LineColor::Orange,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display colour as 8-bit RGB.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            LineColor::Red    => [0xe5, 0x39, 0x35],
            LineColor::Blue   => [0x1e, 0x88, 0xe5],
            LineColor::Green  => [0x43, 0xa0, 0x47],
            LineColor::Yellow => [0xfd, 0xd8, 0x35],
            LineColor::Purple => [0x8e, 0x24, 0xaa],
            LineColor::Orange => [0xfb, 0x8c, 0x00],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineColor::Red    => "red",
            LineColor::Blue   => "blue",
            LineColor::Green  => "green",
            LineColor::Yellow => "yellow",
            LineColor::Purple => "purple",
            LineColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
