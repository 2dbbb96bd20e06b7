/// Number of rows every glyph occupies on screen.
pub const GLYPH_HEIGHT: u16 = 6;

/// Columns inserted after each glyph's measured width.
pub const GLYPH_SPACING: u16 = 1;

/// One lit cell inside a glyph's bounding box, relative to its top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub col: u16,
    pub row: u16,
}

impl Point {
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

/// The lit cells making up one character's oversized rendering.
///
/// Points are kept in resource scan order. A glyph with no points is valid
/// and renders nothing; the table hands it out for unmapped characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    points: Vec<Point>,
}

impl Glyph {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rendered width in columns: one past the rightmost lit column, 0 for
    /// the empty glyph.
    pub fn width(&self) -> u16 {
        self.points.iter().map(|p| p.col).max().map_or(0, |c| c + 1)
    }

    /// Columns the cursor moves after this glyph is painted.
    pub fn advance(&self) -> u16 {
        self.width() + GLYPH_SPACING
    }
}
