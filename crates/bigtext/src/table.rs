//! Glyph table resource parsing and lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{PrinterError, Result};
use crate::glyph::{Glyph, Point, GLYPH_HEIGHT};

/// Marker character that switches a cell on inside a bitmap row. Fixed by
/// the format, unrelated to the printer's configurable output symbol.
pub const MARKER: char = '*';

static EMPTY_GLYPH: Glyph = Glyph::empty();

static BUILTIN: Lazy<GlyphTable> = Lazy::new(|| {
    GlyphTable::parse(include_str!("../assets/default_glyphs.txt")).unwrap_or_default()
});

/// Immutable mapping from character to [`Glyph`], built once from a
/// resource.
///
/// Lookup is total: characters absent from the table resolve to the empty
/// glyph, never an error.
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphTable {
    /// Parse a glyph table resource.
    ///
    /// Line 1 lists the characters to map; the Nth character corresponds to
    /// the Nth glyph block. Line 2 is reserved and ignored. Each block then
    /// contributes up to [`GLYPH_HEIGHT`] non-empty bitmap lines, where
    /// [`MARKER`] at column `i` of bitmap-row `j` lights the cell `(i, j)`.
    /// Empty lines are skipped without consuming a row index, so authors may
    /// pad blocks with blank separators.
    ///
    /// Only a missing or empty first line is an error. Anything else parses
    /// best effort: blocks cut short at end of input simply leave the
    /// remaining characters with empty glyphs.
    pub fn parse(source: &str) -> Result<Self> {
        let mut lines = source.lines();
        let header = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| PrinterError::Format("missing character list on first line".into()))?;
        // reserved separator/comment line
        lines.next();

        let mut glyphs = HashMap::new();
        for ch in header.chars() {
            let mut points = Vec::new();
            let mut row = 0;
            while row < GLYPH_HEIGHT {
                let Some(line) = lines.next() else { break };
                if line.is_empty() {
                    continue;
                }
                for (col, cell) in line.chars().enumerate() {
                    if cell == MARKER {
                        points.push(Point::new(col as u16, row));
                    }
                }
                row += 1;
            }
            // a duplicate character keeps its later definition
            glyphs.insert(ch, Glyph::from_points(points));
        }
        Ok(Self { glyphs })
    }

    /// Read and parse a glyph table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// The table bundled with the crate: ASCII lowercase letters and digits.
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN
    }

    /// Total lookup: unmapped characters yield the empty glyph.
    pub fn lookup(&self, ch: char) -> &Glyph {
        self.glyphs.get(&ch).unwrap_or(&EMPTY_GLYPH)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Characters the table maps, in no particular order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}
