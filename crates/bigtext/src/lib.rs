//! bigtext: oversized block-glyph text for character-cell terminals.
//!
//! A [`GlyphTable`] maps characters to sparse point sets parsed from a text
//! resource; a [`BigTextPrinter`] paints those points through an injected
//! [`Terminal`] capability, composing glyphs left-to-right at the current
//! cursor position.

mod error;
mod glyph;
mod printer;
mod table;

pub use error::{PrinterError, Result};
pub use glyph::{Glyph, Point, GLYPH_HEIGHT, GLYPH_SPACING};
pub use printer::{BigTextPrinter, Printer, PrinterOptions, SimplePrinter};
pub use table::{GlyphTable, MARKER};

// Test utilities
pub mod test_support;

/// ANSI palette index used for foreground and background colors.
pub type Color = u8;

/// Capability interface over a character-cell terminal.
///
/// The printer is written against this trait instead of a process-wide
/// console, so tests can substitute a recording fake. Color getters are
/// infallible: real terminals cannot be queried for their current colors, so
/// implementors shadow-track whatever was last set.
pub trait Terminal {
    type Error;

    fn cursor(&mut self) -> std::result::Result<(u16, u16), Self::Error>;
    fn set_cursor(&mut self, col: u16, row: u16) -> std::result::Result<(), Self::Error>;
    fn foreground(&self) -> Color;
    fn set_foreground(&mut self, color: Color) -> std::result::Result<(), Self::Error>;
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color) -> std::result::Result<(), Self::Error>;

    /// Write literal text at the current cursor position without touching
    /// colors.
    fn write_raw(&mut self, text: &str) -> std::result::Result<(), Self::Error>;

    /// Paint `text` at an absolute position with optional colors, then put
    /// the cursor and colors back exactly where they were.
    ///
    /// This scoped save/write/restore is what lets the printer issue
    /// single-cell writes without its coordinate math being disturbed by
    /// earlier cells on the same row.
    fn write_at(
        &mut self,
        text: &str,
        col: u16,
        row: u16,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> std::result::Result<(), Self::Error> {
        let (saved_col, saved_row) = self.cursor()?;
        let saved_fg = self.foreground();
        let saved_bg = self.background();

        self.set_cursor(col, row)?;
        if let Some(fg) = fg {
            self.set_foreground(fg)?;
        }
        if let Some(bg) = bg {
            self.set_background(bg)?;
        }
        self.write_raw(text)?;

        self.set_cursor(saved_col, saved_row)?;
        self.set_foreground(saved_fg)?;
        self.set_background(saved_bg)?;
        Ok(())
    }
}
