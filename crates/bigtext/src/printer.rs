//! The printer engine: composes glyphs left-to-right through a [`Terminal`].

use std::path::Path;

use log::warn;

use crate::error::{PrinterError, Result};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_SPACING};
use crate::table::GlyphTable;
use crate::{Color, Terminal};

/// Rendering configuration for a [`BigTextPrinter`].
///
/// `None` colors inherit whatever the terminal currently uses.
#[derive(Clone, Copy, Debug)]
pub struct PrinterOptions {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    /// Character painted into every lit cell.
    pub symbol: char,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            foreground: None,
            background: None,
            symbol: '*',
        }
    }
}

impl PrinterOptions {
    pub fn colored(foreground: Color, background: Color) -> Self {
        Self {
            foreground: Some(foreground),
            background: Some(background),
            ..Self::default()
        }
    }

    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Common surface of text printers.
pub trait Printer {
    fn write(&mut self, text: &str) -> Result<()>;
    fn write_line(&mut self, text: &str) -> Result<()>;
}

/// Prints text as oversized block glyphs at the terminal's cursor position.
///
/// One synchronous call per line of text; the printer assumes exclusive
/// access to its terminal for its lifetime.
pub struct BigTextPrinter<T: Terminal> {
    terminal: T,
    table: GlyphTable,
    options: PrinterOptions,
}

impl<T: Terminal> BigTextPrinter<T> {
    pub fn new(terminal: T, table: GlyphTable, options: PrinterOptions) -> Self {
        Self {
            terminal,
            table,
            options,
        }
    }

    /// Build a printer from a glyph table file.
    ///
    /// A table that fails to load degrades to an empty one: the failure is
    /// logged and every character then renders as an invisible glyph. The
    /// printer itself always comes into existence.
    pub fn from_resource(terminal: T, path: impl AsRef<Path>, options: PrinterOptions) -> Self {
        let path = path.as_ref();
        let table = match GlyphTable::load(path) {
            Ok(table) => table,
            Err(err) => {
                warn!(
                    "glyph table {} unusable ({err}); continuing with an empty table",
                    path.display()
                );
                GlyphTable::default()
            }
        };
        Self::new(terminal, table, options)
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}

impl<T: Terminal> Printer for BigTextPrinter<T> {
    /// Paint `text` left-to-right starting at the terminal's cursor.
    ///
    /// Each glyph's points are painted with scoped single-cell writes; after
    /// each glyph the cursor moves right by its width plus
    /// [`GLYPH_SPACING`]. Unmapped characters paint nothing but still
    /// advance by the spacing. The cursor row is unchanged when this
    /// returns.
    fn write(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let Self {
            terminal,
            table,
            options,
        } = self;
        let (origin_col, origin_row) = terminal.cursor().map_err(|_| PrinterError::Terminal)?;
        let mut buf = [0u8; 4];
        let symbol: &str = options.symbol.encode_utf8(&mut buf);

        let mut offset = 0u16;
        for ch in text.chars() {
            let glyph = table.lookup(ch);
            for point in glyph.points() {
                terminal
                    .write_at(
                        symbol,
                        origin_col + offset + point.col,
                        origin_row + point.row,
                        options.foreground,
                        options.background,
                    )
                    .map_err(|_| PrinterError::Terminal)?;
            }
            offset += glyph.advance();
            terminal
                .set_cursor(origin_col + offset, origin_row)
                .map_err(|_| PrinterError::Terminal)?;
        }
        Ok(())
    }

    /// [`Printer::write`], then move the cursor to column 0 one glyph height
    /// further down, so consecutive calls stack without overlap.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        let (_, row) = self.terminal.cursor().map_err(|_| PrinterError::Terminal)?;
        self.terminal
            .set_cursor(0, row + GLYPH_HEIGHT)
            .map_err(|_| PrinterError::Terminal)?;
        Ok(())
    }
}

/// Passes text through to the terminal unchanged. The plain counterpart of
/// [`BigTextPrinter`] behind the same [`Printer`] trait.
pub struct SimplePrinter<T: Terminal> {
    terminal: T,
}

impl<T: Terminal> SimplePrinter<T> {
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}

impl<T: Terminal> Printer for SimplePrinter<T> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.terminal
            .write_raw(text)
            .map_err(|_| PrinterError::Terminal)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.terminal
            .write_raw("\n")
            .map_err(|_| PrinterError::Terminal)
    }
}
