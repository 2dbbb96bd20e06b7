//! Test support utilities for bigtext.
//!
//! Provides a recording terminal fake for asserting on painted cells and
//! cursor/color state. Not part of the rendering API proper.

use std::convert::Infallible;

use crate::{Color, Terminal};

/// One `write_raw` call captured with the terminal state it ran under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintedCell {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub fg: Color,
    pub bg: Color,
}

/// Every state-changing call, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalOp {
    SetCursor(u16, u16),
    SetForeground(Color),
    SetBackground(Color),
    Write(String),
}

/// An in-memory terminal recording everything the printer does to it.
pub struct MockTerminal {
    pub col: u16,
    pub row: u16,
    pub fg: Color,
    pub bg: Color,
    pub cells: Vec<PaintedCell>,
    pub ops: Vec<TerminalOp>,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self {
            col: 0,
            row: 0,
            fg: 7,
            bg: 0,
            cells: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Start with the cursor somewhere other than the origin.
    pub fn at(col: u16, row: u16) -> Self {
        Self {
            col,
            row,
            ..Self::new()
        }
    }
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for MockTerminal {
    type Error = Infallible;

    fn cursor(&mut self) -> Result<(u16, u16), Self::Error> {
        Ok((self.col, self.row))
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> Result<(), Self::Error> {
        self.col = col;
        self.row = row;
        self.ops.push(TerminalOp::SetCursor(col, row));
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn set_foreground(&mut self, color: Color) -> Result<(), Self::Error> {
        self.fg = color;
        self.ops.push(TerminalOp::SetForeground(color));
        Ok(())
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.bg = color;
        self.ops.push(TerminalOp::SetBackground(color));
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<(), Self::Error> {
        self.cells.push(PaintedCell {
            col: self.col,
            row: self.row,
            text: text.to_string(),
            fg: self.fg,
            bg: self.bg,
        });
        self.ops.push(TerminalOp::Write(text.to_string()));
        Ok(())
    }
}
