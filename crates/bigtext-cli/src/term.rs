use std::io::{Stdout, Write};

use bigtext::{Color, Terminal};
use crossterm::cursor;
use crossterm::execute;
use crossterm::style::{Print, SetBackgroundColor, SetForegroundColor};

/// Live terminal on stdout, addressed with ANSI escapes via crossterm.
///
/// Terminals cannot be queried for their current colors, so the last set
/// values are shadow-tracked here and assumed to start at the common
/// white-on-black default.
pub struct AnsiTerminal {
    out: Stdout,
    fg: Color,
    bg: Color,
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
            fg: 7,
            bg: 0,
        }
    }
}

impl Terminal for AnsiTerminal {
    type Error = std::io::Error;

    fn cursor(&mut self) -> std::io::Result<(u16, u16)> {
        // the query reply races against unflushed output
        self.out.flush()?;
        cursor::position()
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> std::io::Result<()> {
        execute!(self.out, cursor::MoveTo(col, row))
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn set_foreground(&mut self, color: Color) -> std::io::Result<()> {
        self.fg = color;
        execute!(
            self.out,
            SetForegroundColor(crossterm::style::Color::AnsiValue(color))
        )
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_background(&mut self, color: Color) -> std::io::Result<()> {
        self.bg = color;
        execute!(
            self.out,
            SetBackgroundColor(crossterm::style::Color::AnsiValue(color))
        )
    }

    fn write_raw(&mut self, text: &str) -> std::io::Result<()> {
        execute!(self.out, Print(text))
    }
}
