use std::convert::Infallible;

use bigtext::{Color, Terminal};

const DEFAULT_FG: Color = 7;
const DEFAULT_BG: Color = 0;

#[derive(Clone, Copy, Debug)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: DEFAULT_FG,
    bg: DEFAULT_BG,
};

/// In-memory terminal: paints into a growable grid instead of a live
/// screen, for previewing output as a plain string with ANSI colors.
pub struct BufferTerminal {
    lines: Vec<Vec<Cell>>,
    col: u16,
    row: u16,
    fg: Color,
    bg: Color,
}

impl BufferTerminal {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            col: 0,
            row: 0,
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }

    fn put(&mut self, col: u16, row: u16, ch: char) {
        let (col, row) = (col as usize, row as usize);
        while self.lines.len() <= row {
            self.lines.push(Vec::new());
        }
        let line = &mut self.lines[row];
        while line.len() <= col {
            line.push(BLANK);
        }
        line[col] = Cell {
            ch,
            fg: self.fg,
            bg: self.bg,
        };
    }

    pub fn into_ansi_string(self) -> String {
        let mut out = String::new();
        for (li, line) in self.lines.iter().enumerate() {
            if li > 0 {
                out.push('\n');
            }
            for cell in line {
                if (cell.fg, cell.bg) == (DEFAULT_FG, DEFAULT_BG) {
                    out.push(cell.ch);
                } else {
                    out.push_str(&format!(
                        "\x1B[38;5;{}m\x1B[48;5;{}m{}",
                        cell.fg, cell.bg, cell.ch
                    ));
                }
            }
            out.push_str("\x1B[0m");
        }
        out
    }
}

impl Terminal for BufferTerminal {
    type Error = Infallible;

    fn cursor(&mut self) -> Result<(u16, u16), Self::Error> {
        Ok((self.col, self.row))
    }

    fn set_cursor(&mut self, col: u16, row: u16) -> Result<(), Self::Error> {
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn set_foreground(&mut self, color: Color) -> Result<(), Self::Error> {
        self.fg = color;
        Ok(())
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.bg = color;
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<(), Self::Error> {
        for ch in text.chars() {
            self.put(self.col, self.row, ch);
            self.col += 1;
        }
        Ok(())
    }
}
