use std::convert::Infallible;

use bigtext::{BigTextPrinter, Color, GlyphTable, Printer, PrinterOptions, Terminal};

/// Minimal in-memory screen that collects painted cells and prints them.
struct Screen {
    lines: Vec<Vec<char>>,
    col: u16,
    row: u16,
    fg: Color,
    bg: Color,
}

impl Screen {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            col: 0,
            row: 0,
            fg: 7,
            bg: 0,
        }
    }

    fn print(&self) {
        for line in &self.lines {
            println!("{}", line.iter().collect::<String>());
        }
    }
}

impl Terminal for Screen {
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
            let (col, row) = (self.col as usize, self.row as usize);
            while self.lines.len() <= row {
                self.lines.push(Vec::new());
            }
            while self.lines[row].len() <= col {
                self.lines[row].push(' ');
            }
            self.lines[row][col] = ch;
            self.col += 1;
        }
        Ok(())
    }
}

fn main() {
    let table = GlyphTable::builtin().clone();
    let mut printer = BigTextPrinter::new(Screen::new(), table, PrinterOptions::default());
    printer.write_line("big").unwrap();
    printer.write_line("text").unwrap();
    printer.into_terminal().print();
}
