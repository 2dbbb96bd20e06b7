use anyhow::Result;
use bigtext::{BigTextPrinter, GlyphTable, Printer, PrinterOptions};
use clap::{Parser, Subcommand};

use crate::buffer::BufferTerminal;
use crate::term::AnsiTerminal;
mod buffer;
mod term;

#[derive(Parser)]
#[command(name = "bigtext", about = "Print text as oversized block glyphs")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with a glyph table
    Render {
        #[arg(short, long)]
        text: String,
        /// Glyph table file; the builtin table when omitted
        #[arg(long)]
        table: Option<String>,
        /// Foreground palette index (0-255)
        #[arg(long)]
        fg: Option<u8>,
        /// Background palette index (0-255)
        #[arg(long)]
        bg: Option<u8>,
        /// Character painted into every lit cell
        #[arg(long, default_value = "*")]
        symbol: char,
        /// Draw on the live terminal at the cursor instead of printing a preview
        #[arg(long)]
        direct: bool,
    },
    /// Inspect a glyph table file
    Inspect {
        #[arg(long)]
        table: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render {
            text,
            table,
            fg,
            bg,
            symbol,
            direct,
        } => {
            let options = PrinterOptions {
                foreground: fg,
                background: bg,
                symbol,
            };
            if direct {
                let mut printer = match &table {
                    Some(path) => BigTextPrinter::from_resource(AnsiTerminal::new(), path, options),
                    None => {
                        BigTextPrinter::new(AnsiTerminal::new(), GlyphTable::builtin().clone(), options)
                    }
                };
                printer.write_line(&text)?;
            } else {
                let mut printer = match &table {
                    Some(path) => {
                        BigTextPrinter::from_resource(BufferTerminal::new(), path, options)
                    }
                    None => BigTextPrinter::new(
                        BufferTerminal::new(),
                        GlyphTable::builtin().clone(),
                        options,
                    ),
                };
                printer.write_line(&text)?;
                println!("{}", printer.into_terminal().into_ansi_string());
            }
        }
        Cmd::Inspect { table } => {
            let table_path = table;
            let table = GlyphTable::load(&table_path)?;
            println!("glyph table: {table_path}");
            println!("  characters: {}", table.len());
            let mut chars: Vec<char> = table.chars().collect();
            chars.sort_unstable();
            for ch in chars {
                let glyph = table.lookup(ch);
                println!(
                    "  {ch:?}: {} points, width {}",
                    glyph.points().len(),
                    glyph.width()
                );
            }
        }
    }
    Ok(())
}
