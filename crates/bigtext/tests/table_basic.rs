use std::io::Write;

use bigtext::{GlyphTable, Point, PrinterError, GLYPH_HEIGHT, GLYPH_SPACING};
use pretty_assertions::assert_eq;

// 'a' = {(0,0),(2,0),(0,1)} (width 3), 'b' = {(0,0)} (width 1)
const AB: &str = "ab\n-\n*.*\n*\n.\n.\n.\n.\n*\n.\n.\n.\n.\n.\n";

fn points(table: &GlyphTable, ch: char) -> Vec<Point> {
    table.lookup(ch).points().to_vec()
}

#[test]
fn empty_resource_is_format_error() {
    assert!(matches!(GlyphTable::parse(""), Err(PrinterError::Format(_))));
}

#[test]
fn empty_first_line_is_format_error() {
    assert!(matches!(
        GlyphTable::parse("\nab\n***\n"),
        Err(PrinterError::Format(_))
    ));
}

#[test]
fn parses_points_in_scan_order() {
    let table = GlyphTable::parse(AB).unwrap();
    assert_eq!(
        points(&table, 'a'),
        vec![Point::new(0, 0), Point::new(2, 0), Point::new(0, 1)]
    );
    assert_eq!(table.lookup('a').width(), 3);
    assert_eq!(points(&table, 'b'), vec![Point::new(0, 0)]);
    assert_eq!(table.lookup('b').width(), 1);
}

#[test]
fn blank_lines_do_not_consume_rows() {
    // the marker on the sixth non-empty line still lands on row 5
    let source = "x\n-\n\n*\n\n.\n.\n.\n.\n....*\n";
    let table = GlyphTable::parse(source).unwrap();
    assert_eq!(
        points(&table, 'x'),
        vec![Point::new(0, 0), Point::new(4, 5)]
    );
}

#[test]
fn rows_beyond_glyph_height_are_not_read() {
    let source = "x\n-\n.\n.\n.\n.\n.\n.\n*****\n";
    let table = GlyphTable::parse(source).unwrap();
    assert!(table.lookup('x').is_empty());
}

#[test]
fn duplicate_char_keeps_later_definition() {
    let source = "aa\n-\n*\n.\n.\n.\n.\n.\n.*\n.\n.\n.\n.\n.\n";
    let table = GlyphTable::parse(source).unwrap();
    assert_eq!(points(&table, 'a'), vec![Point::new(1, 0)]);
}

#[test]
fn lookup_miss_yields_empty_glyph() {
    let table = GlyphTable::parse(AB).unwrap();
    let glyph = table.lookup('z');
    assert!(glyph.is_empty());
    assert_eq!(glyph.width(), 0);
    assert_eq!(glyph.advance(), GLYPH_SPACING);
}

#[test]
fn short_block_at_eof_is_best_effort() {
    let table = GlyphTable::parse("ab\n-\n*\n").unwrap();
    assert_eq!(points(&table, 'a'), vec![Point::new(0, 0)]);
    assert!(table.contains('b'));
    assert!(table.lookup('b').is_empty());
}

#[test]
fn all_parsed_points_respect_glyph_height() {
    let table = GlyphTable::parse(AB).unwrap();
    for ch in table.chars() {
        for point in table.lookup(ch).points() {
            assert!(point.row < GLYPH_HEIGHT);
        }
    }
}

#[test]
fn load_missing_file_is_resource_error() {
    let err = GlyphTable::load("/definitely/not/a/glyph/table.txt").unwrap_err();
    assert!(matches!(err, PrinterError::Resource(_)));
}

#[test]
fn load_parses_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(AB.as_bytes()).unwrap();
    let table = GlyphTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(points(&table, 'a'), vec![Point::new(0, 0), Point::new(2, 0), Point::new(0, 1)]);
}

#[test]
fn builtin_covers_lowercase_and_digits() {
    let table = GlyphTable::builtin();
    for ch in ('a'..='z').chain('0'..='9') {
        assert!(table.contains(ch), "missing builtin glyph for {ch:?}");
        let glyph = table.lookup(ch);
        assert!(!glyph.is_empty());
        assert!(glyph.width() >= 1 && glyph.width() <= 5);
        for point in glyph.points() {
            assert!(point.row < GLYPH_HEIGHT);
        }
    }
}

#[test]
fn builtin_misses_resolve_to_empty_glyph() {
    let table = GlyphTable::builtin();
    assert!(!table.contains('A'));
    assert!(table.lookup('A').is_empty());
}
