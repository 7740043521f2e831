use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn pos(offset: u32, line: u32, column: u32) -> Position {
    Position {
        offset,
        line,
        column,
    }
}

#[test]
fn test_advance_plain_text() {
    let mut p = Position::START;
    p.advance("hello");
    assert_eq!(p, pos(5, 1, 6));
}

#[test]
fn test_advance_counts_chars_not_bytes() {
    let mut p = Position::START;
    p.advance("é漢");
    assert_eq!(p, pos(5, 1, 3));
}

#[test]
fn test_advance_line_breaks() {
    assert_eq!(Position::START.advanced("a\nb"), pos(3, 2, 2));
    assert_eq!(Position::START.advanced("a\r\nb"), pos(4, 2, 2));
    assert_eq!(Position::START.advanced("a\rb"), pos(3, 2, 2));
    assert_eq!(Position::START.advanced("\n\n"), pos(2, 3, 1));
    assert_eq!(Position::START.advanced("\r\r\n"), pos(3, 3, 1));
}

#[test]
fn test_table_lines() {
    let source = "one\ntwo\r\nthree\rfour";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.line_start(1), Some(0));
    assert_eq!(table.line_start(2), Some(4));
    assert_eq!(table.line_start(3), Some(9));
    assert_eq!(table.line_start(4), Some(15));
    assert_eq!(table.line_start(0), None);
    assert_eq!(table.line_start(5), None);
}

#[test]
fn test_table_position() {
    let source = "let x\n  = 1;";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, 0), pos(0, 1, 1));
    assert_eq!(table.position(source, 4), pos(4, 1, 5));
    assert_eq!(table.position(source, 8), pos(8, 2, 3));
    // Clamped to the end of input.
    assert_eq!(table.position(source, 99), pos(12, 2, 7));
}

#[test]
fn test_display() {
    assert_eq!(pos(10, 3, 7).to_string(), "3:7");
}

proptest! {
    #[test]
    fn table_agrees_with_advance(
        chunks in proptest::collection::vec("[a-z é]{0,4}|\n|\r\n|\r[a-z]", 0..20)
    ) {
        let source: String = chunks.concat();
        let table = LineOffsetTable::build(&source);
        let mut p = Position::START;
        for chunk in &chunks {
            prop_assert_eq!(table.position(&source, p.offset), p);
            p.advance(chunk);
        }
        prop_assert_eq!(table.position(&source, p.offset), p);
    }
}
