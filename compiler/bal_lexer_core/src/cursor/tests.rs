use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn current_and_peeks() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peeks_past_end_read_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Matching ===

#[test]
fn starts_with_and_eat_str() {
    let buf = SourceBuffer::new("<!-- x -->");
    let mut cursor = buf.cursor();
    assert!(cursor.starts_with(b"<!--"));
    assert!(!cursor.starts_with(b"<![CDATA["));
    assert!(cursor.eat_str(b"<!--"));
    assert_eq!(cursor.pos(), 4);
    assert!(!cursor.eat_str(b"-->"));
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn starts_with_never_reads_padding() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor();
    assert!(!cursor.starts_with(b"ab\0"));
}

#[test]
fn eat_single_byte() {
    let buf = SourceBuffer::new("{}");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat(b'}'));
    assert!(cursor.eat(b'{'));
    assert!(cursor.eat(b'}'));
    assert!(!cursor.eat(0));
}

#[test]
fn count_run_does_not_consume() {
    let buf = SourceBuffer::new("```code");
    let cursor = buf.cursor();
    assert_eq!(cursor.count_run(b'`'), 3);
    assert_eq!(cursor.pos(), 0);
}

// === UTF-8 ===

#[test]
fn advance_char_multibyte() {
    let buf = SourceBuffer::new("é漢😀x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_at_eof_is_noop() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

// === Bulk skipping ===

#[test]
fn eat_until_newline_stops_at_either_break() {
    let buf = SourceBuffer::new("// note\r\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let buf = SourceBuffer::new("// note");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_any_finds_earliest_needle() {
    let buf = SourceBuffer::new("text & more <tag>");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_any(b"<&`$"), b'&');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_any_uses_needles_past_the_first_three() {
    let buf = SourceBuffer::new("abc$def");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_any(b"<&`$"), b'$');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_any_without_match_moves_to_eof() {
    let buf = SourceBuffer::new("plain");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_any(b"<&"), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_includes_form_feed() {
    let buf = SourceBuffer::new(" \t\x0Cx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

proptest! {
    #[test]
    fn skip_to_any_matches_linear_scan(
        text in "[a-z<&`${}\n]{0,64}",
        needles in proptest::sample::subsequence(b"<&`${}\n".to_vec(), 1..7)
    ) {
        let buf = SourceBuffer::new(&text);
        let mut cursor = buf.cursor();
        let found = cursor.skip_to_any(&needles);
        let expected = text.bytes().position(|b| needles.contains(&b));
        match expected {
            Some(i) => {
                prop_assert_eq!(cursor.pos() as usize, i);
                prop_assert_eq!(found, text.as_bytes()[i]);
            }
            None => {
                prop_assert!(cursor.is_eof());
                prop_assert_eq!(found, 0);
            }
        }
    }
}
