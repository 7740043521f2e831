use super::*;
use pretty_assertions::assert_eq;

fn resolve_all(words: &[&str]) -> (Vec<TokenKind>, ContextFlags) {
    let mut flags = ContextFlags::empty();
    let kinds = words.iter().map(|w| resolve_word(w, &mut flags)).collect();
    (kinds, flags)
}

#[test]
fn table_rows_are_unique_soft_or_reserved_keywords() {
    for (i, row) in SOFT_KEYWORDS.iter().enumerate() {
        assert!(
            SOFT_KEYWORDS[..i].iter().all(|r| r.spelling != row.spelling),
            "duplicate row {}",
            row.spelling
        );
        assert_eq!(row.kind.keyword_str(), Some(row.spelling));
        if row.guard.is_none() {
            assert!(row.kind.is_reserved_keyword(), "{}", row.spelling);
        } else {
            assert!(row.kind.is_soft_keyword(), "{}", row.spelling);
            assert_eq!(keywords::lookup(row.spelling), None);
        }
    }
}

#[test]
fn guarded_rows_clear_their_own_guard() {
    for row in SOFT_KEYWORDS.iter().filter(|r| r.guard.is_some()) {
        assert_eq!(row.guard, Some(row.clear), "{}", row.spelling);
        assert!(row.set.is_empty(), "{}", row.spelling);
    }
}

#[test]
fn from_opens_three_guards() {
    let mut flags = ContextFlags::empty();
    assert_eq!(resolve_word("from", &mut flags), TokenKind::From);
    assert_eq!(
        flags,
        ContextFlags::IN_TABLE_QUERY
            | ContextFlags::IN_INSERT_QUERY
            | ContextFlags::IN_OUTPUT_RATE_LIMIT
    );
}

#[test]
fn select_is_keyword_only_after_from() {
    let (kinds, flags) = resolve_all(&["select"]);
    assert_eq!(kinds, vec![TokenKind::Identifier]);
    assert!(flags.is_empty());

    let (kinds, flags) = resolve_all(&["from", "table", "select", "select"]);
    assert_eq!(
        kinds,
        vec![
            TokenKind::From,
            TokenKind::TypeTable,
            TokenKind::Select,
            TokenKind::Identifier,
        ]
    );
    assert!(!flags.contains(ContextFlags::IN_TABLE_QUERY));
}

#[test]
fn events_first_last_follow_their_guards() {
    let (kinds, _) = resolve_all(&["events", "from", "events", "events", "last", "first"]);
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::From,
            TokenKind::Events,
            TokenKind::Identifier,
            TokenKind::Last,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn time_units_need_a_time_scale_opener() {
    for opener in ["for", "within", "output"] {
        let (kinds, flags) = resolve_all(&["minutes", opener, "minutes", "hours"]);
        assert_eq!(kinds[0], TokenKind::Identifier, "{opener}");
        assert!(kinds[1].is_reserved_keyword(), "{opener}");
        assert_eq!(kinds[2], TokenKind::Minutes, "{opener}");
        assert_eq!(kinds[3], TokenKind::Identifier, "{opener}");
        assert!(!flags.contains(ContextFlags::IN_TIME_SCALE_QUERY), "{opener}");
    }
}

#[test]
fn every_time_unit_spelling() {
    for unit in [
        "second", "minute", "hour", "day", "month", "year", "seconds", "minutes", "hours",
        "days", "months", "years",
    ] {
        let mut flags = ContextFlags::IN_TIME_SCALE_QUERY;
        let kind = resolve_word(unit, &mut flags);
        assert!(kind.is_soft_keyword(), "{unit}");
        assert_eq!(kind.keyword_str(), Some(unit));
        assert!(flags.is_empty(), "{unit}");
    }
}

#[test]
fn reserved_words_ignore_flags() {
    let mut flags = ContextFlags::all();
    assert_eq!(resolve_word("int", &mut flags), TokenKind::TypeInt);
    assert_eq!(flags, ContextFlags::all());
    let mut flags = ContextFlags::empty();
    assert_eq!(resolve_word("while", &mut flags), TokenKind::While);
    assert!(flags.is_empty());
}

#[test]
fn plain_identifiers_leave_flags_alone() {
    let mut flags = ContextFlags::IN_TABLE_QUERY;
    assert_eq!(resolve_word("selector", &mut flags), TokenKind::Identifier);
    assert_eq!(flags, ContextFlags::IN_TABLE_QUERY);
}
