use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = LexerConfig::default();
    assert_eq!(config.error_policy, ErrorPolicy::Recover);
    assert_eq!(config.max_nesting, 256);
}

#[test]
fn builders() {
    let config = LexerConfig::default().halting().with_max_nesting(8);
    assert_eq!(
        config,
        LexerConfig {
            error_policy: ErrorPolicy::Halt,
            max_nesting: 8,
        }
    );
}

#[test]
fn max_nesting_never_drops_below_one() {
    assert_eq!(LexerConfig::default().with_max_nesting(0).max_nesting, 1);
}
