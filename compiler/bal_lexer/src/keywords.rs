//! Reserved keyword lookup.
//!
//! Reserved spellings always win over `Identifier`, whatever the context
//! flags say. `true`/`false` resolve to `BooleanLiteral` and `null` to
//! `NullLiteral`. Query keywords that are only reserved in context live in
//! [`crate::context`].

use bal_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Length-bucketed: identifiers outside the 2-14 byte range, or not
/// starting with an ASCII letter or `_`, are rejected without comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=14).contains(&len) {
        return None;
    }
    let first = bytes[0];
    if !(first.is_ascii_lowercase() || first == b'_') {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "by" => Some(TokenKind::By),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "on" => Some(TokenKind::On),
            _ => None,
        },
        3 => match text {
            "all" => Some(TokenKind::All),
            "any" => Some(TokenKind::TypeAny),
            "but" => Some(TokenKind::But),
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::TypeInt),
            "map" => Some(TokenKind::TypeMap),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "var" => Some(TokenKind::Var),
            "xml" => Some(TokenKind::TypeXml),
            _ => None,
        },
        4 => match text {
            "byte" => Some(TokenKind::TypeByte),
            "else" => Some(TokenKind::Else),
            "fork" => Some(TokenKind::Fork),
            "from" => Some(TokenKind::From),
            "full" => Some(TokenKind::Full),
            "join" => Some(TokenKind::Join),
            "json" => Some(TokenKind::TypeJson),
            "left" => Some(TokenKind::Left),
            "lock" => Some(TokenKind::Lock),
            "null" => Some(TokenKind::NullLiteral),
            "some" => Some(TokenKind::Some),
            "trap" => Some(TokenKind::Trap),
            "true" => Some(TokenKind::BooleanLiteral),
            "type" => Some(TokenKind::Type),
            "wait" => Some(TokenKind::Wait),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "abort" => Some(TokenKind::Abort),
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "check" => Some(TokenKind::Check),
            "const" => Some(TokenKind::Const),
            "error" => Some(TokenKind::TypeError),
            "every" => Some(TokenKind::Every),
            "false" => Some(TokenKind::BooleanLiteral),
            "final" => Some(TokenKind::Final),
            "float" => Some(TokenKind::TypeFloat),
            "flush" => Some(TokenKind::Flush),
            "group" => Some(TokenKind::Group),
            "inner" => Some(TokenKind::Inner),
            "limit" => Some(TokenKind::Limit),
            "match" => Some(TokenKind::Match),
            "order" => Some(TokenKind::Order),
            "outer" => Some(TokenKind::Outer),
            "panic" => Some(TokenKind::Panic),
            "retry" => Some(TokenKind::Retry),
            "right" => Some(TokenKind::Right),
            "start" => Some(TokenKind::Start),
            "table" => Some(TokenKind::TypeTable),
            "throw" => Some(TokenKind::Throw),
            "where" => Some(TokenKind::Where),
            "while" => Some(TokenKind::While),
            "xmlns" => Some(TokenKind::Xmlns),
            _ => None,
        },
        6 => match text {
            "__init" => Some(TokenKind::ObjectInit),
            "client" => Some(TokenKind::Client),
            "extern" => Some(TokenKind::Extern),
            "future" => Some(TokenKind::TypeFuture),
            "having" => Some(TokenKind::Having),
            "import" => Some(TokenKind::Import),
            "object" => Some(TokenKind::Object),
            "output" => Some(TokenKind::Output),
            "public" => Some(TokenKind::Public),
            "record" => Some(TokenKind::Record),
            "remote" => Some(TokenKind::Remote),
            "return" => Some(TokenKind::Return),
            "stream" => Some(TokenKind::TypeStream),
            "string" => Some(TokenKind::TypeString),
            "window" => Some(TokenKind::Window),
            "within" => Some(TokenKind::Within),
            "worker" => Some(TokenKind::Worker),
            _ => None,
        },
        7 => match text {
            "aborted" => Some(TokenKind::Aborted),
            "anydata" => Some(TokenKind::TypeAnydata),
            "boolean" => Some(TokenKind::TypeBoolean),
            "channel" => Some(TokenKind::Channel),
            "decimal" => Some(TokenKind::TypeDecimal),
            "default" => Some(TokenKind::Default),
            "finally" => Some(TokenKind::Finally),
            "foreach" => Some(TokenKind::Foreach),
            "forever" => Some(TokenKind::Forever),
            "onretry" => Some(TokenKind::Onretry),
            "private" => Some(TokenKind::Private),
            "retries" => Some(TokenKind::Retries),
            "returns" => Some(TokenKind::Returns),
            "service" => Some(TokenKind::Service),
            "untaint" => Some(TokenKind::Untaint),
            "version" => Some(TokenKind::Version),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "followed" => Some(TokenKind::Followed),
            "function" => Some(TokenKind::Function),
            "listener" => Some(TokenKind::Listener),
            "resource" => Some(TokenKind::Resource),
            "snapshot" => Some(TokenKind::Snapshot),
            "typedesc" => Some(TokenKind::TypeDesc),
            _ => None,
        },
        9 => match text {
            "ascending" => Some(TokenKind::Ascending),
            "committed" => Some(TokenKind::Committed),
            "parameter" => Some(TokenKind::Parameter),
            _ => None,
        },
        10 => match text {
            "annotation" => Some(TokenKind::Annotation),
            "deprecated" => Some(TokenKind::Deprecated),
            "descending" => Some(TokenKind::Descending),
            "primarykey" => Some(TokenKind::Primarykey),
            _ => None,
        },
        11 => match text {
            "transaction" => Some(TokenKind::Transaction),
            "transformer" => Some(TokenKind::Transformer),
            _ => None,
        },
        14 => match text {
            "unidirectional" => Some(TokenKind::Unidirectional),
            _ => None,
        },
        _ => None,
    }
}
