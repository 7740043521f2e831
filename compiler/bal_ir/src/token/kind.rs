//! Token kinds for Ballerina source.

use std::fmt;

/// Token kinds produced by the lexer.
///
/// Fieldless and `Copy`: the text of a token lives in [`super::Token`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Reserved keywords
    Import,
    As,
    Public,
    Private,
    Extern,
    Final,
    Service,
    Resource,
    Function,
    Object,
    Record,
    Annotation,
    Parameter,
    Transformer,
    Worker,
    Listener,
    Remote,
    Xmlns,
    Returns,
    Version,
    Deprecated,
    Channel,
    Abstract,
    Client,
    Const,
    From,
    On,
    Group,
    By,
    Having,
    Order,
    Where,
    Followed,
    For,
    Window,
    Every,
    Within,
    Snapshot,
    Inner,
    Outer,
    Right,
    Left,
    Full,
    Unidirectional,
    Forever,
    Limit,
    Ascending,
    Descending,
    Output,
    TypeInt,
    TypeByte,
    TypeFloat,
    TypeDecimal,
    TypeBoolean,
    TypeString,
    TypeError,
    TypeMap,
    TypeJson,
    TypeXml,
    TypeTable,
    TypeStream,
    TypeAny,
    TypeDesc,
    Type,
    TypeFuture,
    TypeAnydata,
    Var,
    New,
    ObjectInit, // __init
    If,
    Match,
    Else,
    Foreach,
    While,
    Continue,
    Break,
    Fork,
    Join,
    Some,
    All,
    Try,
    Catch,
    Finally,
    Throw,
    Panic,
    Trap,
    Return,
    Transaction,
    Abort,
    Retry,
    Onretry,
    Retries,
    Committed,
    Aborted,
    With,
    In,
    Lock,
    Untaint,
    Start,
    But,
    Check,
    Primarykey,
    Is,
    Flush,
    Wait,
    Default,

    // Soft keywords, reserved only inside query syntax
    Select,
    Events,
    Last,
    First,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,

    // Operators and punctuation
    Semicolon, // ;
    Colon, // :
    Dot, // .
    Comma, // ,
    LeftBrace, // {
    RightBrace, // }
    LeftParen, // (
    RightParen, // )
    LeftBracket, // [
    RightBracket, // ]
    QuestionMark, // ?
    Assign, // =
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
    Not, // !
    Equal, // ==
    NotEqual, // !=
    Gt, // >
    Lt, // <
    GtEq, // >=
    LtEq, // <=
    And, // &&
    Or, // ||
    RefEqual, // ===
    RefNotEqual, // !==
    BitAnd, // &
    BitXor, // ^
    BitComplement, // ~
    RArrow, // ->
    LArrow, // <-
    At, // @
    Backtick, // `
    Range, // ..
    Ellipsis, // ...
    Pipe, // |
    EqualGt, // =>
    Elvis, // ?:
    SyncRArrow, // ->>
    CompoundAdd, // +=
    CompoundSub, // -=
    CompoundMul, // *=
    CompoundDiv, // /=
    CompoundBitAnd, // &=
    CompoundBitOr, // |=
    CompoundBitXor, // ^=
    CompoundLeftShift, // <<=
    CompoundRightShift, // >>=
    CompoundLogicalShift, // >>>=
    HalfOpenRange, // ..<

    // Literals
    /// Decimal integer: `0`, `42`
    DecimalIntegerLiteral,
    /// Hex integer: `0xFF`
    HexIntegerLiteral,
    /// Decimal float: `1.5`, `.5e3`, `2e10`
    DecimalFloatingPointLiteral,
    /// Hex float: `0x1.8p3`
    HexFloatingPointLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// Double-quoted string with escapes checked
    QuotedStringLiteral,
    /// `base16 `aa bb``
    Base16BlobLiteral,
    /// `base64 `QUJD``
    Base64BlobLiteral,
    NullLiteral,
    /// Plain or quoted (`^"a b"`) identifier
    Identifier,

    // Trivia
    Whitespace,
    /// `\n`, `\r\n` or a lone `\r`
    NewLine,
    /// `// ...` up to (not including) the line break
    LineComment,

    // String templates
    /// `string` followed by a backtick
    StringTemplateStart,
    StringTemplateText,
    StringTemplateEnd,

    // XML literals
    /// `xml` followed by a backtick
    XmlLiteralStart,
    XmlLiteralEnd,
    XmlText,
    XmlCdata,
    /// `<!DOCTYPE ...>` and other `<!` declarations
    XmlDtd,
    /// `&amp;`
    XmlEntityRef,
    /// `&#38;` or `&#x26;`
    XmlCharRef,
    XmlTagOpen,
    XmlTagOpenSlash,
    XmlTagClose,
    XmlTagSlashClose,
    /// `<?target` plus the following whitespace
    XmlTagSpecialOpen,
    XmlTagSpecialClose,
    XmlQname,
    XmlQnameSeparator,
    XmlTagEquals,
    XmlSlash,
    XmlDoubleQuoteStart,
    XmlSingleQuoteStart,
    XmlQuotedStringText,
    XmlQuoteEnd,
    XmlPiText,
    XmlCommentStart,
    XmlCommentText,
    XmlCommentEnd,

    // Interpolation
    InterpolationStart,
    /// The `}` that closes an interpolation
    InterpolationEnd,

    // Documentation
    /// `#` at the start of a documentation line
    DocumentationLineStart,
    /// `# +`
    ParameterDocumentationStart,
    /// `# + return -`
    ReturnParameterDocumentationStart,
    DocumentationText,
    /// Reference type word before a backtick: `function `
    DefinitionReference,
    ParameterName,
    DescriptionSeparator,
    DocumentationLineEnd,
    DocBacktickStart,
    DocBacktickContent,
    DocBacktickEnd,

    // Deprecated templates
    /// `deprecated` followed by `{`
    DeprecatedTemplateStart,
    DeprecatedTemplateText,
    DeprecatedTemplateEnd,
    InlineCodeStart,
    InlineCodeContent,
    InlineCodeEnd,

    // Special
    /// Input no rule in the active mode accepts
    Error,
    Eof,
}

impl TokenKind {
    /// Spelling of a reserved or soft keyword.
    ///
    /// Returns `None` for everything else, including the literal
    /// spellings `true`, `false` and `null`.
    #[expect(
        clippy::too_many_lines,
        reason = "exhaustive keyword → spelling dispatch"
    )]
    pub const fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::Import => Some("import"),
            TokenKind::As => Some("as"),
            TokenKind::Public => Some("public"),
            TokenKind::Private => Some("private"),
            TokenKind::Extern => Some("extern"),
            TokenKind::Final => Some("final"),
            TokenKind::Service => Some("service"),
            TokenKind::Resource => Some("resource"),
            TokenKind::Function => Some("function"),
            TokenKind::Object => Some("object"),
            TokenKind::Record => Some("record"),
            TokenKind::Annotation => Some("annotation"),
            TokenKind::Parameter => Some("parameter"),
            TokenKind::Transformer => Some("transformer"),
            TokenKind::Worker => Some("worker"),
            TokenKind::Listener => Some("listener"),
            TokenKind::Remote => Some("remote"),
            TokenKind::Xmlns => Some("xmlns"),
            TokenKind::Returns => Some("returns"),
            TokenKind::Version => Some("version"),
            TokenKind::Deprecated => Some("deprecated"),
            TokenKind::Channel => Some("channel"),
            TokenKind::Abstract => Some("abstract"),
            TokenKind::Client => Some("client"),
            TokenKind::Const => Some("const"),
            TokenKind::From => Some("from"),
            TokenKind::On => Some("on"),
            TokenKind::Group => Some("group"),
            TokenKind::By => Some("by"),
            TokenKind::Having => Some("having"),
            TokenKind::Order => Some("order"),
            TokenKind::Where => Some("where"),
            TokenKind::Followed => Some("followed"),
            TokenKind::For => Some("for"),
            TokenKind::Window => Some("window"),
            TokenKind::Every => Some("every"),
            TokenKind::Within => Some("within"),
            TokenKind::Snapshot => Some("snapshot"),
            TokenKind::Inner => Some("inner"),
            TokenKind::Outer => Some("outer"),
            TokenKind::Right => Some("right"),
            TokenKind::Left => Some("left"),
            TokenKind::Full => Some("full"),
            TokenKind::Unidirectional => Some("unidirectional"),
            TokenKind::Forever => Some("forever"),
            TokenKind::Limit => Some("limit"),
            TokenKind::Ascending => Some("ascending"),
            TokenKind::Descending => Some("descending"),
            TokenKind::Output => Some("output"),
            TokenKind::TypeInt => Some("int"),
            TokenKind::TypeByte => Some("byte"),
            TokenKind::TypeFloat => Some("float"),
            TokenKind::TypeDecimal => Some("decimal"),
            TokenKind::TypeBoolean => Some("boolean"),
            TokenKind::TypeString => Some("string"),
            TokenKind::TypeError => Some("error"),
            TokenKind::TypeMap => Some("map"),
            TokenKind::TypeJson => Some("json"),
            TokenKind::TypeXml => Some("xml"),
            TokenKind::TypeTable => Some("table"),
            TokenKind::TypeStream => Some("stream"),
            TokenKind::TypeAny => Some("any"),
            TokenKind::TypeDesc => Some("typedesc"),
            TokenKind::Type => Some("type"),
            TokenKind::TypeFuture => Some("future"),
            TokenKind::TypeAnydata => Some("anydata"),
            TokenKind::Var => Some("var"),
            TokenKind::New => Some("new"),
            TokenKind::ObjectInit => Some("__init"),
            TokenKind::If => Some("if"),
            TokenKind::Match => Some("match"),
            TokenKind::Else => Some("else"),
            TokenKind::Foreach => Some("foreach"),
            TokenKind::While => Some("while"),
            TokenKind::Continue => Some("continue"),
            TokenKind::Break => Some("break"),
            TokenKind::Fork => Some("fork"),
            TokenKind::Join => Some("join"),
            TokenKind::Some => Some("some"),
            TokenKind::All => Some("all"),
            TokenKind::Try => Some("try"),
            TokenKind::Catch => Some("catch"),
            TokenKind::Finally => Some("finally"),
            TokenKind::Throw => Some("throw"),
            TokenKind::Panic => Some("panic"),
            TokenKind::Trap => Some("trap"),
            TokenKind::Return => Some("return"),
            TokenKind::Transaction => Some("transaction"),
            TokenKind::Abort => Some("abort"),
            TokenKind::Retry => Some("retry"),
            TokenKind::Onretry => Some("onretry"),
            TokenKind::Retries => Some("retries"),
            TokenKind::Committed => Some("committed"),
            TokenKind::Aborted => Some("aborted"),
            TokenKind::With => Some("with"),
            TokenKind::In => Some("in"),
            TokenKind::Lock => Some("lock"),
            TokenKind::Untaint => Some("untaint"),
            TokenKind::Start => Some("start"),
            TokenKind::But => Some("but"),
            TokenKind::Check => Some("check"),
            TokenKind::Primarykey => Some("primarykey"),
            TokenKind::Is => Some("is"),
            TokenKind::Flush => Some("flush"),
            TokenKind::Wait => Some("wait"),
            TokenKind::Default => Some("default"),
            TokenKind::Select => Some("select"),
            TokenKind::Events => Some("events"),
            TokenKind::Last => Some("last"),
            TokenKind::First => Some("first"),
            TokenKind::Second => Some("second"),
            TokenKind::Minute => Some("minute"),
            TokenKind::Hour => Some("hour"),
            TokenKind::Day => Some("day"),
            TokenKind::Month => Some("month"),
            TokenKind::Year => Some("year"),
            TokenKind::Seconds => Some("seconds"),
            TokenKind::Minutes => Some("minutes"),
            TokenKind::Hours => Some("hours"),
            TokenKind::Days => Some("days"),
            TokenKind::Months => Some("months"),
            TokenKind::Years => Some("years"),
            _ => None,
        }
    }

    /// Fixed spelling of an operator or punctuation token.
    pub const fn operator_str(self) -> Option<&'static str> {
        match self {
            TokenKind::Semicolon => Some(";"),
            TokenKind::Colon => Some(":"),
            TokenKind::Dot => Some("."),
            TokenKind::Comma => Some(","),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::QuestionMark => Some("?"),
            TokenKind::Assign => Some("="),
            TokenKind::Add => Some("+"),
            TokenKind::Sub => Some("-"),
            TokenKind::Mul => Some("*"),
            TokenKind::Div => Some("/"),
            TokenKind::Mod => Some("%"),
            TokenKind::Not => Some("!"),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::Gt => Some(">"),
            TokenKind::Lt => Some("<"),
            TokenKind::GtEq => Some(">="),
            TokenKind::LtEq => Some("<="),
            TokenKind::And => Some("&&"),
            TokenKind::Or => Some("||"),
            TokenKind::RefEqual => Some("==="),
            TokenKind::RefNotEqual => Some("!=="),
            TokenKind::BitAnd => Some("&"),
            TokenKind::BitXor => Some("^"),
            TokenKind::BitComplement => Some("~"),
            TokenKind::RArrow => Some("->"),
            TokenKind::LArrow => Some("<-"),
            TokenKind::At => Some("@"),
            TokenKind::Backtick => Some("`"),
            TokenKind::Range => Some(".."),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::Pipe => Some("|"),
            TokenKind::EqualGt => Some("=>"),
            TokenKind::Elvis => Some("?:"),
            TokenKind::SyncRArrow => Some("->>"),
            TokenKind::CompoundAdd => Some("+="),
            TokenKind::CompoundSub => Some("-="),
            TokenKind::CompoundMul => Some("*="),
            TokenKind::CompoundDiv => Some("/="),
            TokenKind::CompoundBitAnd => Some("&="),
            TokenKind::CompoundBitOr => Some("|="),
            TokenKind::CompoundBitXor => Some("^="),
            TokenKind::CompoundLeftShift => Some("<<="),
            TokenKind::CompoundRightShift => Some(">>="),
            TokenKind::CompoundLogicalShift => Some(">>>="),
            TokenKind::HalfOpenRange => Some("..<"),
            _ => None,
        }
    }

    /// Reserved keywords are always keywords, whatever the context flags say.
    #[inline]
    pub const fn is_reserved_keyword(self) -> bool {
        self as u8 <= TokenKind::Default as u8
    }

    /// Query keywords that are identifiers outside their guard.
    #[inline]
    pub const fn is_soft_keyword(self) -> bool {
        let i = self as u8;
        i >= TokenKind::Select as u8 && i <= TokenKind::Years as u8
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        let i = self as u8;
        i >= TokenKind::Semicolon as u8 && i <= TokenKind::HalfOpenRange as u8
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        let i = self as u8;
        i >= TokenKind::DecimalIntegerLiteral as u8 && i <= TokenKind::NullLiteral as u8
    }

    /// Whitespace, line breaks and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::NewLine | TokenKind::LineComment
        )
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        if let Some(s) = self.keyword_str() {
            return s;
        }
        if let Some(s) = self.operator_str() {
            return s;
        }
        match self {
            TokenKind::DecimalIntegerLiteral => "integer literal",
            TokenKind::HexIntegerLiteral => "hex integer literal",
            TokenKind::DecimalFloatingPointLiteral => "float literal",
            TokenKind::HexFloatingPointLiteral => "hex float literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::QuotedStringLiteral => "string literal",
            TokenKind::Base16BlobLiteral => "base16 blob literal",
            TokenKind::Base64BlobLiteral => "base64 blob literal",
            TokenKind::NullLiteral => "null",
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::NewLine => "newline",
            TokenKind::LineComment => "comment",
            TokenKind::StringTemplateStart => "string template start",
            TokenKind::StringTemplateText => "string template text",
            TokenKind::StringTemplateEnd => "string template end",
            TokenKind::XmlLiteralStart => "XML literal start",
            TokenKind::XmlLiteralEnd => "XML literal end",
            TokenKind::XmlText => "XML text",
            TokenKind::XmlCdata => "CDATA section",
            TokenKind::XmlDtd => "DTD",
            TokenKind::XmlEntityRef => "entity reference",
            TokenKind::XmlCharRef => "character reference",
            TokenKind::XmlTagOpen => "`<`",
            TokenKind::XmlTagOpenSlash => "`</`",
            TokenKind::XmlTagClose => "`>`",
            TokenKind::XmlTagSlashClose => "`/>`",
            TokenKind::XmlTagSpecialOpen => "`<?`",
            TokenKind::XmlTagSpecialClose => "`?>`",
            TokenKind::XmlQname => "XML name",
            TokenKind::XmlQnameSeparator => "`:`",
            TokenKind::XmlTagEquals => "`=`",
            TokenKind::XmlSlash => "`/`",
            TokenKind::XmlDoubleQuoteStart => "opening `\"`",
            TokenKind::XmlSingleQuoteStart => "opening `'`",
            TokenKind::XmlQuotedStringText => "XML attribute text",
            TokenKind::XmlQuoteEnd => "closing quote",
            TokenKind::XmlPiText => "processing instruction text",
            TokenKind::XmlCommentStart => "`<!--`",
            TokenKind::XmlCommentText => "XML comment text",
            TokenKind::XmlCommentEnd => "`-->`",
            TokenKind::InterpolationStart => "`${`",
            TokenKind::InterpolationEnd => "interpolation end",
            TokenKind::DocumentationLineStart => "documentation start",
            TokenKind::ParameterDocumentationStart => "parameter documentation",
            TokenKind::ReturnParameterDocumentationStart => "return documentation",
            TokenKind::DocumentationText => "documentation text",
            TokenKind::DefinitionReference => "definition reference",
            TokenKind::ParameterName => "parameter name",
            TokenKind::DescriptionSeparator => "`-`",
            TokenKind::DocumentationLineEnd => "end of documentation line",
            TokenKind::DocBacktickStart => "code span start",
            TokenKind::DocBacktickContent => "code span content",
            TokenKind::DocBacktickEnd => "code span end",
            TokenKind::DeprecatedTemplateStart => "deprecated template start",
            TokenKind::DeprecatedTemplateText => "deprecated text",
            TokenKind::DeprecatedTemplateEnd => "deprecated template end",
            TokenKind::InlineCodeStart => "inline code start",
            TokenKind::InlineCodeContent => "inline code",
            TokenKind::InlineCodeEnd => "inline code end",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
            _ => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
