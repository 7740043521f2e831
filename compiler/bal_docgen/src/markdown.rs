//! Documentation blocks from the token stream.
//!
//! A block is the run of `#` lines directly before a definition. Plain lines
//! form the description, `# + name - text` lines document parameters and
//! `# + return - text` documents the return value. Code spans and definition
//! references are kept verbatim, backticks included.

use bal_ir::{Token, TokenKind};

use crate::model::{FunctionDoc, ParameterDoc};

/// The documentation lines attached to one definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub description: String,
    pub parameters: Vec<ParameterDoc>,
    pub return_description: Option<String>,
}

#[derive(Copy, Clone)]
enum Target {
    Description,
    Parameter,
    Return,
}

impl DocBlock {
    /// Collect documentation tokens. Tokens of other kinds are ignored.
    pub fn from_tokens<'src>(tokens: impl IntoIterator<Item = Token<'src>>) -> Self {
        let mut block = DocBlock::default();
        let mut target = Target::Description;

        for token in tokens {
            match token.kind {
                TokenKind::DocumentationLineStart => target = Target::Description,
                TokenKind::ParameterDocumentationStart => target = Target::Parameter,
                TokenKind::ReturnParameterDocumentationStart => {
                    target = Target::Return;
                    block.return_description.get_or_insert_with(String::new);
                }
                TokenKind::ParameterName => block.parameters.push(ParameterDoc {
                    name: token.text.to_owned(),
                    description: String::new(),
                }),
                TokenKind::DocumentationText
                | TokenKind::DefinitionReference
                | TokenKind::DocBacktickStart
                | TokenKind::DocBacktickContent
                | TokenKind::DocBacktickEnd => {
                    if let Some(text) = block.text_mut(target) {
                        text.push_str(token.text);
                    }
                }
                TokenKind::DocumentationLineEnd => {
                    if let Some(text) = block.text_mut(target) {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }

        block.trim();
        block
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.parameters.is_empty()
            && self.return_description.is_none()
    }

    /// Attach the block to a function named `name`.
    pub fn into_function(self, name: impl Into<String>) -> FunctionDoc {
        FunctionDoc::new(
            name,
            self.description,
            self.parameters,
            self.return_description,
        )
    }

    fn text_mut(&mut self, target: Target) -> Option<&mut String> {
        match target {
            Target::Description => Some(&mut self.description),
            Target::Parameter => self.parameters.last_mut().map(|p| &mut p.description),
            Target::Return => self.return_description.as_mut(),
        }
    }

    fn trim(&mut self) {
        trim_in_place(&mut self.description);
        for parameter in &mut self.parameters {
            trim_in_place(&mut parameter.description);
        }
        if let Some(text) = &mut self.return_description {
            trim_in_place(text);
        }
    }
}

fn trim_in_place(text: &mut String) {
    let trimmed = text.trim();
    if trimmed.len() != text.len() {
        *text = trimmed.to_owned();
    }
}

/// Documented functions in a token stream: each `function name` preceded
/// directly by documentation lines.
///
/// Expects significant tokens only. A trivia token between a block and its
/// `function` detaches the block.
pub fn document_functions<'src>(
    tokens: impl IntoIterator<Item = Token<'src>>,
) -> Vec<FunctionDoc> {
    let mut docs = Vec::new();
    let mut pending: Vec<Token<'src>> = Vec::new();
    let mut in_block = false;
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if is_documentation(token.kind) {
            if !in_block {
                pending.clear();
                in_block = true;
            }
            pending.push(token);
            continue;
        }
        in_block = false;

        // Qualifiers may sit between the block and `function`.
        if matches!(
            token.kind,
            TokenKind::Public
                | TokenKind::Private
                | TokenKind::Remote
                | TokenKind::Resource
                | TokenKind::Extern
        ) {
            continue;
        }
        if token.kind == TokenKind::Function && !pending.is_empty() {
            if let Some(name) = tokens.next_if(|next| next.kind == TokenKind::Identifier) {
                docs.push(DocBlock::from_tokens(pending.drain(..)).into_function(name.text));
                continue;
            }
        }
        pending.clear();
    }
    docs
}

fn is_documentation(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::DocumentationLineStart
            | TokenKind::ParameterDocumentationStart
            | TokenKind::ReturnParameterDocumentationStart
            | TokenKind::DocumentationText
            | TokenKind::DefinitionReference
            | TokenKind::ParameterName
            | TokenKind::DescriptionSeparator
            | TokenKind::DocumentationLineEnd
            | TokenKind::DocBacktickStart
            | TokenKind::DocBacktickContent
            | TokenKind::DocBacktickEnd
    )
}
