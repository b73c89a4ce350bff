use super::{utility::is_identifier, Span};
use crate::{
    error::{Diagnostic, LexicalErrorMessage},
    policy, ErrorContainer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Number,
    String,
    Unknown,
}

impl TokenKind {
    /// Categories listed in the token section of the report.
    pub const LISTED: [Self; 5] = [
        Self::Keyword,
        Self::Identifier,
        Self::Operator,
        Self::Number,
        Self::String,
    ];

    pub const ALL: [Self; 6] = [
        Self::Keyword,
        Self::Identifier,
        Self::Operator,
        Self::Number,
        Self::String,
        Self::Unknown,
    ];

    /// Classifies a word that is neither a string nor an operator.
    pub fn classify(word: &str) -> Self {
        if policy::is_reserved(word) {
            Self::Keyword
        } else if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            Self::Number
        } else if is_identifier(word) {
            Self::Identifier
        } else {
            Self::Unknown
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Keyword => "Keywords",
            Self::Identifier => "Identifiers",
            Self::Operator => "Operators",
            Self::Number => "Numbers",
            Self::String => "Strings",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the source text.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub(super) fn from_span(kind: TokenKind, span: Span) -> Self {
        Self::new(
            kind,
            *span.fragment(),
            span.location_line() as usize,
            span.get_utf8_column(),
        )
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

impl ErrorContainer for Token {
    fn errors(&self) -> Vec<Diagnostic> {
        match self.kind {
            TokenKind::Unknown => vec![Diagnostic::lexical(
                self.line,
                LexicalErrorMessage::UnrecognizedToken(self.text.clone()),
            )],
            _ => Vec::new(),
        }
    }
}

impl ErrorContainer for [Token] {
    fn errors(&self) -> Vec<Diagnostic> {
        self.iter().flat_map(|token| token.errors()).collect()
    }
}

impl ErrorContainer for Vec<Token> {
    fn errors(&self) -> Vec<Diagnostic> {
        self.as_slice().errors()
    }
}

pub trait TokenList {
    /// Tokens produced by the given 1-based line.
    fn on_line(&self, line: usize) -> &[Token];
}

impl TokenList for [Token] {
    fn on_line(&self, line: usize) -> &[Token] {
        // tokens are ordered by line
        let start = self.partition_point(|token| token.line < line);
        let end = self.partition_point(|token| token.line <= line);
        &self[start..end]
    }
}
