use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Semantic,
}

impl DiagnosticKind {
    /// Order in which diagnostics are grouped in the report.
    pub const ALL: [Self; 3] = [Self::Lexical, Self::Syntax, Self::Semantic];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lexical => "Lexical errors",
            Self::Syntax => "Syntax errors",
            Self::Semantic => "Semantic errors",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind, message: impl Display) -> Self {
        Self {
            line,
            kind,
            message: message.to_string(),
        }
    }

    pub fn lexical(line: usize, message: LexicalErrorMessage) -> Self {
        Self::new(line, DiagnosticKind::Lexical, message)
    }

    pub fn syntax(line: usize, message: SyntaxErrorMessage) -> Self {
        Self::new(line, DiagnosticKind::Syntax, message)
    }

    pub fn semantic(line: usize, message: SemanticErrorMessage) -> Self {
        Self::new(line, DiagnosticKind::Semantic, message)
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexicalErrorMessage {
    #[error("unrecognized token: '{0}'")]
    UnrecognizedToken(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxErrorMessage {
    #[error("invalid function definition")]
    InvalidFunctionDefinition,
    #[error("missing ':' after condition")]
    MissingColonAfterCondition,
    #[error("missing ':' after 'else'")]
    MissingColonAfterElse,
    #[error("incomplete call: missing ')'")]
    IncompleteCall,
    #[error("missing indentation after ':'")]
    MissingIndentation,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SemanticErrorMessage {
    #[error("variable '{0}' used without declaration")]
    UndeclaredVariable(String),
    #[error("assigned from undeclared variable '{0}'")]
    AssignedFromUndeclared(String),
    #[error("variable '{0}' must be numeric, not string")]
    MustBeNumeric(String),
    #[error("variable '{0}' must be of type string")]
    MustBeString(String),
}
