use error::Diagnostic;
use lexer::token::Token;
use policy::SemanticPolicy;
use report::{Report, TokenCounts};
use table::{FunctionTable, VariableTable};

pub mod error;
pub mod lexer;
pub mod policy;
pub mod report;
pub mod semantic;
pub mod syntax;
pub mod table;


pub trait DiagnosticsBroker {
    fn report_error(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticsBroker for Vec<Diagnostic> {
    fn report_error(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

pub trait ErrorContainer {
    fn errors(&self) -> Vec<Diagnostic>;
}

/// Result of running all analysis phases over one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzedSource {
    pub text: String,
    pub tokens: Vec<Token>,
    pub functions: FunctionTable,
    pub variables: VariableTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalyzedSource {
    pub fn new(text: String) -> Self {
        Self::with_policy(text, &SemanticPolicy::default())
    }

    pub fn with_policy(text: String, policy: &SemanticPolicy) -> Self {
        let tokens = lexer::lex(&text);
        let mut diagnostics = tokens.errors();
        let lines: Vec<&str> = text.lines().collect();
        let functions = syntax::check(&lines, &mut diagnostics);
        let variables =
            semantic::analyze(&tokens, lines.len(), &functions, policy, &mut diagnostics);
        log::debug!(
            "Analyzed {} lines: {} tokens, {} diagnostics",
            lines.len(),
            tokens.len(),
            diagnostics.len()
        );
        Self {
            text,
            tokens,
            functions,
            variables,
            diagnostics,
        }
    }

    pub fn token_counts(&self) -> TokenCounts {
        TokenCounts::new(&self.tokens)
    }

    pub fn report(&self) -> String {
        Report::new(&self.tokens, &self.diagnostics).to_string()
    }
}

impl ErrorContainer for AnalyzedSource {
    fn errors(&self) -> Vec<Diagnostic> {
        self.diagnostics.clone()
    }
}

/// Analyzes the source text and renders the diagnostic report.
pub fn analyze(text: &str) -> String {
    AnalyzedSource::new(text.to_string()).report()
}
