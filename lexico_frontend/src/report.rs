use crate::{
    error::{Diagnostic, DiagnosticKind},
    lexer::token::{Token, TokenKind},
};
use std::{collections::BTreeMap, fmt::Display};

#[cfg(test)]
mod tests;

pub const SUCCESS_NOTICE: &str = "No lexical, syntax or semantic errors found.";

/// Number of tokens per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenCounts(BTreeMap<TokenKind, usize>);

impl TokenCounts {
    pub fn new(tokens: &[Token]) -> Self {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

/// Text rendering of an analysis.
/// Sections and groups are always written in the same order.
pub struct Report<'a> {
    tokens: &'a [Token],
    diagnostics: &'a [Diagnostic],
    counts: TokenCounts,
}

impl<'a> Report<'a> {
    pub fn new(tokens: &'a [Token], diagnostics: &'a [Diagnostic]) -> Self {
        Self {
            tokens,
            diagnostics,
            counts: TokenCounts::new(tokens),
        }
    }

    fn tokens_of(&self, kind: TokenKind) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |token| token.kind == kind)
    }

    fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.kind == kind)
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Tokens ===")?;
        for kind in TokenKind::LISTED {
            writeln!(f, "{} ({}):", kind.label(), self.counts.get(kind))?;
            for token in self.tokens_of(kind) {
                writeln!(f, "  [{}] {}", token.line, token.text)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Diagnostics ===")?;
        if self.diagnostics.is_empty() {
            writeln!(f, "{}", SUCCESS_NOTICE)?;
        }
        for kind in DiagnosticKind::ALL {
            let diagnostics: Vec<&Diagnostic> = self.diagnostics_of(kind).collect();
            if diagnostics.is_empty() {
                continue;
            }
            writeln!(f, "{} ({}):", kind.label(), diagnostics.len())?;
            for diagnostic in diagnostics {
                writeln!(f, "  {}", diagnostic)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Summary ===")?;
        for kind in TokenKind::ALL {
            writeln!(f, "{}: {}", kind.label(), self.counts.get(kind))?;
        }
        writeln!(f, "Total: {}", self.counts.total())
    }
}
