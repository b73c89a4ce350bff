//! Fixed word sets and heuristic rules of the analyzed dialect.
//! Everything here is immutable and shared by all analyses.
use phf::phf_set;

pub const DEF: &str = "def";
pub const IF: &str = "if";
pub const ELIF: &str = "elif";
pub const ELSE: &str = "else";
pub const WHILE: &str = "while";
pub const FOR: &str = "for";
pub const IN: &str = "in";
pub const AS: &str = "as";
pub const IMPORT: &str = "import";
pub const PRINT: &str = "print";
pub const TRUE: &str = "True";
pub const FALSE: &str = "False";
pub const NONE: &str = "None";

pub static RESERVED_WORDS: phf::Set<&'static str> = phf_set! {
    "False", "None", "True", "and", "as", "assert", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
    "raise", "return", "try", "while", "with", "yield", "print",
};

/// Matched before any single character operator.
pub const TWO_CHAR_OPERATORS: [&str; 11] = [
    "==", "!=", "<=", ">=", "**", "//", "+=", "-=", "*=", "/=", "->",
];

pub const SINGLE_CHAR_OPERATORS: &str = "=+-*/%<>()[]{}:,.";

pub const QUOTES: &str = "\"'";

/// Starts a comment that runs to the end of the line.
pub const COMMENT_START: char = '#';

pub const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", ">=", "<=", ">", "<"];

/// Comparisons that disqualify a line from being read as an assignment.
pub const NON_ASSIGNMENT_OPERATORS: [&str; 4] = ["==", "!=", "<=", ">="];

pub const CONDITION_OPENERS: [&str; 4] = [IF, ELIF, WHILE, FOR];

/// Indentation required on the first line of a block.
pub const INDENT: &str = "    ";

pub static DUNDER_NAMES: phf::Set<&'static str> = phf_set! {
    "__name__", "__main__", "__file__", "__doc__", "__package__", "__spec__",
    "__builtins__", "__dict__", "__init__",
};

pub static STRING_METHODS: phf::Set<&'static str> = phf_set! {
    "lower", "upper", "strip",
};

pub static DEFAULT_NAME_RULES: [NameRule; 2] = [
    NameRule {
        name: "edad",
        rule: TypeRule::Numeric,
    },
    NameRule {
        name: "escuela",
        rule: TypeRule::String,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeRule {
    /// Rejects string literals.
    Numeric,
    /// Requires the resolved type to be a string.
    String,
}

/// A type rule bound to one variable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameRule {
    pub name: &'static str,
    pub rule: TypeRule,
}

/// Heuristics applied by the semantic checker.
#[derive(Clone, Copy, Debug)]
pub struct SemanticPolicy {
    /// Names that never need a declaration.
    pub whitelist: &'static phf::Set<&'static str>,
    /// Methods whose receiver must be declared.
    pub checked_methods: &'static phf::Set<&'static str>,
    pub name_rules: &'static [NameRule],
}

impl SemanticPolicy {
    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.whitelist.contains(name)
    }

    pub fn is_checked_method(&self, name: &str) -> bool {
        self.checked_methods.contains(name)
    }

    pub fn rules_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = TypeRule> + 'a {
        self.name_rules
            .iter()
            .filter(move |rule| rule.name == name)
            .map(|rule| rule.rule)
    }
}

impl Default for SemanticPolicy {
    fn default() -> Self {
        Self {
            whitelist: &DUNDER_NAMES,
            checked_methods: &STRING_METHODS,
            name_rules: &DEFAULT_NAME_RULES,
        }
    }
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

pub fn is_operator_char(c: char) -> bool {
    SINGLE_CHAR_OPERATORS.contains(c)
}

pub fn is_quote(c: char) -> bool {
    QUOTES.contains(c)
}

pub fn is_comparison(op: &str) -> bool {
    COMPARISON_OPERATORS.contains(&op)
}
