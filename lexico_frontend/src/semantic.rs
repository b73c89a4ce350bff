use crate::{
    error::{Diagnostic, SemanticErrorMessage},
    lexer::token::{Token, TokenKind, TokenList},
    policy::{
        is_comparison, SemanticPolicy, TypeRule, AS, FALSE, FOR, IMPORT, IN, NONE,
        NON_ASSIGNMENT_OPERATORS, PRINT, TRUE,
    },
    table::{DataType, FunctionTable, SymbolTable, VariableEntry, VariableTable},
    DiagnosticsBroker,
};
use std::collections::HashSet;


/// Operators after which a new operand starts.
const OPERAND_BOUNDARIES: [&str; 11] = [
    "(", "[", ",", ":", "=", "==", "!=", "<", ">", "<=", ">=",
];

/// Builds the variable table from the bindings in source order,
/// then validates the usage of variables against it.
/// Errors are reported to the provided broker.
pub fn analyze<B: DiagnosticsBroker>(
    tokens: &[Token],
    line_count: usize,
    functions: &FunctionTable,
    policy: &SemanticPolicy,
    broker: &mut B,
) -> VariableTable {
    let mut table = VariableTable::default();
    for line in 1..=line_count {
        let line_tokens = tokens.on_line(line);
        for function in functions.defined_on(line) {
            for parameter in &function.parameters {
                declare(&mut table, parameter, line);
            }
        }
        declare_bindings(line_tokens, line, &mut table);
        if let Some(assignment) = Assignment::parse(line_tokens) {
            assignment.analyze(line, &mut table, policy, broker);
        }
    }

    {
        let mut checker = UsageChecker {
            table: &table,
            functions,
            policy,
            reported: HashSet::new(),
        };
        for line in 1..=line_count {
            checker.check(tokens.on_line(line), broker);
        }
    }
    table
}

fn declare(table: &mut VariableTable, name: &str, line: usize) {
    table.enter(
        name.to_string(),
        VariableEntry {
            data_type: DataType::Unknown,
            line,
        },
    );
}

/// Names bound by `for ... in`, `... as <name>` and imports.
fn declare_bindings(tokens: &[Token], line: usize, table: &mut VariableTable) {
    if let Some(first) = tokens.first() {
        if first.is_keyword(FOR) {
            tokens[1..]
                .iter()
                .take_while(|token| !token.is_keyword(IN))
                .filter(|token| token.is_identifier())
                .for_each(|token| declare(table, &token.text, line));
        }
    }
    for (i, token) in tokens.iter().enumerate() {
        if token.is_keyword(AS) {
            if let Some(name) = tokens.get(i + 1).filter(|next| next.is_identifier()) {
                declare(table, &name.text, line);
            }
        } else if token.is_keyword(IMPORT) {
            tokens[i + 1..]
                .iter()
                .take_while(|token| {
                    token.is_identifier() || token.is_operator(",") || token.is_operator(".")
                })
                .filter(|token| token.is_identifier())
                .for_each(|token| declare(table, &token.text, line));
        }
    }
}

/// Shape of an assigned value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Value<'a> {
    Literal(DataType),
    Variable(&'a str),
    Other,
}

impl<'a> Value<'a> {
    fn classify(tokens: &'a [Token]) -> Self {
        match tokens {
            [token] => match token.kind {
                TokenKind::Number => Self::Literal(DataType::Int),
                TokenKind::String => Self::Literal(DataType::String),
                TokenKind::Keyword if token.text == TRUE || token.text == FALSE => {
                    Self::Literal(DataType::Bool)
                }
                TokenKind::Keyword if token.text == NONE => Self::Literal(DataType::None),
                TokenKind::Identifier => Self::Variable(&token.text),
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// `<name> = <value>`
struct Assignment<'a> {
    name: &'a str,
    value: Value<'a>,
}

impl<'a> Assignment<'a> {
    fn parse(tokens: &'a [Token]) -> Option<Self> {
        if tokens
            .iter()
            .any(|token| NON_ASSIGNMENT_OPERATORS.contains(&token.text.as_str()))
        {
            return None;
        }
        match tokens {
            [name, assign, value @ ..] if name.is_identifier() && assign.is_operator("=") => {
                Some(Self {
                    name: &name.text,
                    value: Value::classify(value),
                })
            }
            _ => None,
        }
    }

    fn analyze<B: DiagnosticsBroker>(
        &self,
        line: usize,
        table: &mut VariableTable,
        policy: &SemanticPolicy,
        broker: &mut B,
    ) {
        let data_type = match self.value {
            Value::Literal(data_type) => data_type,
            Value::Variable(source) => table.data_type(source).unwrap_or_else(|| {
                broker.report_error(Diagnostic::semantic(
                    line,
                    SemanticErrorMessage::AssignedFromUndeclared(source.to_string()),
                ));
                DataType::Unknown
            }),
            Value::Other => DataType::Unknown,
        };
        for rule in policy.rules_for(self.name) {
            let violation = match rule {
                TypeRule::Numeric if self.value == Value::Literal(DataType::String) => Some(
                    SemanticErrorMessage::MustBeNumeric(self.name.to_string()),
                ),
                TypeRule::String if data_type != DataType::String => {
                    Some(SemanticErrorMessage::MustBeString(self.name.to_string()))
                }
                _ => None,
            };
            if let Some(message) = violation {
                broker.report_error(Diagnostic::semantic(line, message));
            }
        }
        table.enter(self.name.to_string(), VariableEntry { data_type, line });
    }
}

struct UsageChecker<'a> {
    table: &'a VariableTable,
    functions: &'a FunctionTable,
    policy: &'a SemanticPolicy,
    /// Undeclared names are only reported at their first use.
    reported: HashSet<&'a str>,
}

impl<'a> UsageChecker<'a> {
    fn check<B: DiagnosticsBroker>(&mut self, tokens: &'a [Token], broker: &mut B) {
        for (i, token) in tokens.iter().enumerate() {
            let rest = &tokens[i + 1..];
            match token.kind {
                // print(<name>)
                TokenKind::Keyword if token.text == PRINT => {
                    if let [open, argument, close, ..] = rest {
                        if open.is_operator("(")
                            && argument.is_identifier()
                            && close.is_operator(")")
                        {
                            self.require_declared(argument, broker);
                        }
                    }
                }
                // <name> <comparison>
                TokenKind::Operator if is_comparison(&token.text) => {
                    if i > 0 && tokens[i - 1].is_identifier() && starts_operand(tokens, i - 1) {
                        self.require_declared(&tokens[i - 1], broker);
                    }
                }
                // <name>.<method>(
                TokenKind::Identifier => {
                    if let [dot, method, open, ..] = rest {
                        if dot.is_operator(".")
                            && method.is_identifier()
                            && self.policy.is_checked_method(&method.text)
                            && open.is_operator("(")
                            && starts_operand(tokens, i)
                        {
                            self.require_declared(token, broker);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn require_declared<B: DiagnosticsBroker>(&mut self, token: &'a Token, broker: &mut B) {
        let name = token.text.as_str();
        if self.is_declared(name) || !self.reported.insert(name) {
            return;
        }
        broker.report_error(Diagnostic::semantic(
            token.line,
            SemanticErrorMessage::UndeclaredVariable(name.to_string()),
        ));
    }

    fn is_declared(&self, name: &str) -> bool {
        self.table.contains(name)
            || self.functions.contains(name)
            || self.policy.is_whitelisted(name)
    }
}

/// Checks if the token at the given index is the first token of an operand.
fn starts_operand(tokens: &[Token], index: usize) -> bool {
    match index.checked_sub(1).map(|i| &tokens[i]) {
        None => true,
        Some(previous) => match previous.kind {
            TokenKind::Keyword => true,
            TokenKind::Operator => OPERAND_BOUNDARIES.contains(&previous.text.as_str()),
            _ => false,
        },
    }
}
