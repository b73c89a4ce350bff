use crate::{
    error::{Diagnostic, SyntaxErrorMessage},
    lexer::utility::{identifier, is_identifier, opens_with, strip_comment},
    policy::{CONDITION_OPENERS, DEF, ELSE, INDENT, PRINT},
    table::{FunctionEntry, FunctionTable, SymbolTable},
    DiagnosticsBroker,
};
use nom::{
    bytes::complete::tag,
    character::complete::{char, space0, space1},
    sequence::{pair, preceded, terminated},
    IResult,
};


/// Line that requires an indented block after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockOpener {
    Definition,
    Condition,
    Else,
}

impl BlockOpener {
    fn of(statement: &str) -> Option<Self> {
        if opens_with(statement, DEF) {
            Some(Self::Definition)
        } else if CONDITION_OPENERS
            .iter()
            .any(|opener| opens_with(statement, opener))
        {
            Some(Self::Condition)
        } else if opens_with(statement, ELSE) {
            Some(Self::Else)
        } else {
            None
        }
    }
}

/// Checks the line local structure of every line.
/// Comments are ignored.
/// Returns the table of all correctly defined functions.
pub fn check<B: DiagnosticsBroker>(lines: &[&str], broker: &mut B) -> FunctionTable {
    let mut functions = FunctionTable::default();
    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let statement = code_of(line);
        if statement.is_empty() {
            continue;
        }
        let opener = BlockOpener::of(statement);
        match opener {
            Some(BlockOpener::Definition) => match parse_definition(statement, line_number) {
                Some(entry) => functions.enter(entry.name.clone(), entry),
                None => broker.report_error(Diagnostic::syntax(
                    line_number,
                    SyntaxErrorMessage::InvalidFunctionDefinition,
                )),
            },
            Some(BlockOpener::Condition) if !statement.ends_with(':') => {
                broker.report_error(Diagnostic::syntax(
                    line_number,
                    SyntaxErrorMessage::MissingColonAfterCondition,
                ));
            }
            Some(BlockOpener::Else) if !statement.ends_with(':') => {
                broker.report_error(Diagnostic::syntax(
                    line_number,
                    SyntaxErrorMessage::MissingColonAfterElse,
                ));
            }
            _ => {}
        }
        if has_incomplete_print(statement) {
            broker.report_error(Diagnostic::syntax(
                line_number,
                SyntaxErrorMessage::IncompleteCall,
            ));
        }
        if opener.is_some() {
            check_indentation(lines, index, broker);
        }
    }
    functions
}

fn code_of(line: &str) -> &str {
    strip_comment(line).trim()
}

/// Validates `def <name>(<parameters>):`.
fn parse_definition(statement: &str, line: usize) -> Option<FunctionEntry> {
    if !statement.ends_with(':') {
        return None;
    }
    let open = statement.find('(')?;
    let close = statement.rfind(')')?;
    let (_, name) = definition_name(statement).ok()?;
    let parameters = if open < close {
        parameter_names(&statement[open + 1..close])
    } else {
        Vec::new()
    };
    Some(FunctionEntry {
        name: name.to_string(),
        line,
        parameters,
    })
}

fn definition_name(statement: &str) -> IResult<&str, &str> {
    preceded(
        pair(tag(DEF), space1),
        terminated(identifier, pair(space0, char('('))),
    )(statement)
}

/// Extracts parameter names, ignoring star prefixes, annotations and defaults.
fn parameter_names(parameters: &str) -> Vec<String> {
    parameters
        .split(',')
        .filter_map(|parameter| {
            let name = parameter
                .split(|c: char| c == ':' || c == '=')
                .next()
                .unwrap_or_default()
                .trim()
                .trim_start_matches('*');
            is_identifier(name).then(|| name.to_string())
        })
        .collect()
}

/// A `print(` without any `)` after it on the same line.
fn has_incomplete_print(statement: &str) -> bool {
    let call = format!("{}(", PRINT);
    statement
        .match_indices(&call)
        .any(|(index, _)| !statement[index..].contains(')'))
}

/// The next line with code must start with an indentation.
/// If there is no such line, the opener itself is reported.
fn check_indentation<B: DiagnosticsBroker>(lines: &[&str], index: usize, broker: &mut B) {
    let next = lines
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, line)| !code_of(line).is_empty());
    let missing = match next {
        Some((next_index, line)) => (!is_indented(line)).then_some(next_index + 1),
        None => Some(index + 1),
    };
    if let Some(line_number) = missing {
        broker.report_error(Diagnostic::syntax(
            line_number,
            SyntaxErrorMessage::MissingIndentation,
        ));
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with(INDENT) || line.starts_with('\t')
}
