use crate::policy;
use nom::{
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::{all_consuming, recognize},
    sequence::pair,
    IResult,
};

/// Parser for `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(is_identifier_char),
    ))(input)
}

pub fn is_identifier(word: &str) -> bool {
    all_consuming(identifier)(word).is_ok()
}

/// Checks if provided char is alphanumeric or an underscore.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that end a word.
pub(super) fn is_word_boundary(c: char) -> bool {
    c.is_whitespace()
        || policy::is_operator_char(c)
        || policy::is_quote(c)
        || c == policy::COMMENT_START
}

/// Cuts the line at the first comment start outside a string literal.
/// A quote without a closing partner on the line does not open a string.
pub(crate) fn strip_comment(line: &str) -> &str {
    let mut open_quote = None;
    for (index, c) in line.char_indices() {
        match open_quote {
            Some(quote) if c == quote => open_quote = None,
            Some(_) => {}
            None if policy::is_quote(c) && line[index + 1..].contains(c) => open_quote = Some(c),
            None if c == policy::COMMENT_START => return &line[..index],
            None => {}
        }
    }
    line
}

/// Checks if the statement starts with the given word,
/// not followed by further identifier characters.
pub(crate) fn opens_with(statement: &str, word: &str) -> bool {
    statement
        .strip_prefix(word)
        .map_or(false, |rest| !rest.starts_with(is_identifier_char))
}
