use crate::policy;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_while1},
    character::complete::{self as character, one_of},
    combinator::{map, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded},
};
use token::{Token, TokenKind};
use utility::is_word_boundary;

pub mod token;
pub(crate) mod utility;

pub(crate) type Span<'a> = nom_locate::LocatedSpan<&'a str>;

type IResult<'a, T> = nom::IResult<Span<'a>, T>;

/// Splits the source text into tokens in a single left to right scan.
/// Tokens never cross a line break and carry the line and column they start at.
pub fn lex(input: &str) -> Vec<Token> {
    let span = Span::new(input);
    let (_, tokens) =
        many0(preceded(trivia, lex_token))(span).expect("Lexing must not fail.");
    tokens
}

fn lex_token(input: Span) -> IResult<Token> {
    alt((string_literal, unterminated_string, operator, word))(input)
}

/// Whitespace and comments, which produce no tokens.
fn trivia(input: Span) -> IResult<Span> {
    recognize(many0(alt((take_while1(char::is_whitespace), comment))))(input)
}

fn comment(input: Span) -> IResult<Span> {
    recognize(pair(
        character::char(policy::COMMENT_START),
        take_till(|c: char| c == '\n'),
    ))(input)
}

/// A string enclosed in matching quotes on a single line.
fn string_literal(input: Span) -> IResult<Token> {
    map(alt((quoted('"'), quoted('\''))), |span: Span| {
        Token::from_span(TokenKind::String, span)
    })(input)
}

fn quoted<'a>(quote: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>> {
    recognize(delimited(
        character::char(quote),
        take_till(move |c: char| c == quote || c == '\n'),
        character::char(quote),
    ))
}

/// A quote without a closing partner on the same line.
fn unterminated_string(input: Span) -> IResult<Token> {
    map(
        recognize(pair(one_of(policy::QUOTES), take_till(is_word_boundary))),
        |span: Span| Token::from_span(TokenKind::Unknown, span),
    )(input)
}

fn operator(input: Span) -> IResult<Token> {
    map(
        alt((
            two_char_operator,
            recognize(one_of(policy::SINGLE_CHAR_OPERATORS)),
        )),
        |span: Span| Token::from_span(TokenKind::Operator, span),
    )(input)
}

fn two_char_operator(input: Span) -> IResult<Span> {
    policy::TWO_CHAR_OPERATORS
        .iter()
        .find_map(|op| tag::<_, _, Error<Span>>(*op)(input).ok())
        .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

fn word(input: Span) -> IResult<Token> {
    map(take_till1(is_word_boundary), |span: Span| {
        Token::from_span(TokenKind::classify(span.fragment()), span)
    })(input)
}
