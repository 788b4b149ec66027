// Lexer
//
// Splits the source text into tokens. Every token class has its own nom
// combinator; `tokenize` drives them over the input until it is consumed.
pub mod token;

use nom::branch::alt;
use nom::bytes::complete::{take_till, take_while1};
use nom::character::complete::{alpha1, char, digit1};
use nom::combinator::{cut, map, value};
use nom::sequence::{preceded, terminated};
use nom::IResult;
use thiserror::Error;

pub use token::{Token, TokenKind};

type Input<'a> = &'a str;

type ParseResult<'a, T> = IResult<Input<'a>, T, nom::error::Error<Input<'a>>>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("LexError: I don't know what this character is: `{0}`")]
    UnexpectedCharacter(char),
    #[error("LexError: unterminated string literal \"{0}")]
    UnterminatedString(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    let mut input = source;

    while let Some(current) = input.chars().next() {
        match parse_lexeme(input) {
            Ok((rest, Some(token))) => {
                tokens.push(token);
                input = rest;
            }
            Ok((rest, None)) => input = rest,
            // only the string parser commits after its opening quote
            Err(nom::Err::Failure(_)) => {
                return Err(Error::UnterminatedString(
                    input[current.len_utf8()..].to_string(),
                ))
            }
            Err(_) => return Err(Error::UnexpectedCharacter(current)),
        }
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

#[inline]
fn parse_lexeme(input: Input) -> ParseResult<Option<Token>> {
    alt((
        value(None, parse_whitespace),
        map(parse_token, Some),
    ))(input)
}

/// Unicode whitespace, plus the byte order mark some editors put in front of
/// a file.
#[inline]
fn parse_whitespace(input: Input) -> ParseResult<()> {
    value((), take_while1(is_whitespace))(input)
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_token(input: Input) -> ParseResult<Token> {
    alt((
        parse_paren,
        parse_number,
        parse_string,
        parse_name,
    ))(input)
}

#[inline]
fn parse_paren(input: Input) -> ParseResult<Token> {
    alt((
        value(Token::open_paren(), char('(')),
        value(Token::close_paren(), char(')')),
    ))(input)
}

/// A run of ASCII digits. Signs, decimal points and exponents are not part
/// of the language.
#[inline]
fn parse_number(input: Input) -> ParseResult<Token> {
    map(digit1, |digits: &str| Token::number(digits))(input)
}

/// Everything between two double quotes, taken verbatim.
/// There are no escape sequences, so a string can never contain a `"`.
#[inline]
fn parse_string(input: Input) -> ParseResult<Token> {
    let contents = terminated(take_till(|c: char| c == '"'), char('"'));

    map(preceded(char('"'), cut(contents)), |text: &str| {
        Token::string(text)
    })(input)
}

#[inline]
fn parse_name(input: Input) -> ParseResult<Token> {
    map(alpha1, |name: &str| Token::name(name))(input)
}
