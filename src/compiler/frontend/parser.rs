pub mod ast;

use super::lexer::{Token, TokenKind};
use ast::{Node, Program};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("ParseError: expected a name after `(` but found {0}")]
    MissingName(Token),
    #[error("ParseError: unexpected {0}")]
    UnexpectedToken(Token),
    #[error("ParseError: found `)` without a matching `(`")]
    UnmatchedCloseParen,
    #[error("ParseError: unexpected end of input, {0}")]
    UnexpectedEndOfInput(String),
    #[error("ParseError: calls nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl Error {
    pub fn unexpected_end_of_input<M: Into<String>>(message: M) -> Self {
        Error::UnexpectedEndOfInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The deepest nesting of calls `parse` accepts.
///
/// Every later stage walks the tree recursively, so the limit is enforced
/// here, before any of them runs.
pub const MAX_DEPTH: usize = 512;

/// Parse the complete token sequence into a `Program`.
///
/// ```grammar
/// <program>    -> <form>*
/// <form>       -> <number> | <string> | <call>
/// <call>       -> ( <name> <form>* )
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program> {
    let program = Parser::new(tokens).parse_program()?;
    log::trace!("parsed {} top level forms", program.body.len());
    Ok(program)
}

struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    fn parse_program(mut self) -> Result<Program> {
        let mut body = vec![];

        while !self.is_at_end() {
            body.push(self.walk()?);
        }

        Ok(Program::new(body))
    }

    // consume exactly one form
    fn walk(&mut self) -> Result<Node> {
        let token = self
            .advance()
            .ok_or_else(|| Error::unexpected_end_of_input("expected an expression"))?;

        match token.kind {
            TokenKind::Number => Ok(Node::number(token.text.clone())),
            TokenKind::String => Ok(Node::string(token.text.clone())),
            TokenKind::OpenParen => self.parse_call(),
            // inside a call the closing paren is consumed by `parse_call`
            TokenKind::CloseParen => Err(Error::UnmatchedCloseParen),
            TokenKind::Name => Err(Error::UnexpectedToken(token.clone())),
        }
    }

    // the opening paren has already been consumed
    fn parse_call(&mut self) -> Result<Node> {
        if self.depth == MAX_DEPTH {
            return Err(Error::NestingTooDeep(MAX_DEPTH));
        }
        self.depth += 1;

        let name = match self.advance() {
            Some(token) if token.is(TokenKind::Name) => token.text.clone(),
            Some(token) => return Err(Error::MissingName(token.clone())),
            None => return Err(Error::unexpected_end_of_input("expected a name after `(`")),
        };

        let mut params = vec![];

        loop {
            match self.peek() {
                Some(token) if token.is(TokenKind::CloseParen) => {
                    self.current += 1;
                    break;
                }
                Some(_) => params.push(self.walk()?),
                None => {
                    return Err(Error::unexpected_end_of_input(format!(
                        "missing `)` for call to `{}`",
                        name
                    )))
                }
            }
        }

        self.depth -= 1;
        Ok(Node::call(name, params))
    }

    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    #[inline]
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.current += 1;
        Some(token)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
