pub mod lexer;
pub mod parser;

use lexer::Token;
use parser::ast::Program;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    LexError(#[from] lexer::Error),
    #[error(transparent)]
    ParseError(#[from] parser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The `Frontend` turns source text into the source-AST.
#[derive(Debug, Clone, Default)]
pub struct Frontend;

impl Frontend {
    pub fn new() -> Self {
        Frontend
    }

    pub fn pass(&self, source: &str) -> Result<Program> {
        self.parse(&self.tokenize(source)?)
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let tokens = lexer::tokenize(source)?;
        Ok(tokens)
    }

    pub fn parse(&self, tokens: &[Token]) -> Result<Program> {
        let ast = parser::parse(tokens)?;
        Ok(ast)
    }
}
