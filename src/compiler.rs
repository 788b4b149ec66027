pub mod backend;
pub mod frontend;
pub mod source;
pub mod transform;

use backend::Backend;
use frontend::lexer::Token;
use frontend::Frontend;
use source::{HasOrigin, Origin, Source};
use thiserror::Error;

pub use backend::{generate, generate_node};
pub use frontend::lexer::tokenize;
pub use frontend::parser::parse;
pub use transform::{transform, traverse};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {0}: {1}")]
    SourceError(Origin, #[source] std::io::Error),

    #[error(transparent)]
    FrontendError(#[from] frontend::Error),

    #[error(transparent)]
    InternalError(#[from] transform::Error),
}

impl From<frontend::lexer::Error> for Error {
    fn from(e: frontend::lexer::Error) -> Self {
        Error::FrontendError(e.into())
    }
}

impl From<frontend::parser::Error> for Error {
    fn from(e: frontend::parser::Error) -> Self {
        Error::FrontendError(e.into())
    }
}

/// Compile a program into its C-like equivalent.
///
/// The pipeline stops at the first stage that fails.
pub fn compile(source: &str) -> Result<String> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    let target = transform(&ast)?;
    Ok(generate(&target))
}

/// The `Compiler` runs the full pipeline for any `Source` and gives access
/// to the intermediate representations.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    frontend: Frontend,
    backend: Backend,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            frontend: Frontend::new(),
            backend: Backend::new(),
        }
    }

    pub fn compile<T: Source>(&self, source: &mut T) -> Result<String> {
        let text = self.read(source)?;
        self.compile_str(&text)
    }

    pub fn compile_str(&self, source: &str) -> Result<String> {
        let ast = self.target_ast(source)?;
        let output = self.backend.pass(&ast);
        log::debug!("compiled {} bytes into {} bytes", source.len(), output.len());
        Ok(output)
    }

    pub fn read<T: Source>(&self, source: &mut T) -> Result<String> {
        let mut text = String::new();
        source
            .read_to_string(&mut text)
            .map_err(|e| Error::SourceError(source.origin(), e))?;

        log::trace!("read {} bytes from {}", text.len(), source.origin());
        Ok(text)
    }

    pub fn tokens(&self, source: &str) -> Result<Vec<Token>> {
        Ok(self.frontend.tokenize(source)?)
    }

    pub fn source_ast(&self, source: &str) -> Result<frontend::parser::ast::Program> {
        Ok(self.frontend.pass(source)?)
    }

    pub fn target_ast(&self, source: &str) -> Result<backend::ast::Program> {
        let ast = self.source_ast(source)?;
        Ok(transform(&ast)?)
    }
}
