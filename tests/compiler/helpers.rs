pub use matches::assert_matches;
use parens::compiler::source::StringSource;
pub use parens::compiler::Compiler;
pub use parens::compiler::{Error, Result};

pub fn compile_code(code: &str) -> Result<String> {
    let mut source = StringSource::new(code);
    let compiler = Compiler::new();
    compiler.compile(&mut source)
}

#[inline]
pub fn assert_compiles_to(code: &str, expected: &str) {
    assert_eq!(compile_code(code).unwrap(), expected)
}
