pub mod compile;
pub mod repl;
