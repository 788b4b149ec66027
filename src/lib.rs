extern crate nom;
extern crate thiserror;

pub mod cmd;
pub mod compiler;
pub mod repl;

pub use compiler::{compile, generate, parse, tokenize, transform, traverse};

pub const PARENS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The per-user configuration directory, e.g. `~/.config/parens` on linux.
/// Falls back to `.parens` in the working directory when no home is known.
pub fn parens_config_directory() -> std::path::PathBuf {
    match directories::ProjectDirs::from("", "", "parens") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => std::path::PathBuf::from(".parens"),
    }
}

#[cfg(test)]
#[macro_use]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
