mod file;
mod origin;
mod stdin;
mod string;

pub use file::FileSource;
pub use origin::{HasOrigin, Origin};
pub use stdin::StdinSource;
pub use string::StringSource;

/// Anything the compiler can read program text from.
pub trait Source: HasOrigin {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize>;
}
