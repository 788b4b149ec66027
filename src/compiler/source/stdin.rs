use super::{HasOrigin, Origin, Source};
use std::io::Read;

#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl HasOrigin for StdinSource {
    fn origin(&self) -> Origin {
        Origin::Stdin
    }
}

impl Source for StdinSource {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize> {
        std::io::stdin().read_to_string(buf)
    }
}
