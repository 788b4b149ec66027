use super::{HasOrigin, Origin, Source};
use std::io::Read;
use std::path::PathBuf;

/// A source file on disk. The file is opened when it is read.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HasOrigin for FileSource {
    fn origin(&self) -> Origin {
        Origin::File(self.path.clone())
    }
}

impl Source for FileSource {
    fn read_to_string(&mut self, buf: &mut String) -> std::io::Result<usize> {
        std::fs::File::open(&self.path)?.read_to_string(buf)
    }
}
