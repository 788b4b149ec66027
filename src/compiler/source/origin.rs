use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Synthetic,
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Origin::Synthetic => formatter.write_str("<synthetic>"),
            Origin::Stdin => formatter.write_str("<stdin>"),
            Origin::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

pub trait HasOrigin {
    fn origin(&self) -> Origin;
}
