pub mod transformer;
pub mod traverser;

pub use transformer::{transform, Error, Result};
pub use traverser::{traverse, Parent, Visitor};
