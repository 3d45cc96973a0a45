pub mod directory;

pub use directory::{DirectoryUser, UserDirectory};
