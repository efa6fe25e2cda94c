mod date;
mod error;
pub mod recipe;
pub mod repository;

pub use date::*;
pub use error::*;
pub use repository::{Collection, Document, MemoryRepository, Repository};
