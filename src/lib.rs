pub mod config;
pub mod db;
pub mod observability;

pub use config::Config;
pub use db::{connect, create_pool};
