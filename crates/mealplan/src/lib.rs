mod command;
mod course;
mod plan;
mod source;

pub use command::*;
pub use course::*;
pub use plan::*;
pub use source::*;
