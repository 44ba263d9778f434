//! Core types for trivia.

mod category;
mod question;
mod scope;

pub use category::*;
pub use question::*;
pub use scope::*;
