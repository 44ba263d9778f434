//! Core traits for trivia collaborators.

mod store;

pub use store::*;
