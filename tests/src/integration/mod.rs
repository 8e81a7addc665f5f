//! Cross-module flows of the console.

pub mod backend;
mod flows;
