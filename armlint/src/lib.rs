pub mod config;
pub mod diagnostic;
pub mod error;
pub mod parse;
pub mod program;
pub mod resource;
pub mod rules;
pub mod source;
pub mod wasm;

pub use rules::lint;
