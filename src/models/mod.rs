// Model exports
pub mod inputs;

pub use inputs::{Decoded, MatchField, MatchInput};
