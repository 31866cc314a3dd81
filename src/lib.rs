//! CloudMatch - match-input model for the CloudMatch location-matching client
//!
//! This library holds the query input sent to the matching service and the
//! mapping between it and the JSON objects the transport layer sends.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::config::{LoggingSettings, MappingSettings, Settings};
pub use crate::logging::LogFormat;
pub use crate::core::{AbsentPolicy, AreaWindow, DecodeMode, ExpectedKind};
pub use crate::error::{CoercionError, MappingError};
pub use crate::models::{Decoded, MatchField, MatchInput};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let input = MatchInput::default().with_criteria("restaurant");
        assert_eq!(input.to_map().len(), MatchField::ALL.len());
    }
}
