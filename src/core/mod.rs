// Mapping and geospatial helpers
pub mod coerce;
pub mod location;

pub use coerce::{coerce_number, coerce_text, encode_number, encode_text, kind_of, AbsentPolicy, DecodeMode, ExpectedKind};
pub use location::AreaWindow;
