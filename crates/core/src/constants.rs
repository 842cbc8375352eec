/// Prefix for generated human-readable record numbers
pub const RECORD_NUMBER_PREFIX: &str = "VR";
