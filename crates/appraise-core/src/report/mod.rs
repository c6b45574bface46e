pub mod debug;
pub mod json;

/// In-memory report: one entry per successfully parsed case, in input
/// order, each tagged with its `input_id`.
pub type Report = Vec<serde_json::Value>;
