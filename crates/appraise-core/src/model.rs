use serde::{Deserialize, Serialize};

fn default_case_id() -> String {
    "unknown".to_string()
}

/// One unit of work for the judge: an identifier plus the code under
/// review. Loaded from the samples file, or synthesized from remote
/// content in audit mode. Duplicate ids are not rejected; they produce
/// duplicate report entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCase {
    #[serde(default = "default_case_id")]
    pub id: String,
    pub code: String,
}

/// Raw model output for a single case. Consumed immediately by the
/// normalizer; never persisted as-is.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}
