//! Unified exit codes for the appraise CLI.
//! Part of the public contract; keep stable across releases.

use appraise_core::errors::RunError;

pub const SUCCESS: i32 = 0;
pub const RUN_FAILED: i32 = 1; // Evaluation aborted mid-run (fetch, provider, filesystem)
pub const CONFIG_ERROR: i32 = 2; // Startup failure (credential, rubric, samples)

/// Map a fatal error to its exit code. Startup-class conditions get
/// CONFIG_ERROR; everything else is a run failure.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RunError>() {
        Some(
            RunError::MissingCredential(_)
            | RunError::MissingRubric(_)
            | RunError::MissingSamples(_),
        ) => CONFIG_ERROR,
        _ => RUN_FAILED,
    }
}
