//! Process-wide configuration, captured once from the environment into an
//! immutable struct and passed to the components that need it.

use crate::errors::RunError;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_PROJECT: &str = "APPRAISE_PROJECT";
pub const ENV_FORGE_TOKEN: &str = "GITHUB_TOKEN";

pub const DEFAULT_PROJECT: &str = "ai-eval-pipeline";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Credential for the model provider. Required.
    pub api_key: String,
    /// Grouping label for observability. No effect on evaluation logic.
    pub project: String,
    /// Optional bearer token for the GitHub contents API. Unset means
    /// unauthenticated fetches under public rate limits.
    pub github_token: Option<String>,
}

impl EnvConfig {
    /// Capture configuration from the environment. A missing (or empty)
    /// credential is fatal before any other work.
    pub fn from_env() -> Result<Self, RunError> {
        let api_key = match std::env::var(ENV_API_KEY) {
            Ok(v) if !v.is_empty() => v,
            _ => return Err(RunError::MissingCredential(ENV_API_KEY)),
        };

        let project = std::env::var(ENV_PROJECT).unwrap_or_else(|_| DEFAULT_PROJECT.to_string());
        let github_token = std::env::var(ENV_FORGE_TOKEN).ok().filter(|t| !t.is_empty());

        Ok(Self {
            api_key,
            project,
            github_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RunError;
    use std::sync::{Mutex, OnceLock};

    // Env-mutating tests share one lock; restore what they touch.
    fn test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvRestore {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvRestore {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let previous = std::env::var(key).ok();
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvRestore {
        fn drop(&mut self) {
            match &self.previous {
                Some(v) => std::env::set_var(self.key, v),
                None => std::env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn missing_credential_is_an_error() {
        let _lock = test_lock().lock().expect("test lock poisoned");
        let _key = EnvRestore::set(ENV_API_KEY, None);
        let err = EnvConfig::from_env().unwrap_err();
        assert!(matches!(err, RunError::MissingCredential(ENV_API_KEY)));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let _lock = test_lock().lock().expect("test lock poisoned");
        let _key = EnvRestore::set(ENV_API_KEY, Some(""));
        assert!(EnvConfig::from_env().is_err());
    }

    #[test]
    fn project_defaults_and_token_is_optional() {
        let _lock = test_lock().lock().expect("test lock poisoned");
        let _key = EnvRestore::set(ENV_API_KEY, Some("sk-test"));
        let _project = EnvRestore::set(ENV_PROJECT, None);
        let _token = EnvRestore::set(ENV_FORGE_TOKEN, None);

        let config = EnvConfig::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.project, DEFAULT_PROJECT);
        assert!(config.github_token.is_none());
    }

    #[test]
    fn explicit_values_are_captured() {
        let _lock = test_lock().lock().expect("test lock poisoned");
        let _key = EnvRestore::set(ENV_API_KEY, Some("sk-test"));
        let _project = EnvRestore::set(ENV_PROJECT, Some("nightly-audit"));
        let _token = EnvRestore::set(ENV_FORGE_TOKEN, Some("ghp_abc"));

        let config = EnvConfig::from_env().unwrap();
        assert_eq!(config.project, "nightly-audit");
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
    }
}
