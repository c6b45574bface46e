use crate::config::EnvConfig;
use crate::errors::RunError;
use crate::forge::{parse_blob_url, ContentFetcher};
use crate::layout::Layout;
use crate::model::EvaluationCase;
use crate::normalize::clean_model_response;
use crate::providers::llm::{LlmClient, OpenAIClient};
use crate::report;
use anyhow::Context;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Fixed id for the single case synthesized in remote-audit mode.
pub const REMOTE_CASE_ID: &str = "github_audit";

/// Outcome counts for one run, consumed by the CLI completion line.
#[derive(Debug)]
pub struct RunSummary {
    pub judged: usize,
    pub failed: usize,
    pub report_path: PathBuf,
}

/// Top-level evaluation driver. One runner per run; cases are processed
/// strictly sequentially and report order equals input order.
pub struct Runner {
    layout: Layout,
    fetcher: ContentFetcher,
    client: Arc<dyn LlmClient>,
}

impl Runner {
    pub fn new(layout: Layout, fetcher: ContentFetcher, client: Arc<dyn LlmClient>) -> Self {
        Self {
            layout,
            fetcher,
            client,
        }
    }

    /// Wire the live provider client and fetcher from captured config.
    pub fn from_config(layout: Layout, config: &EnvConfig) -> Self {
        let fetcher = ContentFetcher::new(config.github_token.clone());
        let client = Arc::new(OpenAIClient::deterministic(config.api_key.clone()));
        Self::new(layout, fetcher, client)
    }

    /// Drive one evaluation run end to end. An `input` starting with
    /// `http` selects remote-audit mode; anything else (or nothing) runs
    /// the local sample batch.
    pub async fn run(&self, input: Option<&str>) -> anyhow::Result<RunSummary> {
        let rubric_path = self.layout.rubric_path();
        if !rubric_path.exists() {
            return Err(RunError::MissingRubric(rubric_path).into());
        }
        let rubric = std::fs::read_to_string(&rubric_path)
            .with_context(|| format!("failed to read rubric at {}", rubric_path.display()))?;

        let cases = self.select_cases(input).await?;

        let total = cases.len();
        let mut results: report::Report = Vec::new();
        let mut failed = 0usize;

        for (idx, case) in cases.iter().enumerate() {
            println!("Judging '{}' ({}/{})...", case.id, idx + 1, total);

            let response = self.client.complete(&rubric, &case.code).await?;
            let cleaned = clean_model_response(&response.text);

            match parse_evaluation(&cleaned) {
                Some(mut evaluation) => {
                    evaluation.insert("input_id".to_string(), Value::String(case.id.clone()));
                    results.push(Value::Object(evaluation));
                }
                None => {
                    tracing::debug!(case = %case.id, "judge output failed JSON parse");
                    let path = report::debug::write_debug_artifact(
                        &self.layout.debug_dir(),
                        &case.id,
                        &cleaned,
                    )?;
                    println!("JSON parse failed for '{}'. Saved to {}", case.id, path.display());
                    failed += 1;
                }
            }
        }

        let report_path = self.layout.report_path();
        report::json::write_report(&results, &report_path)?;

        Ok(RunSummary {
            judged: results.len(),
            failed,
            report_path,
        })
    }

    async fn select_cases(&self, input: Option<&str>) -> anyhow::Result<Vec<EvaluationCase>> {
        if let Some(url) = input.filter(|s| s.starts_with("http")) {
            println!("Mode: GitHub audit -> {url}");
            let request =
                parse_blob_url(url).ok_or_else(|| RunError::InvalidUrl(url.to_string()))?;
            let code = self.fetcher.fetch(&request).await.map_err(RunError::Fetch)?;
            return Ok(vec![EvaluationCase {
                id: REMOTE_CASE_ID.to_string(),
                code,
            }]);
        }

        let samples_path = self.layout.samples_path();
        println!("Mode: local samples -> {}", samples_path.display());
        if !samples_path.exists() {
            return Err(RunError::MissingSamples(samples_path).into());
        }
        let raw = std::fs::read_to_string(&samples_path)
            .with_context(|| format!("failed to read samples at {}", samples_path.display()))?;
        let cases: Vec<EvaluationCase> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse samples at {}", samples_path.display()))?;
        Ok(cases)
    }
}

/// A usable judge verdict is a JSON object; anything else, including JSON
/// scalars and arrays (which cannot carry `input_id`), counts as a parse
/// failure and goes to a debug artifact.
fn parse_evaluation(cleaned: &str) -> Option<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) | Err(_) => None,
    }
}
