use crate::cli::args::Cli;
use crate::exit_codes;
use anyhow::Result;
use appraise_core::config::EnvConfig;
use appraise_core::engine::runner::Runner;
use appraise_core::layout::Layout;
use std::path::{Path, PathBuf};

/// Resolve the base directory for rubric and data paths: `APPRAISE_HOME`
/// override first, else the workspace root this binary was built from.
/// Anchoring on the program location keeps runs independent of cwd.
fn resolve_base_dir() -> PathBuf {
    if let Ok(home) = std::env::var("APPRAISE_HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub async fn dispatch(cli: Cli) -> Result<i32> {
    let config = EnvConfig::from_env()?;
    println!("Project: {}", config.project);

    let layout = Layout::new(resolve_base_dir());
    let runner = Runner::from_config(layout, &config);

    let summary = runner.run(cli.source.as_deref()).await?;
    println!(
        "Evaluation complete: {} judged, {} failed. Report saved to {}",
        summary.judged,
        summary.failed,
        summary.report_path.display()
    );
    Ok(exit_codes::SUCCESS)
}
