use std::path::Path;

/// Write the report as an indented JSON array, overwriting any prior
/// report. Creates the data directory on first run. Called exactly once
/// per completed run, including the empty-report case.
pub fn write_report(results: &[serde_json::Value], out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, serde_json::to_string_pretty(results)?)?;
    Ok(())
}
