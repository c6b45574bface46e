use std::io;
use std::path::{Path, PathBuf};

/// Persist the cleaned-but-unparseable model output for one failed case,
/// keyed by its input id. Creates the debug directory on demand; artifacts
/// are never cleaned up automatically. Returns the artifact path.
pub fn write_debug_artifact(debug_dir: &Path, input_id: &str, cleaned: &str) -> io::Result<PathBuf> {
    std::fs::create_dir_all(debug_dir)?;
    let path = debug_dir.join(format!("debug_{input_id}.txt"));
    std::fs::write(&path, cleaned)?;
    Ok(path)
}
