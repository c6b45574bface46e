//! Filesystem layout anchored at the program's base directory (not the
//! working directory). All runtime artifacts live under `data/`.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Judge rubric and instructions; read-only input.
    pub fn rubric_path(&self) -> PathBuf {
        self.base
            .join(".specify")
            .join("agents")
            .join("judge.agent.md")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Batch-mode input: a JSON array of `{id, code}` objects.
    pub fn samples_path(&self) -> PathBuf {
        self.data_dir().join("test_cases").join("sample.json")
    }

    /// Run report; overwritten on every completed run.
    pub fn report_path(&self) -> PathBuf {
        self.data_dir().join("evaluation_report.json")
    }

    /// Debug artifacts for malformed model output; never cleaned up.
    pub fn debug_dir(&self) -> PathBuf {
        self.data_dir().join("debug")
    }
}
