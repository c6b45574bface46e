use clap::Parser;

#[derive(Parser)]
#[command(
    name = "appraise",
    version,
    about = "Score source files against a judge rubric with an LLM and persist structured results"
)]
pub struct Cli {
    /// GitHub blob URL to audit remotely; anything else (or nothing) runs
    /// the local sample batch.
    pub source: Option<String>,
}
