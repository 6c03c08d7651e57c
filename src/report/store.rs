//! Saving rendered reports as downloadable text files.

use std::path::{Path, PathBuf};

use crate::error::PlanError;

pub const BREAKDOWN_FILENAME: &str = "Study_Plan_Breakdown.txt";
pub const AI_PLAN_FILENAME: &str = "Full_AI_Study_Plan.txt";

/// Write a rendered report under `dir` and return the full path.
pub async fn save_report(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, PlanError> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(filename);
    tokio::fs::write(&path, contents).await?;

    tracing::info!(
        path = %path.display(),
        bytes = contents.len(),
        "Report saved"
    );
    Ok(path)
}
