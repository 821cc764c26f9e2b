use chrono::NaiveDateTime;
use shotlist_compose::ComposedPrompt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const REPORT_FILE_PREFIX: &str = "prompts";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write report to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders the final prompt, the negative prompt and the settings block as one document.
pub fn render_report(prompt: &ComposedPrompt, settings_block: &str) -> String {
    format!(
        "FINAL PROMPT\n{}\n\nNEGATIVE PROMPT\n{}\n\n{}\n",
        prompt.positive, prompt.negative, settings_block
    )
}

pub fn report_file_name(timestamp: &NaiveDateTime) -> String {
    format!(
        "{REPORT_FILE_PREFIX}_{}.txt",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Writes `contents` to `prompts_<timestamp>.txt` inside `output_dir`.
///
/// The directory is created when missing. The returned path is absolute when
/// it can be resolved.
pub fn save_report(
    contents: &str,
    output_dir: &Path,
    timestamp: &NaiveDateTime,
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(report_file_name(timestamp));
    fs::write(&path, contents).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    let path = fs::canonicalize(&path).unwrap_or(path);
    info!(path = %path.display(), "saved prompt report");
    Ok(path)
}
