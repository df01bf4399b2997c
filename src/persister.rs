use crate::error::DescribeError;
use chrono::Local;
use log::info;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// `description_<YYYYMMDD_HHMMSS>.txt` for the current local time.
pub fn timestamped_filename() -> String {
    format!("description_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Appends `text` as one line to `directory/filename`, creating the
/// directory as needed. Existing file content is never truncated.
pub fn save_description(
    text: &str,
    directory: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, DescribeError> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => timestamped_filename(),
    };
    let filepath = directory.join(filename);
    let save_error = |source: std::io::Error| DescribeError::Save {
        path: filepath.clone(),
        source,
    };

    fs::create_dir_all(directory).map_err(save_error)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .map_err(save_error)?;
    file.write_all(format!("{}\n", text).as_bytes())
        .map_err(save_error)?;
    file.flush().map_err(save_error)?;

    info!("Appended {} bytes to {}", text.len() + 1, filepath.display());
    Ok(filepath)
}
