use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extension given to converted files.
pub const HTML_EXTENSION: &str = "html";

/// Read a markdown document from disk
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write converted html, creating parent directories if they don't exist
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Output location for `input` inside `out_dir`: same file stem, `.html` extension.
pub fn html_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "index".into());
    name.push(".");
    name.push(HTML_EXTENSION);
    out_dir.join(name)
}
