//! Reading and writing pane contents

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a whole text file
pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}

/// Write `text` to `path`, creating the parent directory when needed
pub fn write_text(path: &Path, text: &str) -> Result<(), DocumentError> {
    let map_err = |source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(map_err)?;
    }
    fs::write(path, text).map_err(map_err)?;
    info!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}
