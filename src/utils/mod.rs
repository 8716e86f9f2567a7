use std::io;
use std::path::Path;

use crate::{MetricsError, Result};

/// Check that `path` exists and is a regular file
pub fn check_input_file(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MetricsError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(MetricsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(MetricsError::InvalidInput {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    tracing::debug!(bytes = metadata.len(), "Input {} is a regular file", path.display());
    Ok(())
}

/// Read a file as UTF-8 text
pub fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs_err::read(path).map_err(|source| MetricsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|e| MetricsError::InvalidInput {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 ({})", e.utf8_error()),
    })
}

/// Final path component, as written in the report's `input_file` line
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Report file name for an input: its stem followed by `suffix`
pub fn report_name_for(input: &Path, suffix: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());

    format!("{}{}", stem, suffix)
}
