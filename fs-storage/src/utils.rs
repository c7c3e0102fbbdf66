use std::fs;
use std::path::Path;

use data_error::{FolioError, Result};

/// Write `data` to a temporary file and move it over `dest`.
///
/// The temporary file lives in the same directory as `dest`, so the final
/// rename stays on one filesystem and readers never observe a partially
/// written file. Missing parent directories are created.
pub fn temp_and_move(data: &[u8], dest: impl AsRef<Path>) -> Result<()> {
    let dest = dest.as_ref();
    let parent = dest.parent().ok_or_else(|| {
        FolioError::Storage(
            dest.display().to_string(),
            "Failed to get parent directory".to_owned(),
        )
    })?;
    fs::create_dir_all(parent)?;

    let file_name = dest.file_name().and_then(|name| name.to_str());
    let file_name = file_name.ok_or_else(|| {
        FolioError::Storage(
            dest.display().to_string(),
            "Destination has no file name".to_owned(),
        )
    })?;

    let tmp = parent.join(format!("{}.tmp", file_name));
    fs::write(&tmp, data)?;
    fs::rename(&tmp, dest)?;

    Ok(())
}

/// Recover the storage key from the path of a record file.
pub fn extract_key_from_file_path(label: &str, path: &Path) -> Result<String> {
    path.file_stem()
        .ok_or_else(|| {
            FolioError::Storage(
                label.to_owned(),
                "Failed to extract file stem from filename".to_owned(),
            )
        })?
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| {
            FolioError::Storage(
                label.to_owned(),
                "Failed to convert file stem to string".to_owned(),
            )
        })
}

/// Reject keys that cannot serve as a file name inside the storage folder.
pub fn validate_key(label: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FolioError::Storage(
            label.to_owned(),
            "Empty key".to_owned(),
        ));
    }
    if key.chars().any(std::path::is_separator) {
        return Err(FolioError::Storage(
            label.to_owned(),
            format!("Key {} contains a path separator", key),
        ));
    }
    Ok(())
}
