use std::path::Path;

use crate::{Error, Result};

/// Creates the parent directories of a file that is about to be written.
pub fn create_directory_for_file(p: &Path) -> Result {
    if let Some(parent_dir) = p.parent() {
        std::fs::create_dir_all(parent_dir)
            .map_err(|e| Error::Runtime(format!("Unable to create the parent directory of '{}' ({e})", p.to_string_lossy())))?;
    }

    Ok(())
}
