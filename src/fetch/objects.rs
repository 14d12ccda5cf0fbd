use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::IoError;

const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Finds ELF executables and shared objects under `root`, sorted by path.
pub fn find_object_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut objects = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
        if entry.file_type().is_file() && is_object_file(entry.path())? {
            objects.push(entry.into_path());
        }
    }

    Ok(objects)
}

pub fn is_object_file(path: &Path) -> Result<bool, IoError> {
    let file = File::open(path).map_err(|e| IoError::read_error(path, e))?;
    let mut magic = Vec::with_capacity(ELF_MAGIC.len());
    file.take(ELF_MAGIC.len() as u64)
        .read_to_end(&mut magic)
        .map_err(|e| IoError::read_error(path, e))?;
    Ok(magic == ELF_MAGIC)
}
