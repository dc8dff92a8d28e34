use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::error::SiteError;

/// Replaces `dest` with a mirror of `src`.
///
/// `dest` is removed first when it exists. Returns the number of files copied.
/// Fails without touching anything when one directory contains the other.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::InvalidSourceDir(src.to_path_buf()));
    }
    let (src_abs, dest_abs) = (resolve(src)?, resolve(dest)?);
    if dest_abs.starts_with(&src_abs) || src_abs.starts_with(&dest_abs) {
        return Err(SiteError::OverlappingDirs {
            static_dir: src.to_path_buf(),
            output_dir: dest.to_path_buf(),
        });
    }
    if dest.exists() {
        info!("Deleting directory: {}", dest.display());
        fs::remove_dir_all(dest).map_err(SiteError::io(dest))?;
    }
    copy_recursive(src, dest)
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(dest).map_err(SiteError::io(dest))?;

    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if path.is_dir() {
            info!("Creating directory: {}", target.display());
            copied += copy_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(SiteError::io(&path))?;
            info!("Copied file: {} -> {}", path.display(), target.display());
            copied += 1;
        }
    }
    Ok(copied)
}

/// Canonical form of `path`, which need not exist yet.
///
/// The nearest existing ancestor is canonicalized and the missing
/// components are appended unchanged.
fn resolve(path: &Path) -> Result<PathBuf, SiteError> {
    let absolute = std::path::absolute(path).map_err(SiteError::io(path))?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = fs::canonicalize(existing).map_err(SiteError::io(existing))?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

/// Directory entries sorted by path, so builds are reproducible.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut paths = fs::read_dir(dir)
        .map_err(SiteError::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(SiteError::io(dir))?;
    paths.sort();
    Ok(paths)
}
