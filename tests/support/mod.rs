//! Fixture plumbing shared by the unit and end-to-end test suites.

use std::path::Path;
use walkdir::WalkDir;

/// Copy the tree under `src` into `dst`, creating directories as needed.
pub fn copy_tree(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).map_err(std::io::Error::other)?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Mark `path` read-only. Returns `false` when the current user can still
/// open it for writing (e.g. running as root), so the caller can bail out.
pub fn make_read_only(path: &Path) -> bool {
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(path, perms).unwrap();
    std::fs::OpenOptions::new().append(true).open(path).is_err()
}
