//! Persistence of the virtual file set.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::EmitError;
use crate::vfs::Project;

/// Write every file under `root`. Returns the number of files written.
///
/// No rollback: files written before a failure stay on disk.
pub fn persist(project: &Project, root: &Path) -> Result<usize, EmitError> {
    let mut count = 0usize;
    for file in project.files() {
        let target = root.join(file.path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| EmitError::Persist {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&target, file.text()).map_err(|e| EmitError::Persist {
            path: target.clone(),
            source: e,
        })?;
        debug!("wrote {}", target.display());
        count += 1;
    }
    info!("wrote {} generated files under {}", count, root.display());
    Ok(count)
}
