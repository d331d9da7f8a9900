//! Recursive directory listing.

use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{Sender, bounded};
use ignore::WalkBuilder;
use log::{debug, warn};

use crate::error::{PicklineError, Result};

/// Paths buffered between the walker thread and the consumer.
const WALK_BUFFER: usize = 1024;

/// Stream the files below `root`, as paths relative to it.
///
/// The walk runs on its own thread and paths are yielded as they are
/// found. Hidden entries and anything excluded by ignore files are
/// skipped. Unreadable entries are logged and skipped. Dropping the
/// iterator stops the walk.
pub fn walk_files(root: &Path) -> Result<crossbeam_channel::IntoIter<String>> {
    if !root.is_dir() {
        return Err(PicklineError::line_source(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let (sender, paths) = bounded(WALK_BUFFER);
    let root = root.to_path_buf();
    thread::Builder::new()
        .name("pickline-walk".to_string())
        .spawn(move || walk(root, sender))?;

    Ok(paths.into_iter())
}

fn walk(root: PathBuf, sender: Sender<String>) {
    let walker = WalkBuilder::new(&root)
        .standard_filters(true)
        .require_git(false)
        .build();

    let mut found = 0;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(&root).unwrap_or(path);
        if sender.send(relative.to_string_lossy().into_owned()).is_err() {
            debug!("walk of {} stopped by the consumer", root.display());
            return;
        }
        found += 1;
    }

    debug!("walk of {} found {} files", root.display(), found);
}
