//! Git file listing.

use std::io::{self, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};

use log::{debug, warn};

use crate::error::{PicklineError, Result};
use crate::source::reader::LossyLines;

/// Whether the current directory is inside a git work tree.
///
/// Any failure to run git counts as "no".
pub fn is_inside_work_tree() -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stderr(Stdio::null())
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "true")
        .unwrap_or(false)
}

/// Stream the paths of the files tracked in the current work tree.
pub fn ls_files() -> Result<GitFiles> {
    let mut child = Command::new("git")
        .arg("ls-files")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PicklineError::line_source(format!("failed to spawn git: {e}")))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| PicklineError::line_source("git stdout was not captured"))?;

    Ok(GitFiles {
        child,
        lines: LossyLines::new(BufReader::new(stdout)),
        listed: 0,
        finished: false,
        reaped: false,
    })
}

/// Paths printed by a running `git ls-files`, yielded as they arrive.
///
/// Once the output is exhausted the process is reaped; a non-zero exit
/// status is yielded as a final error.
#[derive(Debug)]
pub struct GitFiles {
    child: Child,
    lines: LossyLines<BufReader<ChildStdout>>,
    listed: usize,
    finished: bool,
    reaped: bool,
}

impl GitFiles {
    fn finish(&mut self) -> Option<io::Result<String>> {
        self.finished = true;
        self.reaped = true;
        debug!("git ls-files listed {} files", self.listed);
        match self.child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Err(io::Error::other(format!(
                "git ls-files exited with {status}"
            )))),
            Err(e) => Some(Err(e)),
        }
    }
}

impl Iterator for GitFiles {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) if line.is_empty() => continue,
                Some(Ok(line)) => {
                    self.listed += 1;
                    return Some(Ok(line));
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => return self.finish(),
            }
        }
    }
}

impl Drop for GitFiles {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        if let Err(e) = self.child.kill() {
            warn!("failed to stop git ls-files: {e}");
        }
        let _ = self.child.wait();
    }
}
