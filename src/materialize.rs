use crate::errors::MaterializeError;
use crate::tree::Node;
use std::fs;
use std::path::{Path, PathBuf};

/// Realizes the tree as real filesystem entries, pre-order, depth-first.
///
/// The effective path of a node is `parent + "/" + name`, or the bare name
/// when `parent` is empty — the driver passes `""` so the root lands in the
/// process's working directory. A directory is created before any of its
/// children, so a parent always exists when an entry inside it is attempted.
///
/// # Errors
///
/// Returns a [`MaterializeError`] on the first filesystem refusal. The walk
/// stops there: entries created earlier in the run are left on disk, entries
/// later in traversal order are never attempted.
pub fn materialize(node: &Node, parent: &str) -> Result<(), MaterializeError> {
    let path = effective_path(parent, node.name());

    match node {
        Node::Directory { children, .. } => {
            create_directory(&path)?;

            for child in children {
                materialize(child, &path)?;
            }

            Ok(())
        }
        Node::File { content, .. } => write_file(&path, content),
    }
}

fn effective_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Creates a single directory at `path`, refusing to reuse an existing entry.
///
/// The existence probe comes first so that a pre-existing skeleton surfaces
/// as [`MaterializeError::AlreadyExists`] rather than a bare I/O error.
fn create_directory(path: &str) -> Result<(), MaterializeError> {
    if Path::new(path).exists() {
        return Err(MaterializeError::AlreadyExists {
            path: PathBuf::from(path),
        });
    }

    fs::create_dir(path).map_err(|error| MaterializeError::DirectoryCreateFailed {
        path: PathBuf::from(path),
        source: error,
    })?;

    log::debug!("created directory '{}'", path);

    Ok(())
}

/// Writes `contents` as the full content of the file at `path`, creating or
/// truncating it.
fn write_file(path: &str, contents: &str) -> Result<(), MaterializeError> {
    fs::write(path, contents).map_err(|error| MaterializeError::FileWriteFailed {
        path: PathBuf::from(path),
        source: error,
    })?;

    log::debug!("created file '{}'", path);

    Ok(())
}
