//! Recursive file enumeration filtered by extension.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    error::{DetectError, Result},
    reporter::Reporter,
};

/// Returns every file under `root` whose extension is one of `exts`.
///
/// Extensions are written with their leading dot (`".csproj"`) and compared
/// against everything from the last `.` of the file name, so a file named
/// just `.json` has the extension `.json`. Directories never match and
/// symlinks are not followed. Within a directory entries are visited in
/// file-name order.
///
/// A missing root is an error. Errors on entries below the root are
/// reported and skipped; an error on the root itself aborts the walk.
pub fn files_by_ext(
    root: &Path,
    exts: &[&str],
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    match fs::metadata(root) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter.warn(&format!(
                "Unable to walk {}: {e}",
                root.display()
            ));
            return Err(DetectError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(meta) if !meta.is_dir() => {
            reporter.warn(&format!(
                "The path {:?} is not a directory.",
                root.display().to_string()
            ));
        }
        _ => {}
    }

    let mut files = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                reporter.warn(&format!(
                    "Unable to walk {}: {err}",
                    root.display()
                ));
                return Err(DetectError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                reporter.warn(&format!(
                    "Skipping path {path:?} due to error: {err}"
                ));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let ext = file_ext(entry.path());
        if exts.iter().any(|wanted| *wanted == ext) {
            files.push(entry.into_path());
        }
    }

    reporter.debug(&format!(
        "Found {} files matching {exts:?} under {}",
        files.len(),
        root.display()
    ));

    Ok(files)
}

/// Extension of the final path element including the dot, or "" if none.
pub fn file_ext(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// File name with its extension removed.
pub fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let ext = file_ext(path);
    name.strip_suffix(ext.as_str()).unwrap_or(&name).to_string()
}

/// Path of `file` relative to `root`, "." when they are the same.
pub fn relative_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);

    if rel.as_os_str().is_empty() {
        return ".".into();
    }

    rel.display().to_string()
}
