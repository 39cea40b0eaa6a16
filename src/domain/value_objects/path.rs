//! Lexical path helpers
//!
//! Template paths are compared and rewritten without touching the disk, so
//! a template can reference files that the build has not produced yet.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components lexically.
///
/// Leading `..` components of a relative path are kept, since there is
/// nothing to pop them against.
///
/// # Examples
///
/// ```
/// use sambundle::domain::value_objects::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(normalize_path(Path::new("../x/./y")), PathBuf::from("../x/y"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Make `path` absolute against `working_dir` and normalize it.
pub fn absolutize(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&working_dir.join(path))
    }
}

/// Compute the path of `target` relative to `base`.
///
/// Both paths should be absolute (or both relative to the same directory).
/// Returns `.` when they are the same location.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = normalize_path(base);
    let target = normalize_path(target);

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Render a path the way it is written into a template: `/`-separated on
/// every platform.
pub fn template_path_string(path: &Path) -> String {
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }

    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// True if the relative path climbs out of its base directory.
pub fn escapes_base(relative: &Path) -> bool {
    relative.is_absolute()
        || matches!(relative.components().next(), Some(Component::ParentDir))
}
