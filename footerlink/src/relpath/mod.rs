// Relative link targets between documents

use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Compute the link target that leads from `from_dir` to `to`, with `/`
/// separators regardless of platform.
///
/// Both paths are made absolute against the current directory and
/// normalized lexically before comparison, so `.` and `..` segments and
/// mixed relative/absolute inputs are handled. When the two paths share no
/// root (different drive prefixes on Windows) the absolute target is
/// returned instead.
pub fn relative_path(from_dir: &Path, to: &Path) -> Result<String> {
    let from_abs = absolutize(from_dir)?;
    let to_abs = absolutize(to)?;
    let from = normalize(&from_abs);
    let to = normalize(&to_abs);

    if anchor(&from) != anchor(&to) {
        return Ok(join_components(&to));
    }

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(from[common..].iter().map(|_| "..".to_string()));
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(parts.join("/"))
    }
}

pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Lexical normalization: drops `.`, folds `..` into its parent, and never
/// climbs above the root.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

fn anchor<'a>(components: &'a [Component<'a>]) -> &'a [Component<'a>] {
    let len = components
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count();
    &components[..len]
}

fn join_components(components: &[Component<'_>]) -> String {
    components
        .iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .replace('\\', "/")
}
