//! Dependency resolver.
//!
//! Locates the file behind an import specifier during a scan or bundle:
//! bare package names go through `node_modules`, `.`-prefixed specifiers
//! resolve against the importer, `/`-prefixed specifiers are normalized
//! in place.
//!
//! Scope is deliberately narrow: scoped packages, conditional exports,
//! symlink/workspace resolution, extension probing, and directory index
//! fallback are not handled here.

use crate::dependency::types::{DependencyType, PackageInfo, ResolveResult};
use crate::error::Error;
use std::path::{Component, Path, PathBuf};

/// Package descriptor file name.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Entry file used when a descriptor names neither `module` nor `main`.
const DEFAULT_ENTRY: &str = "index.js";

/// A bare package specifier is anything not starting with `.` or `/`.
fn is_bare_specifier(specifier: &str) -> bool {
    !specifier.starts_with('.') && !specifier.starts_with('/')
}

/// Working directory, used when no importer or project root is given.
fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Lexically normalize a path: collapse `.` segments and fold `..` into
/// the preceding component. Purely textual, no filesystem access.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // At the root, ".." stays at the root; on a relative
                // path with nothing left to pop, it is kept as-is
                if !out.pop() && !out.has_root() {
                    out.push(component.as_os_str());
                }
            }
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                out.push(component.as_os_str());
            }
        }
    }

    out
}

/// Make a path absolute (against the working directory) and normalize it.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&current_dir().join(path))
    }
}

/// Resolve an import specifier to a file on disk.
///
/// Classification, first match wins: bare package (via `node_modules` under
/// `project_root`, defaulting to the working directory), relative (against
/// the importer's directory, defaulting to the working directory), then
/// absolute. Anything that matches none of the three is passed through
/// unresolved and marked external.
///
/// # Errors
/// Returns [`Error::PackageNotFound`] when a bare specifier has no
/// descriptor under `node_modules`, and [`Error::DescriptorRead`] /
/// [`Error::DescriptorParse`] when a located descriptor cannot be read
/// or parsed.
pub async fn resolve_dependency(
    specifier: &str,
    importer: Option<&Path>,
    project_root: Option<&Path>,
) -> Result<ResolveResult, Error> {
    // 1. Bare package via node_modules
    if is_bare_specifier(specifier) {
        let root = project_root.map_or_else(current_dir, Path::to_path_buf);
        let descriptor = root
            .join("node_modules")
            .join(specifier)
            .join(DESCRIPTOR_FILE);

        if !file_exists(&descriptor).await {
            return Err(Error::PackageNotFound {
                specifier: specifier.to_string(),
                root,
            });
        }

        let package_info = read_package_info(&descriptor).await?;
        let package_root = descriptor.parent().unwrap_or(root.as_path()).to_path_buf();
        let resolved = resolve_package_entry(&package_root).await?;

        return Ok(ResolveResult {
            resolved,
            external: false,
            kind: DependencyType::Npm,
            package_info: Some(package_info),
        });
    }

    // 2. Relative to the importer (or the working directory)
    if specifier.starts_with('.') {
        let base = importer
            .and_then(Path::parent)
            .map_or_else(current_dir, Path::to_path_buf);

        return Ok(ResolveResult {
            resolved: absolutize(&base.join(specifier)),
            external: false,
            kind: DependencyType::Relative,
            package_info: None,
        });
    }

    // 3. Absolute path
    if specifier.starts_with('/') {
        return Ok(ResolveResult {
            resolved: absolutize(Path::new(specifier)),
            external: false,
            kind: DependencyType::Absolute,
            package_info: None,
        });
    }

    // 4. Unreachable under the prefix checks above; kept so future
    // specifier shapes degrade to an external result instead of panicking.
    Ok(ResolveResult {
        resolved: PathBuf::from(specifier),
        external: true,
        kind: DependencyType::Npm,
        package_info: None,
    })
}

/// Resolve a package's entry file from its descriptor.
///
/// Precedence: `module` (ESM) over `main` (CJS) over a literal `index.js`.
/// Empty-string fields count as absent. The returned path is not checked
/// for existence; that is [`file_exists`]'s concern.
pub async fn resolve_package_entry(package_root: &Path) -> Result<PathBuf, Error> {
    let descriptor = package_root.join(DESCRIPTOR_FILE);
    let info = read_package_info(&descriptor).await?;

    let entry = [info.module.as_deref(), info.main.as_deref()]
        .into_iter()
        .flatten()
        .find(|entry| !entry.is_empty())
        .unwrap_or(DEFAULT_ENTRY);

    Ok(package_root.join(entry))
}

/// Read and parse a package descriptor, projecting the four known fields.
pub async fn read_package_info(descriptor_path: &Path) -> Result<PackageInfo, Error> {
    let raw = tokio::fs::read_to_string(descriptor_path)
        .await
        .map_err(|source| Error::DescriptorRead {
            path: descriptor_path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| Error::DescriptorParse {
        path: descriptor_path.to_path_buf(),
        source,
    })
}

/// Check whether a path exists.
///
/// Never fails: missing files and unreadable files both come back `false`.
pub async fn file_exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}
