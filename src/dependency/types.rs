//! Shared vocabulary for dependency scanning and resolution.
//!
//! Plain data contracts with no behavior. The resolver produces
//! `ResolveResult` and `PackageInfo`; the remaining types describe the
//! scanner/graph layer that consumes resolution results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How a specifier was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    /// Bare package name, looked up under `node_modules`.
    Npm,
    /// `.`-prefixed specifier, resolved against the importer.
    Relative,
    /// `/`-prefixed filesystem path.
    Absolute,
}

impl DependencyType {
    /// Stable string form, matching the serialized representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

impl std::fmt::Display for DependencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Import binding style of an import statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Default,
    Namespace,
    Named,
}

/// Position of an import statement in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Byte offset of the statement start.
    pub start: usize,
    /// Byte offset of the statement end.
    pub end: usize,
    /// Line number (1-indexed).
    pub line: u32,
}

/// A parsed import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// Specifier exactly as written in the source.
    pub source: String,
    /// Classification of the specifier.
    pub kind: DependencyType,
    /// Binding style (default, namespace, named).
    pub import_kind: ImportKind,
    /// Identifiers bound by a named import.
    pub specifiers: Vec<String>,
    /// Location in the source file.
    pub loc: SourceLocation,
}

/// Package descriptor projection (`package.json`).
///
/// Only the four fields the resolver cares about; everything else in the
/// descriptor is dropped at parse time. Descriptors may omit any field, so
/// absent `name`/`version` come back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package name.
    #[serde(default)]
    pub name: String,
    /// Package version.
    #[serde(default)]
    pub version: String,
    /// CommonJS entry file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// ECMAScript-module entry file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// Result of resolving one import specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResult {
    /// Resolved file path, or the untouched specifier for external results.
    pub resolved: PathBuf,
    /// Whether the dependency is left to the host instead of bundled.
    pub external: bool,
    /// Classification of the specifier.
    pub kind: DependencyType,
    /// Descriptor metadata, present for `node_modules` packages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_info: Option<PackageInfo>,
}

/// Detailed information about one discovered dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// Package or module name.
    pub name: String,
    /// Version, for `node_modules` packages.
    pub version: String,
    /// Classification of the specifier.
    pub kind: DependencyType,
    /// Whether the dependency should be pre-bundled.
    pub needs_pre_bundle: bool,
    /// Entry file designated by the package.
    pub entry: PathBuf,
    /// Resolved absolute path.
    pub resolved: PathBuf,
    /// Files that import this dependency.
    pub importers: Vec<PathBuf>,
}

/// Dependency graph produced by a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// All discovered dependencies, keyed by specifier.
    pub dependencies: BTreeMap<String, DependencyInfo>,
    /// Project entry files.
    pub entry_points: Vec<PathBuf>,
    /// Dependencies queued for pre-bundling.
    pub pre_bundle_deps: Vec<String>,
}

/// Options for a dependency scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Project root directory.
    pub root: PathBuf,
    /// Entry files to scan from.
    pub entries: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DependencyType::Npm).unwrap(),
            "\"npm\""
        );
        assert_eq!(
            serde_json::to_string(&DependencyType::Relative).unwrap(),
            "\"relative\""
        );
        assert_eq!(DependencyType::Absolute.as_str(), "absolute");
    }

    #[test]
    fn test_package_info_defaults_for_missing_fields() {
        let info: PackageInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.name, "");
        assert_eq!(info.version, "");
        assert!(info.main.is_none());
        assert!(info.module.is_none());
    }

    #[test]
    fn test_package_info_drops_unknown_fields() {
        let info: PackageInfo = serde_json::from_str(
            r#"{"name":"react","version":"18.0.0","main":"index.js","scripts":{"test":"jest"}}"#,
        )
        .unwrap();
        assert_eq!(info.name, "react");
        assert_eq!(info.version, "18.0.0");
        assert_eq!(info.main.as_deref(), Some("index.js"));
    }

    #[test]
    fn test_resolve_result_roundtrip() {
        let result = ResolveResult {
            resolved: PathBuf::from("/proj/node_modules/react/index.js"),
            external: false,
            kind: DependencyType::Npm,
            package_info: Some(PackageInfo {
                name: "react".to_string(),
                version: "18.0.0".to_string(),
                main: Some("index.js".to_string()),
                module: None,
            }),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: ResolveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_dependency_graph_roundtrip() {
        let mut graph = DependencyGraph::default();
        graph.entry_points.push(PathBuf::from("/proj/src/main.js"));
        graph.pre_bundle_deps.push("react".to_string());
        graph.dependencies.insert(
            "react".to_string(),
            DependencyInfo {
                name: "react".to_string(),
                version: "18.0.0".to_string(),
                kind: DependencyType::Npm,
                needs_pre_bundle: true,
                entry: PathBuf::from("index.js"),
                resolved: PathBuf::from("/proj/node_modules/react/index.js"),
                importers: vec![PathBuf::from("/proj/src/main.js")],
            },
        );

        let json = serde_json::to_string(&graph).unwrap();
        let back: DependencyGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
