//! Package metadata resolution
//!
//! Derives a [`PackageDescriptor`] from a line-oriented project
//! configuration file such as `setup.cfg`. Only two lines matter:
//!
//! ```text
//! name = sample-tool
//! version = 2.3.1
//! ```
//!
//! Everything else in the file is ignored. The first matching line wins and
//! values are taken verbatim.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{WheelwrightError, WheelwrightResult};

/// Directory the build tool writes artifacts into, relative to the project root.
pub const DIST_DIR: &str = "dist";

/// Wheel tag for pure-Python, version-independent artifacts.
pub const WHEEL_TAG: &str = "py3-none-any";

const NAME_PREFIX: &str = "name = ";
const VERSION_PREFIX: &str = "version = ";

/// Name, version and expected artifact of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    /// Name exactly as declared
    pub raw_name: String,
    /// Name with `-` replaced by `_`
    pub normalized_name: String,
    /// Version exactly as declared
    pub version: String,
    /// `dist/{normalized_name}-{version}-py3-none-any.whl`
    pub artifact_path: String,
}

impl PackageDescriptor {
    /// Build a descriptor from raw values, deriving the normalized name and artifact path.
    pub fn new(raw_name: impl Into<String>, version: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let version = version.into();
        let normalized_name = normalize_name(&raw_name);
        let artifact_path = artifact_path(&normalized_name, &version);
        Self {
            raw_name,
            normalized_name,
            version,
            artifact_path,
        }
    }

    /// Artifact file name without the `dist/` directory.
    pub fn artifact_file_name(&self) -> &str {
        self.artifact_path
            .strip_prefix(DIST_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.artifact_path)
    }

    /// Artifact location inside a project directory.
    pub fn artifact_path_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(DIST_DIR).join(self.artifact_file_name())
    }
}

/// Replace every `-` with `_`.
pub fn normalize_name(raw_name: &str) -> String {
    raw_name.replace('-', "_")
}

/// Artifact path for a normalized name and version.
pub fn artifact_path(normalized_name: &str, version: &str) -> String {
    format!(
        "{}/{}-{}-{}.whl",
        DIST_DIR, normalized_name, version, WHEEL_TAG
    )
}

/// Resolve a descriptor from configuration text.
///
/// Fails with [`WheelwrightError::MissingField`] when either the `name` or
/// the `version` line is absent. No other validation is performed.
pub fn resolve(config_text: &str) -> WheelwrightResult<PackageDescriptor> {
    let raw_name = first_value(config_text, NAME_PREFIX).ok_or(WheelwrightError::MissingField {
        field: "name",
        file: None,
    })?;
    let version =
        first_value(config_text, VERSION_PREFIX).ok_or(WheelwrightError::MissingField {
            field: "version",
            file: None,
        })?;

    Ok(PackageDescriptor::new(raw_name, version))
}

/// Read a configuration file and resolve its descriptor.
pub fn resolve_file(path: &Path) -> WheelwrightResult<PackageDescriptor> {
    let content =
        std::fs::read_to_string(path).map_err(|e| WheelwrightError::io(path, e))?;

    let descriptor = resolve(&content).map_err(|err| match err {
        WheelwrightError::MissingField { field, .. } => WheelwrightError::MissingField {
            field,
            file: Some(path.to_path_buf()),
        },
        other => other,
    })?;

    tracing::debug!(
        file = %path.display(),
        name = %descriptor.raw_name,
        version = %descriptor.version,
        "resolved package metadata"
    );

    Ok(descriptor)
}

fn first_value<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.lines().find_map(|line| line.strip_prefix(prefix))
}
