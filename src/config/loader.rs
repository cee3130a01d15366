//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WheelwrightError, WheelwrightResult};

use super::types::{ColorMode, Config};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "wheelwright.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: WarningKind,
    pub key: String,
    /// Config file the key came from; `None` for environment variables
    pub file: Option<PathBuf>,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// What is wrong with a configuration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Key is not recognised and was ignored
    UnknownKey,
    /// Value is not one of the accepted choices; the default was kept
    InvalidValue {
        value: String,
        expected: &'static str,
    },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WheelwrightResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| WheelwrightError::io(path, e))?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> WheelwrightResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WheelwrightError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: WarningKind::UnknownKey,
                key: key.clone(),
                file: Some(path.to_path_buf()),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file found wins; environment overrides apply on top.
/// A config file that exists but does not parse is an error.
pub fn load_layered(
    project_root: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> WheelwrightResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let user_config = user_config_dir(&get_env).map(|dir| dir.join("wheelwright/config.toml"));

    let candidates = std::iter::once(project_config).chain(user_config);
    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(file = %candidate.display(), "loading config");
            let (config, mut warnings) = load_with_warnings(&candidate)?;
            let config = with_env_overrides(config, &get_env, &mut warnings);
            return Ok((config, warnings));
        }
    }

    let mut warnings = Vec::new();
    let config = with_env_overrides(Config::default(), &get_env, &mut warnings);
    Ok((config, warnings))
}

/// Apply environment variable overrides (WHEELWRIGHT_* prefix)
///
/// Values that cannot be interpreted are reported in `warnings` and ignored.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<ConfigWarning>,
) -> Config {
    // WHEELWRIGHT_PYTHON
    if let Some(python) = get_env("WHEELWRIGHT_PYTHON").filter(|v| !v.trim().is_empty()) {
        config.toolchain.python = python;
    }

    // WHEELWRIGHT_METADATA
    if let Some(file) = get_env("WHEELWRIGHT_METADATA").filter(|v| !v.trim().is_empty()) {
        config.metadata.file = PathBuf::from(file);
    }

    // WHEELWRIGHT_COLOR
    if let Some(color) = get_env("WHEELWRIGHT_COLOR") {
        match color.trim().to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => warnings.push(ConfigWarning {
                kind: WarningKind::InvalidValue {
                    value: color.clone(),
                    expected: "auto, always, never",
                },
                key: "WHEELWRIGHT_COLOR".to_string(),
                file: None,
                line: None,
                suggestion: None,
            }),
        }
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir(get_env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    get_env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "metadata",
        "file",
        "toolchain",
        "python",
        "build_args",
        "pip_args",
        "depends",
        "packages",
        "clean",
        "extra_paths",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
