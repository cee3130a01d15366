//! Test fixtures - reusable content constants for tests.
#![allow(dead_code)]

/// Metadata for the package used throughout the tests
pub const SAMPLE_SETUP_CFG: &str = "[metadata]
name = sample-tool
version = 2.3.1
description = A sample tool

[options]
packages = find:
";

/// Wheel expected for `SAMPLE_SETUP_CFG`
pub const SAMPLE_WHEEL: &str = "dist/sample_tool-2.3.1-py3-none-any.whl";

/// Metadata without a version line
pub const NO_VERSION_SETUP_CFG: &str = "[metadata]
name = sample-tool
";

/// Stand-in for the Python interpreter.
///
/// Logs its arguments to `calls.log` next to itself, writes `$FAKE_WHEEL`
/// when asked to build, and exits with `$FAKE_UNINSTALL_EXIT` for uninstall
/// or `$FAKE_EXIT` otherwise.
pub const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
if [ "$2" = "build" ] && [ -n "$FAKE_WHEEL" ]; then
    mkdir -p "$(dirname "$FAKE_WHEEL")"
    printf 'wheel' > "$FAKE_WHEEL"
fi
if [ "$3" = "uninstall" ]; then
    exit "${FAKE_UNINSTALL_EXIT:-0}"
fi
exit "${FAKE_EXIT:-0}"
"#;
