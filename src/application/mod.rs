//! Application Layer
//!
//! Use cases that orchestrate the flow between domain and infrastructure.
//! Every use case is stateless: it receives the resolved descriptor (when it
//! needs one) and the ports it runs through.
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Run the build tool and verify the artifact
//! - `InstallUseCase` - Install, uninstall and reinstall via the package manager
//! - `DependsUseCase` - Fetch build/test tooling
//! - `CleanUseCase` - Remove build output and packaging metadata

pub mod build;
pub mod clean;
pub mod depends;
pub mod install;

pub use build::{BuildReport, BuildUseCase};
pub use clean::{CleanOptions, CleanResult, CleanUseCase, SkipReason, SkippedPath};
pub use depends::DependsUseCase;
pub use install::{InstallReport, InstallUseCase, ReinstallReport};
