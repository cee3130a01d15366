pub mod build;
pub mod clean;
pub mod info;
pub mod invocation;
