// Work-order governance reporting pipeline.
//
// The flow is load -> classify -> bucket -> aggregate -> export. The
// binary in `main.rs` drives it interactively; integration tests and
// downstream tooling call the modules directly.
pub mod assembler;
pub mod classifier;
pub mod config;
pub mod error;
pub mod loader;
pub mod months;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;
