//! Core library for packaging projects with third-party tools and copying
//! their supporting files.
//!
//! This crate probes for external packagers, runs them through the
//! [`ToolRunner`] capability, and synchronises directory trees into output
//! directories with clobber semantics.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use portapack_core::{CoreConfig, SystemToolRunner};
//! use portapack_core::packaging::{PythonPackageRequest, package_python};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::default();
//! let request = PythonPackageRequest {
//!     script: PathBuf::from("app/main.py"),
//!     output_dir: PathBuf::from("dist"),
//!     onefile: false,
//!     icon: None,
//! };
//!
//! let outcome = package_python(&SystemToolRunner, &config, &request).unwrap();
//! match outcome.supporting_files {
//!     Some(Ok(report)) => println!("{} supporting entries copied", report.copied.len()),
//!     Some(Err(e)) => eprintln!("supporting files not copied: {e}"),
//!     None => {}
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod packaging;
pub mod sync;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use external::{
    SystemToolRunner, Tool, ToolCommand, ToolOutput, ToolRunner, is_tool_installed, require_tool,
};
pub use sync::{SkippedEntry, SyncReport, copy_single, copy_tree};
