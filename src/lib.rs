//! Computes the directories Systemd searches for unit files.
//!
//! ```no_run
//! use systemd_unit_paths::lookup::{resolve, ProcessEnvironment, Scope};
//!
//! for dir in &resolve(Scope::System, "/", &ProcessEnvironment) {
//!     println!("{}", dir.display());
//! }
//! ```

pub mod lookup;
