//! # Sandpit - headless host for the falling-sand sandbox
//!
//! Wraps [`sandpit_core::World`] with layered configuration, a free-running tick
//! loop and a RON scenario runner that verifies world state and writes JSON
//! reports.

pub mod config;
pub mod headless;
pub mod scenario;

pub use config::SandpitConfig;
pub use sandpit_core::World;
