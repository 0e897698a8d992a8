//! Material data for the Sandpit grid simulation
//!
//! This crate provides the foundational data types shared by the core and its hosts:
//! - Material codes (`Material`) and their one-byte wire value
//! - Material types (`MaterialType`) used by the rule dispatcher
//! - Static material definitions (`MaterialDef`) for renderers and tooling

mod materials;

pub use materials::{MATERIAL_DEFS, Material, MaterialDef, MaterialType, UnknownMaterial};
