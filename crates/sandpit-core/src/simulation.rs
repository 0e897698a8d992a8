//! Material data re-exported from sandpit-simulation

pub use sandpit_simulation::{MATERIAL_DEFS, Material, MaterialDef, MaterialType, UnknownMaterial};
