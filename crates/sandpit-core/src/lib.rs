//! # Sandpit Core - grid simulation and collision engine
//!
//! A fixed-size grid of material cells evolved by a two-pass cellular automaton,
//! plus a single axis-aligned player box that collides with the grid.
//!
//! Rendering, input devices and scene generation live outside this crate; hosts
//! talk to [`world::World`] through commands and read back the grid and player pose.

pub mod config;
pub mod entity;
pub mod simulation;
pub mod tools;
pub mod world;

pub use config::SimConfig;
pub use world::World;
